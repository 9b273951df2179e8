use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reversi_players::{GreedyPlayer, HumanPlayer, RandomPlayer, Strategy};

/// The kinds of players that can take part in a tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    Random,
    Greedy,
    Human,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Greedy => write!(f, "greedy"),
            PlayerKind::Human => write!(f, "human"),
        }
    }
}

pub struct Player {
    /// Unique within a tournament, e.g. "greedy-2".
    pub name: String,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: &str, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: String::from(name),
            strategy,
        }
    }

    /// Creates the player at position `idx` of the tournament. Players with
    /// randomness get their own RNG, seeded from `rng`.
    pub fn from_kind(kind: PlayerKind, idx: usize, rng: &mut StdRng) -> Self {
        let player_rng = StdRng::seed_from_u64(rng.gen());
        let strategy: Box<dyn Strategy> = match kind {
            PlayerKind::Random => Box::new(RandomPlayer::new(player_rng)),
            PlayerKind::Greedy => Box::new(GreedyPlayer::new(player_rng)),
            PlayerKind::Human => Box::new(HumanPlayer::from_stdio()),
        };
        Self::new(&format!("{}-{}", kind, idx + 1), strategy)
    }

    pub fn strategy(&mut self) -> &mut dyn Strategy {
        self.strategy.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tournament_with_several_humans_starts() {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(0);
            let names: Vec<String> = [PlayerKind::Human, PlayerKind::Greedy, PlayerKind::Human]
                .into_iter()
                .enumerate()
                .map(|(idx, kind)| Player::from_kind(kind, idx, &mut rng).name)
                .collect();
            tx.send(names).unwrap();
        });
        let names = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("Creating the second human player blocked");
        assert_eq!(names, ["human-1", "greedy-2", "human-3"]);
    }
}
