use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use reversi::{Game, Position};

use crate::Strategy;

/// Picks uniformly among the legal actions.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn play(&mut self, game: &Game) -> anyhow::Result<Option<Position>> {
        let legal_actions: Vec<Position> = game.legal_actions().iter().collect();
        Ok(legal_actions.choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use reversi::Color;

    use super::*;

    #[test]
    fn plays_only_legal_actions() {
        let mut player = RandomPlayer::new(StdRng::seed_from_u64(7));
        let mut game = Game::init(6);
        while !game.is_game_over() {
            let action = player.play(&game).unwrap();
            assert!(game.is_legal_action(action));
            game.execute_action(action).unwrap();
        }
        assert!(game.count(Color::Dark) + game.count(Color::Light) <= 36);
    }

    #[test]
    fn passes_when_stuck() {
        let board = "xoox\n-oox\nxoox\nxoxx".parse().unwrap();
        let game = Game::new(board, Color::Light);
        let mut player = RandomPlayer::new(StdRng::seed_from_u64(0));
        assert_eq!(player.play(&game).unwrap(), None);
    }
}
