use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use reversi::{Game, Position};
use tracing::debug;

use crate::Strategy;

/// Picks the placement that flips the most disks, breaking ties randomly.
pub struct GreedyPlayer {
    rng: StdRng,
}

impl GreedyPlayer {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for GreedyPlayer {
    fn name(&self) -> &str {
        "greedy"
    }

    fn play(&mut self, game: &Game) -> anyhow::Result<Option<Position>> {
        let board = game.board();
        let color = game.current_color();
        let mut top_choices: Vec<Position> = Vec::new();
        let mut top_score = 0;
        for position in game.legal_actions() {
            let score = board.calculate(color, position).num_flipped();
            match score.cmp(&top_score) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => {
                    top_choices.push(position);
                }
                std::cmp::Ordering::Greater => {
                    top_choices = vec![position];
                    top_score = score;
                }
            }
        }
        debug!(?top_choices, top_score, "Greedy candidates");
        Ok(top_choices.choose(&mut self.rng).copied())
    }
}
