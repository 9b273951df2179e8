use quickcheck::{Arbitrary, Gen};

use crate::{Game, Position};

/// A game reached from the standard start by random legal actions.
#[derive(Clone, Debug)]
pub struct ReachableGame(pub Game);

impl Arbitrary for ReachableGame {
    fn arbitrary(g: &mut Gen) -> Self {
        let length = *g.choose(&[4, 6, 8]).unwrap();
        let mut game = Game::init(length);
        // Stop somewhere along the way, or at the end of the game
        let num_actions = usize::arbitrary(g) % (length * length);
        for _ in 0..num_actions {
            if game.is_game_over() {
                break;
            }
            let legal: Vec<Position> = game.legal_actions().iter().collect();
            let action = g.choose(&legal).copied();
            game.execute_action(action)
                .expect("Random legal action was rejected");
        }
        ReachableGame(game)
    }
}
