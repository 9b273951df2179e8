mod greedy;
mod human;
mod random;
pub use greedy::*;
pub use human::*;
pub use random::*;

use reversi::{Game, Position};

/// A trait to simplify writing players.
///
/// The game is only borrowed immutably, so a player can look at the board,
/// the color to move, the legal actions and the disk counts, but cannot
/// change anything.
pub trait Strategy {
    /// A short name for logging and result tables.
    fn name(&self) -> &str;

    /// Choose the next action for the player to move. `Ok(None)` means passing,
    /// which should only be done if there is no legal placement.
    ///
    /// The game decides whether the action is legal. An error is reserved for
    /// failures to obtain an action at all, e.g. a closed input stream.
    fn play(&mut self, game: &Game) -> anyhow::Result<Option<Position>>;
}
