mod game;
mod player;
mod recording;
mod standings;
pub use game::*;
pub use player::*;
pub use recording::*;
pub use standings::*;

/// Settings shared by all games of a tournament.
#[derive(Clone, Copy, Debug)]
pub struct MatchConfig {
    /// Side length of the board, even and at least 4.
    pub board_length: usize,
    /// How often a player may submit an illegal action in a row before forfeiting.
    pub max_rejections: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_length: 8,
            max_rejections: 10,
        }
    }
}
