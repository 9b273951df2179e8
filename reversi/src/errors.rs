use crate::{Color, Position};

/// The error type for [`Board::get()`](crate::Board::get), i.e. for a checked cell lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub position: Position,
    pub length: usize,
}

impl std::error::Error for OutOfRange {}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position {} is outside of the {}x{} board",
            self.position, self.length, self.length
        )
    }
}

/// The error type for [`Game::execute_action()`](crate::Game::execute_action).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalAction {
    /// Tried to pass although a disk could have been placed.
    IllegalPass { color: Color },
    /// Tried to place a disk where it does not capture anything, or outside the board.
    IllegalPlacement { color: Color, position: Position },
}

impl std::error::Error for IllegalAction {}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalAction::IllegalPass { color } => write!(
                f,
                "Player {} tried to pass, but a legal placement exists",
                color
            ),
            IllegalAction::IllegalPlacement { color, position } => write!(
                f,
                "Player {} cannot place a disk at {}",
                color, position
            ),
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardFromStrErr {
    Empty,
    InvalidChar { row: usize, col: usize, c: char },
    NotSquare { row: usize, len: usize, expected: usize },
}

impl std::error::Error for BoardFromStrErr {}

impl std::fmt::Display for BoardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFromStrErr::Empty => write!(f, "The board has no rows"),
            BoardFromStrErr::InvalidChar { row, col, c } => write!(
                f,
                "Invalid character '{}' at row {}, column {}, expected one of 'x', 'o', '-'",
                c, row, col
            ),
            BoardFromStrErr::NotSquare { row, len, expected } => write!(
                f,
                "Row {} has {} cells, but the board needs {} cells per row",
                row, len, expected
            ),
        }
    }
}
