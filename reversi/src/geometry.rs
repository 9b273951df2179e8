use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by row and column.
///
/// Coordinates are signed so that stepping off the board in any direction
/// still yields a representable position, which can then be range-checked.
///
/// Positions are deliberately not ordered. A range check compares both
/// coordinates independently, see [`Position::is_within()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

/// One of the eight unit steps between neighboring cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub row: i32,
    pub col: i32,
}

/// All eight directions, in a fixed order.
///
/// The order has no influence on which positions are legal or which disks
/// are flipped, only on the order in which they are visited.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { row: -1, col: -1 },
    Direction { row: -1, col: 0 },
    Direction { row: -1, col: 1 },
    Direction { row: 0, col: -1 },
    Direction { row: 0, col: 1 },
    Direction { row: 1, col: -1 },
    Direction { row: 1, col: 0 },
    Direction { row: 1, col: 1 },
];

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Is `lower <= self < upper` in both coordinates?
    pub fn is_within(self, lower: Position, upper: Position) -> bool {
        lower.row <= self.row
            && lower.col <= self.col
            && self.row < upper.row
            && self.col < upper.col
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, direction: Direction) -> Position {
        Position {
            row: self.row + direction.row,
            col: self.col + direction.col,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
