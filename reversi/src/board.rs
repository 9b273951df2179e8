mod capture;
mod legal_actions;
mod placement;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

pub use capture::*;
pub use legal_actions::*;
pub use placement::*;

use crate::{BoardFromStrErr, OutOfRange, Position, Square};

/// An immutable square grid of [`Square`]s.
///
/// There are no methods to change a board in place. Placing a disk, see
/// [`execute_action()`], produces a new board and leaves the old one intact.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    length: usize,
    /// Row-major, `length * length` entries.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a board from its rows.
    ///
    /// Panics if the grid is not square.
    pub fn new(rows: Vec<Vec<Square>>) -> Self {
        let length = rows.len();
        let mut squares = Vec::with_capacity(length * length);
        for row in rows {
            assert_eq!(row.len(), length, "Board rows must have as many cells as there are rows");
            squares.extend(row);
        }
        Self { length, squares }
    }

    /// A board of the given side length without any disks.
    pub fn empty(length: usize) -> Self {
        Self {
            length,
            squares: vec![Square::Empty; length * length],
        }
    }

    /// The standard starting board: four disks in the center, with dark on the
    /// main diagonal.
    ///
    /// Panics if `length` is odd or smaller than 2.
    pub fn init(length: usize) -> Self {
        assert!(
            length >= 2 && length % 2 == 0,
            "Board length must be even and at least 2, got {}",
            length
        );
        let half = length / 2;
        let mut squares = vec![Square::Empty; length * length];
        squares[(half - 1) * length + half - 1] = Square::Dark;
        squares[half * length + half] = Square::Dark;
        squares[half * length + half - 1] = Square::Light;
        squares[(half - 1) * length + half] = Square::Light;
        Self { length, squares }
    }

    /// The number of rows, which is also the number of columns.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Is the position on the board?
    pub fn is_in_range(&self, position: Position) -> bool {
        let length = self.length as i32;
        position.is_within(Position::new(0, 0), Position::new(length, length))
    }

    /// Checked lookup of a single cell.
    ///
    /// Indexing with `board[position]` is the unchecked variant and panics instead.
    pub fn get(&self, position: Position) -> Result<Square, OutOfRange> {
        if self.is_in_range(position) {
            Ok(self.squares[self.arr_idx(position)])
        } else {
            Err(OutOfRange {
                position,
                length: self.length,
            })
        }
    }

    /// All positions of the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let length = self.length as i32;
        (0..length).flat_map(move |row| (0..length).map(move |col| Position::new(row, col)))
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        // chunks() panics on a chunk size of zero
        self.squares.chunks(self.length.max(1))
    }

    /// How many cells are in the given state.
    pub fn count(&self, square: impl Into<Square>) -> usize {
        let square = square.into();
        self.squares.iter().filter(|&&s| s == square).count()
    }

    /// Returns a copy of this board where all the given positions are set to `square`.
    pub(crate) fn with_squares(&self, positions: &[Position], square: Square) -> Board {
        let mut squares = self.squares.clone();
        for &position in positions {
            squares[self.arr_idx(position)] = square;
        }
        Board {
            length: self.length,
            squares,
        }
    }

    fn arr_idx(&self, position: Position) -> usize {
        debug_assert!(self.is_in_range(position));
        position.row as usize * self.length + position.col as usize
    }
}

impl Index<Position> for Board {
    type Output = Square;

    fn index(&self, position: Position) -> &Square {
        assert!(
            self.is_in_range(position),
            "Position {} is outside of the {}x{} board",
            position,
            self.length,
            self.length
        );
        &self.squares[self.arr_idx(position)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for square in row {
                write!(f, "{}", square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{})", self)
    }
}

impl FromStr for Board {
    type Err = BoardFromStrErr;

    /// Parses the format produced by the [`Display`](fmt::Display) instance.
    ///
    /// Surrounding whitespace on each line is ignored, and so are blank lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(BoardFromStrErr::Empty);
        }
        let length = lines.len();
        let mut rows = Vec::with_capacity(length);
        for (row, line) in lines.into_iter().enumerate() {
            let squares = line
                .chars()
                .enumerate()
                .map(|(col, c)| Square::from_char(c).ok_or(BoardFromStrErr::InvalidChar { row, col, c }))
                .collect::<Result<Vec<Square>, _>>()?;
            if squares.len() != length {
                return Err(BoardFromStrErr::NotSquare {
                    row,
                    len: squares.len(),
                    expected: length,
                });
            }
            rows.push(squares);
        }
        Ok(Board::new(rows))
    }
}

/// Parses a board literal, panicking on invalid input.
///
/// Intended for tests and examples, e.g. `board!("-xo-\n...")`.
#[macro_export]
macro_rules! board {
    ($s:expr) => {
        <$crate::Board as std::str::FromStr>::from_str($s).unwrap()
    };
}
