use std::fmt;

use serde::{Deserialize, Serialize};

/// The color of a disk, and of the player who places it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Moves first.
    Dark,
    Light,
}

/// The state of a single cell on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Square {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Color {
    /// The opponent's color.
    pub fn reverse(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.reverse()
    }
}

impl Square {
    /// Swaps dark and light. An empty square stays empty.
    pub fn reverse(self) -> Square {
        match self {
            Square::Empty => Square::Empty,
            Square::Dark => Square::Light,
            Square::Light => Square::Dark,
        }
    }

    /// The color of the disk on this square, if there is one.
    pub fn color(self) -> Option<Color> {
        match self {
            Square::Empty => None,
            Square::Dark => Some(Color::Dark),
            Square::Light => Some(Color::Light),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '-',
            Square::Dark => 'x',
            Square::Light => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '-' => Some(Square::Empty),
            'x' => Some(Square::Dark),
            'o' => Some(Square::Light),
            _ => None,
        }
    }
}

impl From<Color> for Square {
    fn from(color: Color) -> Self {
        match color {
            Color::Dark => Square::Dark,
            Color::Light => Square::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Square::from(*self).to_char())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
