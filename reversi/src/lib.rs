pub use board::*;
pub use color::*;
pub use errors::*;
pub use game::*;
pub use geometry::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod color;
mod errors;
mod game;
mod geometry;
mod visualization;
