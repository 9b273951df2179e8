use crate::board::capture::capture_in_direction;
use crate::{Board, Color, Position, Square, DIRECTIONS};

/// The effects of placing one disk, before they are applied.
///
/// Obtained from [`Board::calculate()`]. Ties the plan to the board it was
/// computed on, so it cannot be applied to a different one.
pub struct PlacementCalculation<'a> {
    board: &'a Board,
    color: Color,
    position: Position,
    /// Opponent disks that change color, not including `position` itself.
    flipped: Vec<Position>,
}

impl Board {
    /// Calculates which disks a placement of `color` at `position` would flip.
    ///
    /// This does not check whether the placement is legal. For a legal
    /// placement, at least one disk is flipped. Nothing is flipped for a
    /// position outside the board.
    pub fn calculate(&self, color: Color, position: Position) -> PlacementCalculation<'_> {
        let mut flipped = Vec::new();
        // Outside the board, stepping to a neighbor could overflow
        let directions: &[_] = if self.is_in_range(position) { &DIRECTIONS } else { &[] };
        for &direction in directions {
            if let Some(end) = capture_in_direction(self, color, position, direction) {
                let mut current = position + direction;
                while current != end {
                    flipped.push(current);
                    current = current + direction;
                }
            }
        }
        PlacementCalculation {
            board: self,
            color,
            position,
            flipped,
        }
    }
}

impl<'a> PlacementCalculation<'a> {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The opponent disks that would change color.
    pub fn flipped(&self) -> &[Position] {
        &self.flipped
    }

    pub fn num_flipped(&self) -> usize {
        self.flipped.len()
    }

    /// Apply the planned changes and get the resulting board.
    pub fn execute(self) -> Board {
        let mut changed = self.flipped;
        changed.push(self.position);
        self.board.with_squares(&changed, Square::from(self.color))
    }
}

/// Places a disk of `color` at `position` and returns the resulting board.
///
/// The placement must be legal, which callers check beforehand with
/// [`is_legal_placement()`](crate::is_legal_placement) or through
/// [`Game`](crate::Game). Panics if the placement flips nothing.
pub fn execute_action(board: &Board, color: Color, position: Position) -> Board {
    let calculation = board.calculate(color, position);
    assert!(
        calculation.num_flipped() > 0,
        "Placing {} at {} flips no disks, so it is not a legal placement",
        color,
        position
    );
    calculation.execute()
}
