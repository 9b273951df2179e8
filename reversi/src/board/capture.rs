use crate::{Board, Color, Direction, Position, Square};

/// Walks from `start` in `direction` over disks of the opposite color and
/// returns the first disk of `color` that ends the run.
///
/// Returns `None` when the walk reaches an empty cell or leaves the board
/// first. If `start` itself holds a disk of `color`, it is returned.
pub fn find_bracket(
    board: &Board,
    color: Color,
    start: Position,
    direction: Direction,
) -> Option<Position> {
    let target = Square::from(color);
    let mut position = start;
    // A run can never be longer than the board
    for _ in 0..board.length() {
        match board.get(position).ok()? {
            Square::Empty => return None,
            square if square == target => return Some(position),
            _ => position = position + direction,
        }
    }
    None
}

/// Does placing a disk of `color` at `position` capture along `direction`?
///
/// Returns the position of the bracketing disk if so.
pub(crate) fn capture_in_direction(
    board: &Board,
    color: Color,
    position: Position,
    direction: Direction,
) -> Option<Position> {
    let adjacent = position + direction;
    if board.get(adjacent).ok()? != Square::from(color.reverse()) {
        return None;
    }
    find_bracket(board, color, adjacent, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;

    const LEFT: Direction = Direction { row: 0, col: -1 };

    #[test]
    fn bracket_search() {
        let board = board!(
            "xoo-\n\
             -xo-\n\
             ----\n\
             -xo-"
        );
        let dark = Color::Dark;
        assert_eq!(find_bracket(&board, dark, Position::new(3, 1), LEFT), Some(Position::new(3, 1)));
        assert_eq!(find_bracket(&board, dark, Position::new(3, 2), LEFT), Some(Position::new(3, 1)));
        assert_eq!(find_bracket(&board, dark, Position::new(3, 3), LEFT), None);
        assert_eq!(find_bracket(&board, dark, Position::new(0, 1), LEFT), Some(Position::new(0, 0)));
        assert_eq!(find_bracket(&board, dark, Position::new(0, 2), LEFT), Some(Position::new(0, 0)));
        assert_eq!(find_bracket(&board, dark, Position::new(0, 3), LEFT), None);
    }

    #[test]
    fn bracket_search_stops_at_edge() {
        let board = board!(
            "ooo\n\
             ---\n\
             ---"
        );
        assert_eq!(find_bracket(&board, Color::Dark, Position::new(0, 2), LEFT), None);
        assert_eq!(find_bracket(&board, Color::Dark, Position::new(5, 5), LEFT), None);
    }

    #[test]
    fn capture_requires_adjacent_opponent() {
        let board = Board::init(4);
        let down = Direction { row: 1, col: 0 };
        assert_eq!(
            capture_in_direction(&board, Color::Dark, Position::new(0, 2), down),
            Some(Position::new(2, 2))
        );
        // Adjacent disk is the mover's own
        assert_eq!(capture_in_direction(&board, Color::Dark, Position::new(0, 1), down), None);
        // Adjacent cell is off the board
        assert_eq!(
            capture_in_direction(&board, Color::Dark, Position::new(0, 2), Direction { row: -1, col: 0 }),
            None
        );
    }
}
