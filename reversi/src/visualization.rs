use crate::{Board, LegalActions, Position};

/// Renders the board in a box with row and column numbers.
///
/// If `legal_actions` is given, empty cells where a disk may be placed are
/// marked with `*`.
pub fn visualize(board: &Board, legal_actions: Option<&LegalActions>) -> String {
    let length = board.length();
    // Draw the column numbers and the top of the box
    let mut result = String::from("    ");
    for col in 0..length {
        result += &format!("{:<2}", col % 100);
    }
    result += "\n   ╭";
    for _ in 0..length {
        result += "──";
    }
    result += "╮\n";

    for (row, squares) in board.rows().enumerate() {
        result += &format!("{:>2} │", row);
        for (col, square) in squares.iter().enumerate() {
            let position = Position::new(row as i32, col as i32);
            if legal_actions.map_or(false, |legal| legal.contains(position)) {
                result += "* ";
            } else {
                result += &format!("{} ", square);
            }
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "   ╰";
    for _ in 0..length {
        result += "──";
    }
    result += "╯";
    result
}
