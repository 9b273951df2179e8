use crate::board::capture::capture_in_direction;
use crate::{Board, Color, Position, Square, DIRECTIONS};

/// The positions where one player may place a disk on one board.
///
/// Computed once by [`obtain_legal_actions()`] and never modified afterwards.
/// Iterating yields the legal positions in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct LegalActions {
    length: usize,
    /// Row-major, same shape as the board.
    flags: Vec<bool>,
}

impl LegalActions {
    /// Is placing at `position` legal? Positions outside the board are never legal.
    pub fn contains(&self, position: Position) -> bool {
        let length = self.length as i32;
        position.is_within(Position::new(0, 0), Position::new(length, length))
            && self.flags[position.row as usize * self.length + position.col as usize]
    }

    /// Is there at least one legal placement?
    pub fn exists(&self) -> bool {
        self.flags.iter().any(|&flag| flag)
    }

    /// The number of legal placements.
    pub fn len(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.exists()
    }

    pub fn iter(&self) -> LegalActionsIter<'_> {
        LegalActionsIter {
            legal_actions: self,
            idx: 0,
        }
    }
}

/// Iterates the legal positions of a [`LegalActions`] in row-major order.
pub struct LegalActionsIter<'a> {
    legal_actions: &'a LegalActions,
    /// The next flag to look at.
    idx: usize,
}

impl<'a> Iterator for LegalActionsIter<'a> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let LegalActions { length, flags } = self.legal_actions;
        while self.idx < flags.len() {
            let idx = self.idx;
            self.idx += 1;
            if flags[idx] {
                return Some(Position::new((idx / length) as i32, (idx % length) as i32));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a LegalActions {
    type Item = Position;
    type IntoIter = LegalActionsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for LegalActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Is placing a disk of `color` at `position` legal?
///
/// The cell must be empty, and in at least one direction the neighboring
/// cell must start a run of opponent disks that ends in a disk of `color`.
pub fn is_legal_placement(board: &Board, color: Color, position: Position) -> bool {
    if board.get(position) != Ok(Square::Empty) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&direction| capture_in_direction(board, color, position, direction).is_some())
}

/// Computes the legal placements of `color` for every cell of the board.
pub fn obtain_legal_actions(board: &Board, color: Color) -> LegalActions {
    LegalActions {
        length: board.length(),
        flags: board
            .positions()
            .map(|position| is_legal_placement(board, color, position))
            .collect(),
    }
}

/// Does the set contain any legal placement?
pub fn exists_legal_actions(legal_actions: &LegalActions) -> bool {
    legal_actions.exists()
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{arbitrary::ReachableGame, board};

    fn positions(list: &[(i32, i32)]) -> Vec<Position> {
        list.iter().copied().map(Position::from).collect()
    }

    #[test]
    fn legal_placements_on_init_board() {
        let board = Board::init(4);
        assert!(!is_legal_placement(&board, Color::Dark, Position::new(0, 0)));
        assert!(!is_legal_placement(&board, Color::Dark, Position::new(0, 1)));
        assert!(is_legal_placement(&board, Color::Dark, Position::new(0, 2)));
        // Occupied
        assert!(!is_legal_placement(&board, Color::Dark, Position::new(1, 1)));
        // Off the board
        assert!(!is_legal_placement(&board, Color::Dark, Position::new(-1, 2)));
    }

    #[test]
    fn obtain_on_init_board() {
        let board = Board::init(4);
        let dark = obtain_legal_actions(&board, Color::Dark);
        assert_eq!(dark.iter().collect::<Vec<_>>(), positions(&[(0, 2), (1, 3), (2, 0), (3, 1)]));
        assert_eq!(dark.len(), 4);
        assert!(exists_legal_actions(&dark));

        let light = obtain_legal_actions(&board, Color::Light);
        assert_eq!(light.iter().collect::<Vec<_>>(), positions(&[(0, 1), (1, 0), (2, 3), (3, 2)]));
    }

    #[test]
    fn obtain_on_empty_board() {
        let legal_actions = obtain_legal_actions(&Board::empty(4), Color::Dark);
        assert!(!exists_legal_actions(&legal_actions));
        assert!(legal_actions.is_empty());
        assert!(!legal_actions.contains(Position::new(0, 0)));
        assert_eq!(legal_actions, obtain_legal_actions(&Board::empty(4), Color::Light));
    }

    #[test]
    fn for_loop_visits_legal_positions_in_order() {
        let legal_actions = obtain_legal_actions(&Board::init(6), Color::Light);
        let mut visited = Vec::new();
        for position in &legal_actions {
            assert!(legal_actions.contains(position));
            visited.push(position);
        }
        assert_eq!(visited, positions(&[(1, 2), (2, 1), (3, 4), (4, 3)]));
        assert_eq!(visited.len(), legal_actions.len());
    }

    #[test]
    fn contains_outside_board() {
        let legal_actions = obtain_legal_actions(&Board::init(4), Color::Dark);
        assert!(!legal_actions.contains(Position::new(0, 4)));
        assert!(!legal_actions.contains(Position::new(-1, 2)));
        assert!(!legal_actions.contains(Position::new(1, 7)));
    }

    #[test]
    fn no_moves_when_opponent_is_unbracketable() {
        let board = board!(
            "xoox\n\
             -oox\n\
             xoox\n\
             xoxx"
        );
        assert!(!obtain_legal_actions(&board, Color::Light).exists());
        assert_eq!(
            obtain_legal_actions(&board, Color::Dark).iter().collect::<Vec<_>>(),
            positions(&[(1, 0)])
        );
    }

    quickcheck! {
        fn legal_actions_are_empty_cells(game: ReachableGame) -> bool {
            let board = game.0.board();
            [Color::Dark, Color::Light].into_iter().all(|color| {
                obtain_legal_actions(board, color)
                    .iter()
                    .all(|position| board[position] == Square::Empty)
            })
        }

        fn set_agrees_with_predicate(game: ReachableGame) -> bool {
            let board = game.0.board();
            let color = game.0.current_color();
            let legal_actions = obtain_legal_actions(board, color);
            board
                .positions()
                .all(|position| legal_actions.contains(position) == is_legal_placement(board, color, position))
        }
    }
}
