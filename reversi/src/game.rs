use crate::{
    execute_action, exists_legal_actions, obtain_legal_actions, Board, Color, IllegalAction,
    LegalActions, Position,
};

/// A game in progress: the board, whose turn it is, and what they may do.
///
/// An action is an `Option<Position>`, where `None` means passing. The only
/// way to change a game is [`Game::execute_action()`].
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_color: Color,
    /// Always the legal actions of `current_color` on `board`.
    legal_actions: LegalActions,
    game_over: bool,
}

/// Summarizes the outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Color),
    Tie,
}

impl Game {
    /// Resumes a game on an arbitrary board with `color` to move.
    pub fn new(board: Board, color: Color) -> Self {
        let legal_actions = obtain_legal_actions(&board, color);
        let game_over = is_stuck(&board, color.reverse(), &legal_actions);
        Self {
            board,
            current_color: color,
            legal_actions,
            game_over,
        }
    }

    /// Starts a game on the standard board of the given side length, with dark to move.
    ///
    /// Panics if `length` is odd or smaller than 2.
    pub fn init(length: usize) -> Self {
        Self::new(Board::init(length), Color::Dark)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// The legal placements of the player to move.
    pub fn legal_actions(&self) -> &LegalActions {
        &self.legal_actions
    }

    /// Neither player can place a disk.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Passing is legal exactly when there is no legal placement. A placement
    /// is legal when it is on the board and captures at least one disk.
    pub fn is_legal_action(&self, action: Option<Position>) -> bool {
        match action {
            None => !exists_legal_actions(&self.legal_actions),
            Some(position) => self.legal_actions.contains(position),
        }
    }

    /// Plays an action for the player to move and hands the turn to the opponent.
    ///
    /// On error, the game is unchanged.
    pub fn execute_action(&mut self, action: Option<Position>) -> Result<(), IllegalAction> {
        if !self.is_legal_action(action) {
            return Err(match action {
                None => IllegalAction::IllegalPass {
                    color: self.current_color,
                },
                Some(position) => IllegalAction::IllegalPlacement {
                    color: self.current_color,
                    position,
                },
            });
        }
        if let Some(position) = action {
            self.board = execute_action(&self.board, self.current_color, position);
        }
        self.current_color = self.current_color.reverse();
        self.legal_actions = obtain_legal_actions(&self.board, self.current_color);
        self.game_over = is_stuck(&self.board, self.current_color.reverse(), &self.legal_actions);
        Ok(())
    }

    /// The number of disks of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.board.count(color)
    }

    /// The number of dark and light disks, in that order.
    pub fn score(&self) -> (usize, usize) {
        (self.count(Color::Dark), self.count(Color::Light))
    }

    /// The result of the game, or `None` while it is still ongoing.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.game_over {
            return None;
        }
        let (dark, light) = self.score();
        Some(match dark.cmp(&light) {
            std::cmp::Ordering::Less => GameOutcome::Winner(Color::Light),
            std::cmp::Ordering::Equal => GameOutcome::Tie,
            std::cmp::Ordering::Greater => GameOutcome::Winner(Color::Dark),
        })
    }
}

// Both players are stuck when the player to move has no placement and the
// other player has none on the very same board either.
fn is_stuck(board: &Board, other_color: Color, legal_actions: &LegalActions) -> bool {
    !exists_legal_actions(legal_actions)
        && !exists_legal_actions(&obtain_legal_actions(board, other_color))
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
    fn init_game() {
        let game = Game::init(8);
        assert_eq!(game.current_color(), Color::Dark);
        assert_eq!(game.board(), &Board::init(8));
        assert_eq!(game.legal_actions(), &obtain_legal_actions(&Board::init(8), Color::Dark));
        assert!(!game.is_game_over());
        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn init_small_game() {
        let game = Game::init(4);
        assert_eq!(game.board().to_string(), "----\n-xo-\n-ox-\n----\n");
        assert_eq!(
            game.legal_actions().iter().collect::<Vec<_>>(),
            positions(&[(0, 2), (1, 3), (2, 0), (3, 1)])
        );
    }

    #[test]
    fn empty_board_is_over() {
        let game = Game::new(Board::empty(8), Color::Light);
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(GameOutcome::Tie));
    }

    #[test]
    fn first_move() {
        let mut game = Game::init(4);
        game.execute_action(Some(Position::new(0, 2))).unwrap();
        assert_eq!(
            game.board(),
            &board!(
                "--x-\n\
                 -xx-\n\
                 -ox-\n\
                 ----"
            )
        );
        assert_eq!(game.current_color(), Color::Light);
        assert_eq!(
            game.legal_actions().iter().collect::<Vec<_>>(),
            positions(&[(0, 1), (0, 3), (2, 3)])
        );
        assert!(!game.is_game_over());
        assert_eq!(game.score(), (4, 1));
    }

    #[test]
    fn forced_pass_until_game_over() {
        let start = board!(
            "xoox\n\
             -oox\n\
             xoox\n\
             xoxx"
        );
        let mut game = Game::new(start.clone(), Color::Light);
        assert!(!game.legal_actions().exists());
        assert!(!game.is_game_over());
        assert_eq!(
            game.execute_action(Some(Position::new(0, 0))),
            Err(IllegalAction::IllegalPlacement {
                color: Color::Light,
                position: Position::new(0, 0)
            })
        );
        assert!(game.execute_action(Some(Position::new(1, 0))).is_err());
        assert!(game.is_legal_action(None));

        game.execute_action(None).unwrap();
        assert_eq!(game.current_color(), Color::Dark);
        assert_eq!(game.board(), &start);
        assert!(!game.is_legal_action(None));
        assert_eq!(
            game.execute_action(None),
            Err(IllegalAction::IllegalPass { color: Color::Dark })
        );

        game.execute_action(Some(Position::new(1, 0))).unwrap();
        assert_eq!(
            game.board(),
            &board!(
                "xoox\n\
                 xxxx\n\
                 xxox\n\
                 xoxx"
            )
        );
        assert!(!game.legal_actions().exists());
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Color::Dark)));
    }

    #[test]
    fn rejected_action_leaves_game_unchanged() {
        let mut game = Game::init(4);
        let before = game.board().clone();
        assert!(game.execute_action(Some(Position::new(9, 9))).is_err());
        assert!(game.execute_action(None).is_err());
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_color(), Color::Dark);
    }

    #[test]
    fn out_of_range_placement_is_illegal() {
        let game = Game::init(4);
        assert!(!game.is_legal_action(Some(Position::new(-1, 2))));
        assert!(!game.is_legal_action(Some(Position::new(0, 4))));
    }

    quickcheck! {
        fn pass_only_when_stuck(game: ReachableGame) -> bool {
            let game = game.0;
            game.is_legal_action(None) != game.legal_actions().exists()
        }

        fn game_over_iff_both_stuck(game: ReachableGame) -> bool {
            let game = game.0;
            let both_stuck = !obtain_legal_actions(game.board(), Color::Dark).exists()
                && !obtain_legal_actions(game.board(), Color::Light).exists();
            game.is_game_over() == both_stuck
        }

        fn execute_keeps_old_board(game: ReachableGame) -> bool {
            let mut game = game.0;
            let old_board = game.board().clone();
            let snapshot = old_board.to_string();
            let color = game.current_color();
            let action = game.legal_actions().iter().next();
            game.execute_action(action).is_ok()
                && old_board.to_string() == snapshot
                && game.current_color() == color.reverse()
                && (action.is_none() || game.count(color) >= old_board.count(color) + 2)
        }
    }
}
