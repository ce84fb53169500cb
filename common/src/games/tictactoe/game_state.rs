use tracing::debug;

use super::board::Board;
use super::bot_controller::MoveStrategy;
use super::error::{BoardError, GameError};
use super::types::{GameStatus, Mark, Move, WinningLine};
use super::win_detector::find_run;

/// Per-session state threaded through the game loop: the board, whose turn
/// it is and whether the game has ended.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Move>,
    winning_line: Option<WinningLine>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(field_size: usize, win_length: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(field_size, win_length)?))
    }

    /// Continues from an existing position with [`Mark::First`] to move.
    pub fn from_board(board: Board) -> Self {
        Self {
            move_count: board.placed_count(),
            board,
            current_mark: Mark::First,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn validate_move(&self, row: usize, col: usize) -> Result<Move, BoardError> {
        self.board.validate_move(row, col)
    }

    /// Asks `strategy` for the side to move. The board comes back unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the game is already over.
    pub fn request_move(&mut self, strategy: &mut dyn MoveStrategy) -> Move {
        assert!(!self.status.is_over(), "move requested after the game ended");
        strategy.select_move(&mut self.board, self.current_mark)
    }

    /// Commits `mv` for the side to move, then checks for a win, then for a
    /// full board, and passes the turn if the game goes on.
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let mark = self.current_mark;
        self.board.place(mv.row(), mv.col(), mark)?;
        self.last_move = Some(mv);
        self.move_count += 1;

        if let Some(line) = find_run(&self.board, mark) {
            self.winning_line = Some(line);
            self.status = GameStatus::Won(mark);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_mark = mark.opponent();
        }

        debug!(?mark, row = mv.row(), col = mv.col(), status = ?self.status, "move applied");
        Ok(self.status)
    }

    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        let mv = self.validate_move(row, col)?;
        self.apply_move(mv)
    }
}
