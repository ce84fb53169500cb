use derive_more::{Display, Error, From};

/// Failures reported by [`Board`](super::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("win length {win_length} must be between 3 and the field size {size}")]
    Configuration { size: usize, win_length: usize },

    #[display("cell {row} {col} is outside the {size}x{size} field")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[display("cell {row} {col} is already occupied")]
    CellOccupied { row: usize, col: usize },
}

/// Failures reported when committing a move to a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    #[display("game is already over")]
    GameOver,

    #[display("{_0}")]
    #[from]
    Board(BoardError),
}
