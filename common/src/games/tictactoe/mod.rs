mod board;
mod bot_controller;
mod error;
mod game_state;
mod random_selector;
mod settings;
mod speculative;
mod types;
mod win_detector;

pub use board::{Board, MIN_WIN_LENGTH};
pub use bot_controller::{
    BotKind, ExtensionScope, HeuristicMoveEngine, MoveStrategy, Tactic, create_strategy,
    find_extension_move, find_winning_move,
};
pub use error::{BoardError, GameError};
pub use game_state::TicTacToeGameState;
pub use random_selector::RandomMoveSelector;
pub use settings::{GameMode, MAX_FIELD_SIZE, MIN_FIELD_SIZE, TicTacToeSettings};
pub use speculative::{SpeculativeMark, try_with_temporary_mark, with_temporary_mark};
pub use types::{Cell, Direction, GameStatus, Mark, Move, Position, WinningLine};
pub use win_detector::{find_run, has_run, winner};
