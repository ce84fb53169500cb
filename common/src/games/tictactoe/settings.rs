use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, Validate};
use crate::games::SessionRng;

use super::board::MIN_WIN_LENGTH;
use super::bot_controller::{BotKind, ExtensionScope, MoveStrategy, create_strategy};
use super::error::BoardError;
use super::game_state::TicTacToeGameState;

pub const MIN_FIELD_SIZE: usize = 3;
pub const MAX_FIELD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    TwoPlayers,
    #[default]
    VersusComputer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub field_size: usize,
    pub win_length: usize,
    pub mode: GameMode,
    pub bot: BotKind,
    pub computer_delay_ms: u64,
    pub seed: Option<u64>,
    pub extension_scope: ExtensionScope,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            field_size: 3,
            win_length: 3,
            mode: GameMode::VersusComputer,
            bot: BotKind::Heuristic,
            computer_delay_ms: 2000,
            seed: None,
            extension_scope: ExtensionScope::FirstOwnMark,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&self.field_size) {
            return Err(ConfigError::Invalid(format!(
                "field size must be between {} and {}, got {}",
                MIN_FIELD_SIZE, MAX_FIELD_SIZE, self.field_size
            )));
        }
        if self.win_length < MIN_WIN_LENGTH || self.win_length > self.field_size {
            return Err(ConfigError::Invalid(format!(
                "win length must be between {} and {} (the field size), got {}",
                MIN_WIN_LENGTH, self.field_size, self.win_length
            )));
        }
        Ok(())
    }
}

impl TicTacToeSettings {
    pub fn create_game(&self) -> Result<TicTacToeGameState, BoardError> {
        TicTacToeGameState::new(self.field_size, self.win_length)
    }

    pub fn session_rng(&self) -> SessionRng {
        self.seed.map_or_else(SessionRng::from_random, SessionRng::new)
    }

    pub fn create_bot(&self, rng: SessionRng) -> Box<dyn MoveStrategy> {
        create_strategy(self.bot, rng, self.extension_scope)
    }
}
