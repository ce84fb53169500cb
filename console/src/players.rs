use std::io;
use std::thread;
use std::time::Duration;

use tictactoe_common::games::tictactoe::{
    GameMode, Mark, Move, MoveStrategy, TicTacToeGameState, TicTacToeSettings,
};
use tracing::{debug, info};

use crate::input::parse_coordinates;
use crate::terminal::Console;

pub const COMPUTER_NAME: &str = "SkyNet";

pub trait Player {
    fn name(&self) -> &str;
    fn mark(&self) -> Mark;

    /// A move that is legal on the current board.
    fn choose_move(
        &mut self,
        game: &mut TicTacToeGameState,
        console: &mut dyn Console,
    ) -> io::Result<Move>;
}

pub struct HumanPlayer {
    name: String,
    mark: Mark,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(
        &mut self,
        game: &mut TicTacToeGameState,
        console: &mut dyn Console,
    ) -> io::Result<Move> {
        loop {
            console.write_line(&format!(
                "{}, enter the row and column separated by a space.",
                self.name
            ))?;
            let line = console.read_line()?;

            let (row, col) = match parse_coordinates(&line) {
                Ok(coordinates) => coordinates,
                Err(err) => {
                    debug!(%err, %line, "unparseable move");
                    console.write_line(&format!("Invalid input: {}.", err))?;
                    continue;
                }
            };

            match game.validate_move(row, col) {
                Ok(mv) => return Ok(mv),
                Err(err) => {
                    debug!(%err, row, col, "rejected move");
                    console.write_line(&format!("Invalid move: {}.", err))?;
                }
            }
        }
    }
}

pub struct ComputerPlayer {
    mark: Mark,
    strategy: Box<dyn MoveStrategy>,
    delay: Duration,
}

impl ComputerPlayer {
    pub fn new(mark: Mark, strategy: Box<dyn MoveStrategy>, delay: Duration) -> Self {
        Self {
            mark,
            strategy,
            delay,
        }
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        COMPUTER_NAME
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(
        &mut self,
        game: &mut TicTacToeGameState,
        console: &mut dyn Console,
    ) -> io::Result<Move> {
        console.write_line(&format!("{} is moving...", COMPUTER_NAME))?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(game.request_move(self.strategy.as_mut()))
    }
}

/// The two seats of a game; `first` plays [`Mark::First`] and moves first.
pub struct Lineup {
    pub(crate) first: Box<dyn Player>,
    pub(crate) second: Box<dyn Player>,
}

impl Lineup {
    pub fn from_settings(settings: &TicTacToeSettings) -> Self {
        let first: Box<dyn Player> = Box::new(HumanPlayer::new("Player 1", Mark::First));
        let second: Box<dyn Player> = match settings.mode {
            GameMode::TwoPlayers => Box::new(HumanPlayer::new("Player 2", Mark::Second)),
            GameMode::VersusComputer => {
                let rng = settings.session_rng();
                info!(seed = rng.seed(), bot = ?settings.bot, "computer opponent ready");
                Box::new(ComputerPlayer::new(
                    Mark::Second,
                    settings.create_bot(rng),
                    Duration::from_millis(settings.computer_delay_ms),
                ))
            }
        };
        Self { first, second }
    }

    pub fn for_mark(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::First => self.first.as_mut(),
            Mark::Second => self.second.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{scripted, transcript};
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::HeuristicMoveEngine;

    #[test]
    fn test_human_move_is_parsed() {
        let mut game = TicTacToeGameState::new(3, 3).unwrap();
        let mut player = HumanPlayer::new("Player 1", Mark::First);
        let mut terminal = scripted(&["2 3"]);
        let mv = player.choose_move(&mut game, &mut terminal).unwrap();
        assert_eq!((mv.row(), mv.col()), (2, 3));
        assert!(transcript(terminal).starts_with("Player 1, enter the row and column"));
    }

    #[test]
    fn test_human_reprompts_until_valid() {
        let mut game = TicTacToeGameState::new(3, 3).unwrap();
        game.play(1, 1).unwrap();
        let mut player = HumanPlayer::new("Player 2", Mark::Second);
        let mut terminal = scripted(&["hello", "1", "4 1", "1 1", "3 3"]);
        let mv = player.choose_move(&mut game, &mut terminal).unwrap();
        assert_eq!((mv.row(), mv.col()), (3, 3));

        let output = transcript(terminal);
        assert_eq!(output.matches("enter the row and column").count(), 5);
        assert_eq!(output.matches("Invalid input").count(), 2);
        assert_eq!(output.matches("Invalid move").count(), 2);
    }

    #[test]
    fn test_human_fails_when_input_closes() {
        let mut game = TicTacToeGameState::new(3, 3).unwrap();
        let mut player = HumanPlayer::new("Player 1", Mark::First);
        let mut terminal = scripted(&["x y"]);
        let err = player.choose_move(&mut game, &mut terminal).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_computer_blocks_open_threat() {
        let mut game = TicTacToeGameState::new(3, 3).unwrap();
        for (row, col) in [(1, 1), (2, 1), (3, 3), (2, 2)] {
            game.play(row, col).unwrap();
        }
        let engine = HeuristicMoveEngine::new(SessionRng::new(1));
        let mut player = ComputerPlayer::new(Mark::First, Box::new(engine), Duration::ZERO);
        let mut terminal = scripted(&[]);
        let mv = player.choose_move(&mut game, &mut terminal).unwrap();
        assert_eq!((mv.row(), mv.col()), (2, 3));
        assert_eq!(transcript(terminal), "SkyNet is moving...\n");
    }

    #[test]
    fn test_lineup_follows_mode() {
        let settings = TicTacToeSettings {
            mode: GameMode::TwoPlayers,
            ..Default::default()
        };
        let mut lineup = Lineup::from_settings(&settings);
        assert_eq!(lineup.for_mark(Mark::First).name(), "Player 1");
        assert_eq!(lineup.for_mark(Mark::Second).name(), "Player 2");

        let settings = TicTacToeSettings {
            seed: Some(3),
            ..Default::default()
        };
        let mut lineup = Lineup::from_settings(&settings);
        assert_eq!(lineup.for_mark(Mark::Second).name(), COMPUTER_NAME);
        assert_eq!(lineup.for_mark(Mark::Second).mark(), Mark::Second);
    }
}
