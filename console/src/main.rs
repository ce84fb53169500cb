mod config;
mod game_loop;
mod input;
mod players;
mod render;
mod setup;
mod terminal;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{BotKind, GameMode};
use tictactoe_common::logger;
use tracing::info;

use crate::config::{Config, get_config_manager};
use crate::players::Lineup;
use crate::terminal::{Console, Terminal};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    TwoPlayers,
    VersusComputer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayers => GameMode::TwoPlayers,
            ModeArg::VersusComputer => GameMode::VersusComputer,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BotArg {
    Random,
    Heuristic,
}

impl From<BotArg> for BotKind {
    fn from(bot: BotArg) -> Self {
        match bot {
            BotArg::Random => BotKind::Random,
            BotArg::Heuristic => BotKind::Heuristic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Tic-tac-toe on an N x N field in the terminal")]
struct Args {
    /// Field size, from 3 to 8
    #[arg(long)]
    size: Option<usize>,

    /// Marks in a row needed to win, from 3 to the field size
    #[arg(long)]
    win_length: Option<usize>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each computer move
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Tracing filter, e.g. `info` or `tictactoe_common=debug`
    #[arg(long)]
    log_level: Option<String>,

    /// Config file, defaults to tictactoe_console.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ask for field size, win length and mode interactively
    #[arg(long)]
    prompt: bool,

    /// Store the resulting settings back into the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        let settings = &mut config.tictactoe;
        if let Some(size) = self.size {
            settings.field_size = size;
            if self.win_length.is_none() {
                settings.win_length = settings.win_length.min(size);
            }
        }
        if let Some(win_length) = self.win_length {
            settings.win_length = win_length;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode.into();
        }
        if let Some(bot) = self.bot {
            settings.bot = bot.into();
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.computer_delay_ms = delay_ms;
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager
        .get_config()
        .context("failed to load config")?;
    args.apply(&mut config);

    logger::init_logger(&config.log_level).context("failed to initialize logging")?;

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    terminal.write_line("Tic-tac-toe.")?;

    if args.prompt {
        config.tictactoe = setup::prompt_settings(&mut terminal, config.tictactoe)?;
    }
    config.validate().context("invalid settings")?;

    if args.save_config {
        config_manager
            .set_config(&config)
            .context("failed to save config")?;
    }

    let settings = &config.tictactoe;
    info!(
        field_size = settings.field_size,
        win_length = settings.win_length,
        mode = ?settings.mode,
        "starting game"
    );

    let mut game = settings.create_game()?;
    let mut lineup = Lineup::from_settings(settings);
    let status = game_loop::run_game(&mut game, &mut lineup, &mut terminal)?;
    info!(?status, moves = game.move_count(), "session finished");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "tictactoe", "--size", "6", "--win-length", "4", "--mode", "two-players", "--seed",
            "9", "--delay-ms", "0", "--log-level", "debug",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.tictactoe.field_size, 6);
        assert_eq!(config.tictactoe.win_length, 4);
        assert_eq!(config.tictactoe.mode, GameMode::TwoPlayers);
        assert_eq!(config.tictactoe.seed, Some(9));
        assert_eq!(config.tictactoe.computer_delay_ms, 0);
        assert_eq!(config.log_level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["tictactoe"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_out_of_range_size_fails_validation() {
        let args = Args::parse_from(["tictactoe", "--size", "12"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bot_flag() {
        let args = Args::parse_from(["tictactoe", "--bot", "random"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.tictactoe.bot, BotKind::Random);
    }
}
