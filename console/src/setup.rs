use std::io;
use std::ops::RangeInclusive;

use tictactoe_common::games::tictactoe::{
    GameMode, MAX_FIELD_SIZE, MIN_FIELD_SIZE, MIN_WIN_LENGTH, TicTacToeSettings,
};

use crate::input::parse_number;
use crate::terminal::Console;

fn prompt_number(
    console: &mut dyn Console,
    prompt: &str,
    range: RangeInclusive<usize>,
) -> io::Result<usize> {
    loop {
        console.write_line(prompt)?;
        let line = console.read_line()?;
        if let Ok(value) = parse_number(&line)
            && range.contains(&value)
        {
            return Ok(value);
        }
    }
}

/// Asks for field size, win length and mode; everything else is kept from
/// `settings`.
pub fn prompt_settings(
    console: &mut dyn Console,
    settings: TicTacToeSettings,
) -> io::Result<TicTacToeSettings> {
    let field_size = prompt_number(
        console,
        &format!(
            "Enter the field size (from {} to {}).",
            MIN_FIELD_SIZE, MAX_FIELD_SIZE
        ),
        MIN_FIELD_SIZE..=MAX_FIELD_SIZE,
    )?;

    let win_length = if field_size == MIN_FIELD_SIZE {
        field_size
    } else {
        prompt_number(
            console,
            &format!(
                "Enter the winning line length (from {} to {}).",
                MIN_WIN_LENGTH, field_size
            ),
            MIN_WIN_LENGTH..=field_size,
        )?
    };

    let mode = match prompt_number(
        console,
        "Choose the game mode:\n1 - two players.\n2 - against the computer.",
        1..=2,
    )? {
        1 => GameMode::TwoPlayers,
        _ => GameMode::VersusComputer,
    };

    Ok(TicTacToeSettings {
        field_size,
        win_length,
        mode,
        ..settings
    })
}
