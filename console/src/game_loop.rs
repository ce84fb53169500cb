use std::io;

use tictactoe_common::games::tictactoe::{GameStatus, TicTacToeGameState};
use tracing::{info, warn};

use crate::players::Lineup;
use crate::render::render_board;
use crate::terminal::Console;

fn draw_board(game: &TicTacToeGameState, console: &mut dyn Console) -> io::Result<()> {
    for line in render_board(game.board()) {
        console.write_line(&line)?;
    }
    Ok(())
}

/// Plays until a win or a draw, printing the board after every move.
pub fn run_game(
    game: &mut TicTacToeGameState,
    lineup: &mut Lineup,
    console: &mut dyn Console,
) -> io::Result<GameStatus> {
    draw_board(game, console)?;

    loop {
        let player = lineup.for_mark(game.current_mark());
        debug_assert_eq!(player.mark(), game.current_mark());
        let mv = player.choose_move(game, console)?;

        let status = match game.apply_move(mv) {
            Ok(status) => status,
            Err(err) => {
                warn!(%err, player = player.name(), "move rejected");
                continue;
            }
        };
        info!(player = player.name(), %mv, "move committed");
        draw_board(game, console)?;

        match status {
            GameStatus::InProgress => {}
            GameStatus::Won(mark) => {
                console.write_line(&format!("Game over. {} wins.", player.name()))?;
                info!(?mark, winner = player.name(), moves = game.move_count(), "game won");
                return Ok(status);
            }
            GameStatus::Draw => {
                console.write_line("Game over. Draw.")?;
                info!(moves = game.move_count(), "game drawn");
                return Ok(status);
            }
        }
    }
}
