use tictactoe_common::games::tictactoe::{Board, Cell, Mark};

const EMPTY_SYMBOL: char = '.';

fn cell_symbol(cell: Cell) -> char {
    cell.mark().map_or(EMPTY_SYMBOL, Mark::symbol)
}

/// One line per row, cells separated by a space.
pub fn render_board(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|&cell| cell_symbol(cell).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
