use super::board::Board;
use super::types::{Direction, Mark, Position, WinningLine};

/// True if `mark` holds `win_length` consecutive cells on any line.
pub fn has_run(board: &Board, mark: Mark) -> bool {
    find_run(board, mark).is_some()
}

/// First run of `mark` in row-major order of its starting cell.
pub fn find_run(board: &Board, mark: Mark) -> Option<WinningLine> {
    let size = board.size();
    for row in 1..=size {
        for col in 1..=size {
            if board.mark_at(row, col) != Some(mark) {
                continue;
            }
            for direction in Direction::RUN_AXES {
                if let Some(end) = run_end(board, row, col, direction, mark) {
                    return Some(WinningLine::new(mark, Position::new(row, col), end));
                }
            }
        }
    }
    None
}

/// Either mark's run, checking [`Mark::First`] first.
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::ALL.into_iter().find(|&mark| has_run(board, mark))
}

fn run_end(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    mark: Mark,
) -> Option<Position> {
    let mut last = Position::new(row, col);
    for distance in 1..board.win_length() {
        let next = board.step(row, col, direction, distance)?;
        if board.mark_at(next.row, next.col) != Some(mark) {
            return None;
        }
        last = next;
    }
    Some(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;

    fn transpose(rows: &[String]) -> Vec<String> {
        let chars: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        (0..chars.len())
            .map(|c| chars.iter().map(|row| row[c]).collect())
            .collect()
    }

    fn rotate(rows: &[String]) -> Vec<String> {
        let chars: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let n = chars.len();
        (0..n)
            .map(|r| (0..n).map(|c| chars[n - 1 - c][r]).collect())
            .collect()
    }

    fn board_of(win_length: usize, rows: &[String]) -> Board {
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        Board::from_rows(win_length, &refs)
    }

    fn random_rows(rng: &mut SessionRng, size: usize) -> Vec<String> {
        (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| match rng.random_index(3) {
                        0 => 'X',
                        1 => 'O',
                        _ => '.',
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_empty_board_has_no_run() {
        for size in 3..=8 {
            for win_length in 3..=size {
                let board = Board::new(size, win_length).unwrap();
                assert!(!has_run(&board, Mark::First));
                assert!(!has_run(&board, Mark::Second));
                assert_eq!(winner(&board), None);
            }
        }
    }

    #[test]
    fn test_horizontal_run() {
        let board = Board::from_rows(3, &["...", "XXX", "..."]);
        assert!(has_run(&board, Mark::First));
        assert!(!has_run(&board, Mark::Second));
        assert_eq!(
            find_run(&board, Mark::First),
            Some(WinningLine::new(Mark::First, Position::new(2, 1), Position::new(2, 3)))
        );
    }

    #[test]
    fn test_vertical_run() {
        let board = Board::from_rows(3, &["..O", "..O", "..O"]);
        assert_eq!(
            find_run(&board, Mark::Second),
            Some(WinningLine::new(Mark::Second, Position::new(1, 3), Position::new(3, 3)))
        );
    }

    #[test]
    fn test_both_diagonals() {
        let down = Board::from_rows(3, &["X..", ".X.", "..X"]);
        assert_eq!(
            find_run(&down, Mark::First).map(|l| l.end),
            Some(Position::new(3, 3))
        );

        let up = Board::from_rows(3, &["..O", ".O.", "O.."]);
        assert_eq!(
            find_run(&up, Mark::Second),
            Some(WinningLine::new(Mark::Second, Position::new(3, 1), Position::new(1, 3)))
        );
    }

    #[test]
    fn test_run_shorter_than_win_length_is_not_a_win() {
        let board = Board::from_rows(4, &["XXX.", "....", "....", "...."]);
        assert!(!has_run(&board, Mark::First));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let board = Board::from_rows(3, &["XOX", "...", "..."]);
        assert!(!has_run(&board, Mark::First));
    }

    #[test]
    fn test_run_touching_far_edge() {
        let board = Board::from_rows(
            4,
            &[
                "........", "........", "........", "........", "........", "........",
                "....XXXX", "........",
            ],
        );
        assert!(has_run(&board, Mark::First));
    }

    #[test]
    fn test_every_placement_of_a_run_is_found() {
        for size in 3..=8 {
            for win_length in 3..=size {
                for direction in Direction::EXTENSION_ORDER {
                    for row in 1..=size {
                        for col in 1..=size {
                            let mut board = Board::new(size, win_length).unwrap();
                            let cells: Option<Vec<Position>> = (0..win_length)
                                .map(|d| board.step(row, col, direction, d))
                                .collect();
                            let Some(cells) = cells else { continue };
                            for cell in cells {
                                board.place(cell.row, cell.col, Mark::Second).unwrap();
                            }
                            assert!(has_run(&board, Mark::Second), "{direction:?} from {row} {col}");
                            assert!(!has_run(&board, Mark::First));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_symmetric_under_rotation_and_transpose() {
        let mut rng = SessionRng::new(7);
        for _ in 0..300 {
            let size = 3 + rng.random_index(6);
            let win_length = 3 + rng.random_index(size - 2);
            let rows = random_rows(&mut rng, size);
            let original = board_of(win_length, &rows);
            let variants = [
                board_of(win_length, &transpose(&rows)),
                board_of(win_length, &rotate(&rows)),
                board_of(win_length, &rotate(&rotate(&rows))),
                board_of(win_length, &rotate(&rotate(&rotate(&rows)))),
            ];
            for mark in Mark::ALL {
                let expected = has_run(&original, mark);
                for variant in &variants {
                    assert_eq!(has_run(variant, mark), expected, "{rows:?}");
                }
            }
        }
    }
}
