//! Temporary placements that are always taken back.

use std::ops::Deref;

use super::board::Board;
use super::error::BoardError;
use super::types::Mark;

/// A mark placed for evaluation only. Dropping the guard clears the cell,
/// including during unwinding.
#[derive(Debug)]
pub struct SpeculativeMark<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl<'a> SpeculativeMark<'a> {
    pub fn place(
        board: &'a mut Board,
        row: usize,
        col: usize,
        mark: Mark,
    ) -> Result<Self, BoardError> {
        board.place(row, col, mark)?;
        Ok(Self { board, row, col })
    }
}

impl Deref for SpeculativeMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for SpeculativeMark<'_> {
    fn drop(&mut self) {
        self.board.remove(self.row, self.col);
    }
}

/// Evaluates `predicate` with `mark` temporarily at `(row, col)`.
///
/// The cell must be empty and on the field; otherwise the predicate is not
/// run and the result is `false`.
pub fn with_temporary_mark<F>(
    board: &mut Board,
    row: usize,
    col: usize,
    mark: Mark,
    predicate: F,
) -> bool
where
    F: FnOnce(&Board) -> bool,
{
    match SpeculativeMark::place(board, row, col, mark) {
        Ok(guard) => predicate(&*guard),
        Err(err) => {
            tracing::debug!(%err, row, col, "speculative placement rejected");
            false
        }
    }
}

/// Like [`with_temporary_mark`] for predicates that can fail. The mark is
/// removed before the predicate's error is returned.
pub fn try_with_temporary_mark<F, E>(
    board: &mut Board,
    row: usize,
    col: usize,
    mark: Mark,
    predicate: F,
) -> Result<bool, E>
where
    F: FnOnce(&Board) -> Result<bool, E>,
{
    match SpeculativeMark::place(board, row, col, mark) {
        Ok(guard) => predicate(&*guard),
        Err(err) => {
            tracing::debug!(%err, row, col, "speculative placement rejected");
            Ok(false)
        }
    }
}
