use super::error::BoardError;
use super::types::{Cell, Direction, Mark, Move, Position};

pub const MIN_WIN_LENGTH: usize = 3;

/// Square playing field addressed by 1-based `(row, col)` coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(size: usize, win_length: usize) -> Result<Self, BoardError> {
        if win_length < MIN_WIN_LENGTH || win_length > size {
            return Err(BoardError::Configuration { size, win_length });
        }

        Ok(Self {
            size,
            win_length,
            cells: vec![vec![Cell::Empty; size]; size],
        })
    }

    /// Builds a board from rows of `X`, `O` and `.` characters.
    #[cfg(test)]
    pub(crate) fn from_rows(win_length: usize, rows: &[&str]) -> Self {
        let mut board = Self::new(rows.len(), win_length).unwrap();
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), rows.len(), "row {} has the wrong width", r + 1);
            for (c, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::First,
                    'O' => Mark::Second,
                    _ => continue,
                };
                board.place(r + 1, c + 1, mark).unwrap();
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (1..=self.size).contains(&row) && (1..=self.size).contains(&col)
    }

    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self.cell_mut(row, col)?;
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }
        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Clears a cell regardless of what it holds.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the field. Callers only pass
    /// coordinates they placed a mark on themselves.
    pub fn remove(&mut self, row: usize, col: usize) {
        assert!(
            self.contains(row, col),
            "remove({row}, {col}) outside the {0}x{0} field",
            self.size
        );
        self.cells[row - 1][col - 1] = Cell::Empty;
    }

    /// `None` when the coordinates are off the field.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        if !self.contains(row, col) {
            return None;
        }
        Some(self.cells[row - 1][col - 1])
    }

    pub fn mark_at(&self, row: usize, col: usize) -> Option<Mark> {
        self.cell_at(row, col).and_then(Cell::mark)
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.mark_at(row, col).is_some()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn placed_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Checks that a cell can be played and hands back the proof of it.
    pub fn validate_move(&self, row: usize, col: usize) -> Result<Move, BoardError> {
        match self.cell_at(row, col) {
            None => Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            }),
            Some(Cell::Occupied(_)) => Err(BoardError::CellOccupied { row, col }),
            Some(Cell::Empty) => Ok(Move::new(row, col)),
        }
    }

    /// Every empty cell, lowest row first, then lowest column.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Move::new(r + 1, c + 1));
                }
            }
        }
        moves
    }

    /// The cell `distance` steps from `(row, col)` along `direction`, or
    /// `None` if that walks off the field.
    pub fn step(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        distance: usize,
    ) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let distance = isize::try_from(distance).ok()?;
        let r = isize::try_from(row).ok()?.checked_add(dr.checked_mul(distance)?)?;
        let c = isize::try_from(col).ok()?.checked_add(dc.checked_mul(distance)?)?;
        let (r, c) = (usize::try_from(r).ok()?, usize::try_from(c).ok()?);
        self.contains(r, c).then(|| Position::new(r, c))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(&mut self.cells[row - 1][col - 1])
    }
}
