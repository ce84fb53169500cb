use crate::games::SessionRng;

use super::board::Board;
use super::types::Move;

/// Uniform choice among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    rng: SessionRng,
}

impl RandomMoveSelector {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// `None` only when the board is full.
    pub fn select(&mut self, board: &Board) -> Option<Move> {
        let available_moves = board.empty_cells();
        if available_moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_index(available_moves.len());
        Some(available_moves[idx])
    }
}
