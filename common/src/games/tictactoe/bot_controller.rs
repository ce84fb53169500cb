use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::games::SessionRng;

use super::board::Board;
use super::random_selector::RandomMoveSelector;
use super::speculative::with_temporary_mark;
use super::types::{Direction, Mark, Move};
use super::win_detector::has_run;

/// Which own marks run extension starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionScope {
    /// Only the first own mark in row-major order, giving up if it has no
    /// usable direction.
    #[default]
    FirstOwnMark,
    /// Every own mark in row-major order until one yields a cell.
    AllOwnMarks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotKind {
    Random,
    #[default]
    Heuristic,
}

/// The tier that produced a computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    Win,
    Block,
    Extend,
    Random,
}

/// Something that picks a cell for the side to move.
pub trait MoveStrategy {
    /// # Panics
    ///
    /// Implementations panic when `board` has no empty cell; the game loop
    /// must stop on a full board before asking for a move.
    fn select_move(&mut self, board: &mut Board, own_mark: Mark) -> Move;
}

/// Fixed-priority computer opponent: win now, block, extend a run, random.
#[derive(Debug, Clone)]
pub struct HeuristicMoveEngine {
    random: RandomMoveSelector,
    extension_scope: ExtensionScope,
}

impl HeuristicMoveEngine {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            random: RandomMoveSelector::new(rng),
            extension_scope: ExtensionScope::default(),
        }
    }

    pub fn with_extension_scope(mut self, extension_scope: ExtensionScope) -> Self {
        self.extension_scope = extension_scope;
        self
    }

    pub fn extension_scope(&self) -> ExtensionScope {
        self.extension_scope
    }

    /// Picks a move and reports which tier produced it. The board is
    /// returned to its original state; committing the move is up to the
    /// caller.
    ///
    /// # Panics
    ///
    /// Panics if the board is full.
    pub fn select_move_with_tactic(&mut self, board: &mut Board, own_mark: Mark) -> (Move, Tactic) {
        assert!(!board.is_full(), "select_move called on a full board");

        let (mv, tactic) = if let Some(mv) = find_winning_move(board, own_mark) {
            (mv, Tactic::Win)
        } else if let Some(mv) = find_winning_move(board, own_mark.opponent()) {
            (mv, Tactic::Block)
        } else if let Some(mv) = find_extension_move(board, own_mark, self.extension_scope) {
            (mv, Tactic::Extend)
        } else {
            let Some(mv) = self.random.select(board) else {
                unreachable!("a non-full board has an empty cell");
            };
            (mv, Tactic::Random)
        };

        debug!(?own_mark, ?tactic, row = mv.row(), col = mv.col(), "bot selected move");
        (mv, tactic)
    }
}

impl MoveStrategy for HeuristicMoveEngine {
    fn select_move(&mut self, board: &mut Board, own_mark: Mark) -> Move {
        self.select_move_with_tactic(board, own_mark).0
    }
}

impl MoveStrategy for RandomMoveSelector {
    fn select_move(&mut self, board: &mut Board, own_mark: Mark) -> Move {
        let Some(mv) = self.select(board) else {
            panic!("select_move called on a full board");
        };
        debug!(?own_mark, row = mv.row(), col = mv.col(), "random bot selected move");
        mv
    }
}

pub fn create_strategy(
    bot_kind: BotKind,
    rng: SessionRng,
    extension_scope: ExtensionScope,
) -> Box<dyn MoveStrategy> {
    match bot_kind {
        BotKind::Random => Box::new(RandomMoveSelector::new(rng)),
        BotKind::Heuristic => {
            Box::new(HeuristicMoveEngine::new(rng).with_extension_scope(extension_scope))
        }
    }
}

/// First empty cell, in row-major order, that completes a run for `mark`.
pub fn find_winning_move(board: &mut Board, mark: Mark) -> Option<Move> {
    for candidate in board.empty_cells() {
        let wins = with_temporary_mark(board, candidate.row(), candidate.col(), mark, |b| {
            has_run(b, mark)
        });
        if wins {
            return Some(candidate);
        }
    }
    None
}

/// Continues a line from an existing own mark.
///
/// Directions are tried in [`Direction::EXTENSION_ORDER`]. The first one
/// that stays on the field for `win_length - 1` steps without meeting an
/// opponent mark is taken, and its nearest empty cell is returned. If that
/// direction has no empty cell the start cell yields nothing.
pub fn find_extension_move(board: &Board, own_mark: Mark, scope: ExtensionScope) -> Option<Move> {
    let size = board.size();
    let mut own_cells = (1..=size)
        .flat_map(|row| (1..=size).map(move |col| (row, col)))
        .filter(|&(row, col)| board.mark_at(row, col) == Some(own_mark));

    match scope {
        ExtensionScope::FirstOwnMark => {
            let (row, col) = own_cells.next()?;
            extend_from(board, row, col, own_mark)
        }
        ExtensionScope::AllOwnMarks => {
            own_cells.find_map(|(row, col)| extend_from(board, row, col, own_mark))
        }
    }
}

fn extend_from(board: &Board, row: usize, col: usize, own_mark: Mark) -> Option<Move> {
    let opponent = own_mark.opponent();
    let direction = Direction::EXTENSION_ORDER
        .into_iter()
        .find(|&direction| is_open(board, row, col, direction, opponent))?;
    first_empty_along(board, row, col, direction)
}

fn is_open(board: &Board, row: usize, col: usize, direction: Direction, opponent: Mark) -> bool {
    (1..board.win_length()).all(|distance| {
        board
            .step(row, col, direction, distance)
            .is_some_and(|p| board.mark_at(p.row, p.col) != Some(opponent))
    })
}

fn first_empty_along(board: &Board, row: usize, col: usize, direction: Direction) -> Option<Move> {
    (1..board.win_length())
        .filter_map(|distance| board.step(row, col, direction, distance))
        .find_map(|p| board.validate_move(p.row, p.col).ok())
}
