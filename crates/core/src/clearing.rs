//! Clearing module - detects and clears completed rows and columns
//!
//! A single pass scans all rows and columns, empties every tile on any full
//! line (a tile at a row/column intersection clears once; the operation is
//! idempotent per tile), and scores the result. There is no gravity: tiles
//! vanish in place.
//!
//! Full-board detection is guarded: the bonus applies only when this pass
//! cleared at least one line *and* the board is empty afterwards, so an
//! already-empty board passed through is a plain no-op.

use arrayvec::ArrayVec;

use blockfall_types::BOARD_SIZE;

use crate::board::Board;
use crate::scoring::ScoreTable;

/// Lines the board can hold per axis
pub const LINE_COUNT: usize = BOARD_SIZE as usize;

/// Output of a clearing pass
#[derive(Debug, Clone, PartialEq)]
pub struct ClearResult {
    /// New board state after the pass
    pub board: Board,
    /// Row indices fully cleared in this pass, ascending
    pub cleared_rows: ArrayVec<u8, LINE_COUNT>,
    /// Column indices fully cleared in this pass, ascending
    pub cleared_cols: ArrayVec<u8, LINE_COUNT>,
    /// Whether this pass emptied the entire board
    pub full_board_clear: bool,
    /// Points earned by this pass, including the full-board bonus
    pub points: u32,
}

impl ClearResult {
    /// Whether anything cleared in this pass
    pub fn cleared_any(&self) -> bool {
        !self.cleared_rows.is_empty() || !self.cleared_cols.is_empty()
    }
}

/// Scan, clear and score one pass over the board
///
/// The input board is untouched; the result carries the new board value.
pub fn clear_lines(board: &Board, scores: &ScoreTable) -> ClearResult {
    let cleared_rows = board.full_rows();
    let cleared_cols = board.full_cols();

    let mut next = board.clone();
    for &row in &cleared_rows {
        for col in 0..BOARD_SIZE as i8 {
            next.set_block(row as i8, col, None);
        }
    }
    for &col in &cleared_cols {
        for row in 0..BOARD_SIZE as i8 {
            next.set_block(row, col as i8, None);
        }
    }

    let cleared_any = !cleared_rows.is_empty() || !cleared_cols.is_empty();
    // Emptiness alone is not enough: a pass over an already-empty board
    // must not register a spurious full-board clear.
    let full_board_clear = cleared_any && next.is_board_empty();

    let mut points = scores.calculate_score(cleared_rows.len(), cleared_cols.len());
    if full_board_clear {
        points += scores.full_board_bonus;
    }

    ClearResult {
        board: next,
        cleared_rows,
        cleared_cols,
        full_board_clear,
        points,
    }
}
