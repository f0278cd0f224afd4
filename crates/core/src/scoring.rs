//! Scoring module - clear counts to points
//!
//! Each axis's cleared-line count maps through a combo tier (1/2/3/4+) to a
//! point value; rows and columns are scored independently and summed, with
//! no cross-axis discount. A pass that empties the whole board adds a flat
//! bonus exactly once. Tables live in a config value so hosts can reweight
//! either axis without touching the engine.

use blockfall_types::{ClearTier, COL_CLEAR_SCORES, FULL_BOARD_BONUS, ROW_CLEAR_SCORES};

/// Per-axis tier tables plus the full-board bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    /// Points for 1/2/3/4+ rows cleared in one pass
    pub rows: [u32; 4],
    /// Points for 1/2/3/4+ columns cleared in one pass
    pub cols: [u32; 4],
    /// Flat bonus when a pass leaves the board empty
    pub full_board_bonus: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            rows: ROW_CLEAR_SCORES,
            cols: COL_CLEAR_SCORES,
            full_board_bonus: FULL_BOARD_BONUS,
        }
    }
}

impl ScoreTable {
    /// Points for a clearing pass, excluding the full-board bonus
    pub fn calculate_score(&self, cleared_rows: usize, cleared_cols: usize) -> u32 {
        axis_points(&self.rows, cleared_rows) + axis_points(&self.cols, cleared_cols)
    }
}

fn axis_points(table: &[u32; 4], lines: usize) -> u32 {
    match ClearTier::from_count(lines) {
        Some(tier) => table[tier.index()],
        None => 0,
    }
}
