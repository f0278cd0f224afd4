//! Turn orchestration - the engine's boundary to the presentation layer
//!
//! Bundles the core passes a host runs after every accepted drop: line
//! clearing, scoring, timeline building, and per-tile animation annotation.
//! Everything here is synchronous and value-in/value-out; the host owns the
//! clock, the audio, and the rendering.
//!
//! # Module Structure
//!
//! - [`timeline`]: scheduling data for clear animations and sound cues
//! - [`cue`]: the injected cue-player capability and dispatch helper
//! - [`game_over`]: exhaustive search for any remaining legal move
//!
//! # Example
//!
//! ```
//! use blockfall_core::{placement::place_shape, Board, Shape};
//! use blockfall_engine::{perform_line_clearing, EngineConfig};
//! use blockfall_types::{ColorName, GameMode};
//!
//! // Fill the top row except one cell, then drop a single block into it.
//! let mut board = Board::new();
//! for col in 0..9 {
//!     board.set_block(0, col, Some(ColorName::Blue));
//! }
//! let single = Shape::from_offsets(ColorName::Red, &[(0, 0)]);
//! let board = place_shape(&single, 0, 9, &board, GameMode::Classic).unwrap();
//!
//! let outcome = perform_line_clearing(&board, 0, &EngineConfig::default());
//! assert_eq!(outcome.result.cleared_rows.as_slice(), &[0]);
//! assert!(outcome.result.full_board_clear);
//! ```

pub mod cue;
pub mod game_over;
pub mod timeline;

use tracing::debug;

use blockfall_core::board::{TileAnimation, TileAnimationKind};
use blockfall_core::clearing::{clear_lines, ClearResult};
use blockfall_core::scoring::ScoreTable;
use blockfall_core::Board;
use blockfall_types::BOARD_SIZE;

// Re-export the boundary surface
pub use cue::{dispatch_cues, CuePlayer, NullCuePlayer, RecordingCuePlayer};
pub use game_over::check_game_over;
pub use timeline::{
    build_clear_timeline, AxisTimeline, ClearTimeline, CueEvent, FullBoardTimeline, SweepTimeline,
    TimelineConfig,
};

/// Tunable tables for one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    pub scores: ScoreTable,
    pub timeline: TimelineConfig,
}

/// Everything a host needs after one clearing pass
#[derive(Debug, Clone, PartialEq)]
pub struct ClearOutcome {
    pub result: ClearResult,
    pub timeline: ClearTimeline,
}

/// Run one full clearing pass: clear, score, schedule, annotate
///
/// `base_ms` is the host's timestamp for "now"; every scheduled time in the
/// outcome is an offset from it. Tiles belonging to cleared lines come back
/// carrying their animation descriptors, staggered per the timeline.
pub fn perform_line_clearing(board: &Board, base_ms: u64, config: &EngineConfig) -> ClearOutcome {
    let mut result = clear_lines(board, &config.scores);
    let timeline = build_clear_timeline(
        result.cleared_rows.len(),
        result.cleared_cols.len(),
        result.full_board_clear,
        base_ms,
        &config.timeline,
    );
    annotate_animations(
        &mut result.board,
        &result.cleared_rows,
        &result.cleared_cols,
        &timeline,
    );
    debug!(
        rows = result.cleared_rows.len(),
        cols = result.cleared_cols.len(),
        points = result.points,
        full_board = result.full_board_clear,
        "clearing pass complete"
    );
    ClearOutcome { result, timeline }
}

/// Attach animation descriptors to the tiles the pass cleared
fn annotate_animations(
    board: &mut Board,
    cleared_rows: &[u8],
    cleared_cols: &[u8],
    timeline: &ClearTimeline,
) {
    if let Some(rows) = &timeline.rows {
        for (index, &row) in cleared_rows.iter().enumerate() {
            for col in 0..BOARD_SIZE as i8 {
                board.push_animation(
                    row as i8,
                    col,
                    TileAnimation {
                        kind: TileAnimationKind::LineClear,
                        start_ms: rows.line_start_ms(index),
                        duration_ms: rows.duration_ms,
                    },
                );
            }
        }
    }
    if let Some(cols) = &timeline.cols {
        for (index, &col) in cleared_cols.iter().enumerate() {
            for row in 0..BOARD_SIZE as i8 {
                board.push_animation(
                    row,
                    col as i8,
                    TileAnimation {
                        kind: TileAnimationKind::LineClear,
                        start_ms: cols.line_start_ms(index),
                        duration_ms: cols.duration_ms,
                    },
                );
            }
        }
    }
    if let Some(full_board) = &timeline.full_board {
        for col in 0..BOARD_SIZE as usize {
            for row in 0..BOARD_SIZE as i8 {
                board.push_animation(
                    row,
                    col as i8,
                    TileAnimation {
                        kind: TileAnimationKind::BoardClear,
                        start_ms: full_board.col_sweep.line_start_ms(col),
                        duration_ms: full_board.col_sweep.duration_ms,
                    },
                );
            }
        }
        for row in 0..BOARD_SIZE as usize {
            for col in 0..BOARD_SIZE as i8 {
                board.push_animation(
                    row as i8,
                    col,
                    TileAnimation {
                        kind: TileAnimationKind::BoardClear,
                        start_ms: full_board.row_sweep.line_start_ms(row),
                        duration_ms: full_board.row_sweep.duration_ms,
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::ColorName;

    fn board_with_full_row(row: i8) -> Board {
        let mut board = Board::new();
        for col in 0..BOARD_SIZE as i8 {
            board.set_block(row, col, Some(ColorName::Orange));
        }
        board
    }

    #[test]
    fn test_outcome_bundles_result_and_timeline() {
        let board = board_with_full_row(2);
        let outcome = perform_line_clearing(&board, 1_000, &EngineConfig::default());

        assert_eq!(outcome.result.cleared_rows.as_slice(), &[2]);
        assert!(outcome.result.full_board_clear);
        assert!(outcome.timeline.rows.is_some());
        assert!(outcome.timeline.full_board.is_some());
        assert_eq!(outcome.timeline.base_ms, 1_000);
    }

    #[test]
    fn test_cleared_tiles_carry_staggered_animations() {
        let mut board = board_with_full_row(3);
        // A stray block keeps the pass from being a full-board clear.
        board.set_block(7, 1, Some(ColorName::Purple));

        let outcome = perform_line_clearing(&board, 0, &EngineConfig::default());
        let rows = outcome.timeline.rows.unwrap();

        for col in 0..BOARD_SIZE as i8 {
            let animations = &outcome.result.board.get(3, col).unwrap().animations;
            assert_eq!(animations.len(), 1);
            assert_eq!(animations[0].kind, TileAnimationKind::LineClear);
            // One cleared row: every tile of it starts with the phase.
            assert_eq!(animations[0].start_ms, rows.line_start_ms(0));
        }
        // Untouched tiles carry nothing.
        assert!(outcome.result.board.get(7, 1).unwrap().animations.is_empty());
    }

    #[test]
    fn test_full_board_pass_annotates_every_tile() {
        let board = board_with_full_row(0);
        let outcome = perform_line_clearing(&board, 0, &EngineConfig::default());

        for row in 0..BOARD_SIZE as i8 {
            for col in 0..BOARD_SIZE as i8 {
                let tile = outcome.result.board.get(row, col).unwrap();
                let sweeps = tile
                    .animations
                    .iter()
                    .filter(|animation| animation.kind == TileAnimationKind::BoardClear)
                    .count();
                assert_eq!(sweeps, 2, "tile ({row}, {col}) missing a sweep phase");
            }
        }
    }

    #[test]
    fn test_no_clear_pass_is_inert() {
        let mut board = Board::new();
        board.set_block(4, 4, Some(ColorName::Red));

        let outcome = perform_line_clearing(&board, 42, &EngineConfig::default());
        assert_eq!(outcome.result.points, 0);
        assert!(outcome.timeline.is_empty());
        assert_eq!(outcome.result.board, board);
    }
}
