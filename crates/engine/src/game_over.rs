//! Game-over module - exhaustive search for any legal move
//!
//! The game is over only when no queued shape, in any allowed orientation,
//! fits anywhere on the board. The search is deliberately brute force:
//! at most a handful of shapes, four rotations each, and a padded position
//! grid is small enough that clarity wins over indexing tricks.
//!
//! Candidate positions extend beyond the board on every side because a
//! shape's bounding-matrix origin can sit off-board while all of its filled
//! cells land inside; clamping the scan to the board would miss those edge
//! placements.

use tracing::debug;

use blockfall_core::placement::is_valid_placement;
use blockfall_core::shape::Shape;
use blockfall_core::Board;
use blockfall_types::{GameMode, BOARD_SIZE, SHAPE_DIM};

/// Decide whether any shape still has a legal placement
///
/// `rotation_unlocked[i]` widens shape `i`'s search to all four rotations;
/// a missing entry means locked. An empty shape list is not a loss - refill
/// happens elsewhere - so it reports `false`.
pub fn check_game_over(
    board: &Board,
    shapes: &[Shape],
    rotation_unlocked: &[bool],
    mode: GameMode,
) -> bool {
    if shapes.is_empty() {
        return false;
    }

    for (index, shape) in shapes.iter().enumerate() {
        let unlocked = rotation_unlocked.get(index).copied().unwrap_or(false);
        let orientations = if unlocked { 4 } else { 1 };

        let mut candidate = *shape;
        for _ in 0..orientations {
            if has_any_placement(board, &candidate, mode) {
                return false;
            }
            candidate = candidate.rotate();
        }
    }

    debug!(
        shapes = shapes.len(),
        filled = board.filled_count(),
        "no legal placement for any queued shape"
    );
    true
}

/// Scan every candidate top-left position for one orientation
fn has_any_placement(board: &Board, shape: &Shape, mode: GameMode) -> bool {
    let min = -(SHAPE_DIM as i8 - 1);
    let max = BOARD_SIZE as i8;
    for row in min..max {
        for col in min..max {
            if is_valid_placement(shape, row, col, board, mode) {
                return true;
            }
        }
    }
    false
}
