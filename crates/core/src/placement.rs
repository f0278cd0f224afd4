//! Placement module - validates and applies shape drops
//!
//! A placement is valid iff every filled cell of the shape, offset by the
//! candidate top-left position, lands on an in-range tile that accepts a
//! block in the current mode. Pure predicates only: probing loops (the
//! game-over search) call these thousands of times per turn.

use blockfall_types::GameMode;

use crate::board::Board;
use crate::shape::Shape;

/// Decide whether `shape` can legally occupy the region at (row, col)
///
/// The position addresses the shape's bounding-matrix origin; a shape whose
/// filled cells start deeper in the matrix can sit at a negative position
/// while keeping every filled cell on the board. A shape with no filled
/// cells is invalid by construction and rejected here defensively.
pub fn is_valid_placement(shape: &Shape, row: i8, col: i8, board: &Board, mode: GameMode) -> bool {
    let offsets = shape.offsets();
    if offsets.is_empty() {
        return false;
    }
    offsets
        .iter()
        .all(|&(dr, dc)| board.is_placeable(row + dr, col + dc, mode))
}

/// Apply a drop, returning the new board
///
/// Returns `None` when the placement is invalid; the input board is never
/// touched.
pub fn place_shape(
    shape: &Shape,
    row: i8,
    col: i8,
    board: &Board,
    mode: GameMode,
) -> Option<Board> {
    if !is_valid_placement(shape, row, col, board, mode) {
        return None;
    }
    let mut placed = board.clone();
    for (dr, dc) in shape.offsets() {
        placed.set_block(row + dr, col + dc, Some(shape.color()));
    }
    Some(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::{ColorName, BOARD_SIZE};

    fn single() -> Shape {
        Shape::from_offsets(ColorName::Red, &[(0, 0)])
    }

    fn square() -> Shape {
        Shape::from_offsets(ColorName::Blue, &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    #[test]
    fn test_valid_on_empty_board() {
        let board = Board::new();
        assert!(is_valid_placement(&square(), 0, 0, &board, GameMode::Classic));
        assert!(is_valid_placement(&square(), 8, 8, &board, GameMode::Classic));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let board = Board::new();
        // Bottom-right corner: a 2x2 shape needs two free rows and columns.
        assert!(!is_valid_placement(&square(), 9, 9, &board, GameMode::Classic));
        assert!(!is_valid_placement(&square(), -1, 0, &board, GameMode::Classic));
        assert!(!is_valid_placement(
            &single(),
            BOARD_SIZE as i8,
            0,
            &board,
            GameMode::Classic
        ));
    }

    #[test]
    fn test_rejects_overlap() {
        let mut board = Board::new();
        board.set_block(5, 5, Some(ColorName::Green));

        assert!(!is_valid_placement(&single(), 5, 5, &board, GameMode::Classic));
        assert!(!is_valid_placement(&square(), 4, 4, &board, GameMode::Classic));
        assert!(is_valid_placement(&square(), 6, 6, &board, GameMode::Classic));
    }

    #[test]
    fn test_negative_position_with_offset_cells() {
        let board = Board::new();
        // Filled cells sit at matrix row 1; position row -1 puts them on row 0.
        let offset_shape = Shape::from_offsets(ColorName::Teal, &[(1, 0), (1, 1)]);
        assert!(is_valid_placement(
            &offset_shape,
            -1,
            0,
            &board,
            GameMode::Classic
        ));
        assert!(!is_valid_placement(
            &offset_shape,
            -2,
            0,
            &board,
            GameMode::Classic
        ));
    }

    #[test]
    fn test_place_writes_color_and_preserves_input() {
        let board = Board::new();
        let placed = place_shape(&square(), 3, 4, &board, GameMode::Classic).unwrap();

        for (row, col) in [(3, 4), (3, 5), (4, 4), (4, 5)] {
            assert_eq!(placed.get(row, col).unwrap().block, Some(ColorName::Blue));
        }
        assert_eq!(placed.filled_count(), 4);
        // Copy-on-write: the input board is unchanged.
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_place_rejects_invalid() {
        let mut board = Board::new();
        board.set_block(0, 0, Some(ColorName::Red));
        assert!(place_shape(&single(), 0, 0, &board, GameMode::Classic).is_none());
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_target_mode_uses_base_rule() {
        let mut board = Board::new();
        board.set_background(2, 2, Some(ColorName::Purple));
        assert!(is_valid_placement(&single(), 2, 2, &board, GameMode::Target));
        board.set_block(2, 2, Some(ColorName::Red));
        assert!(!is_valid_placement(&single(), 2, 2, &board, GameMode::Target));
    }
}
