//! Shape module - polyomino templates and rotation
//!
//! A shape is a 4x4 bounding matrix of filled cells plus a color. Shapes are
//! immutable values: rotation returns a new shape and preserves the filled
//! cell count, and rotating four times restores the original pattern.
//!
//! The template catalog covers the block-puzzle set: single block, dominoes,
//! trominoes, the seven tetrominoes, squares, rectangles and large corners.

use arrayvec::ArrayVec;

use blockfall_types::{ColorName, SHAPE_DIM};

/// Bounding matrix edge length
const DIM: usize = SHAPE_DIM as usize;

/// Maximum filled cells in a shape
pub const MAX_SHAPE_CELLS: usize = DIM * DIM;

/// Filled-cell extent of a shape within its bounding matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeBounds {
    pub min_row: u8,
    pub max_row: u8,
    pub min_col: u8,
    pub max_col: u8,
    pub width: u8,
    pub height: u8,
}

/// A polyomino: bounding matrix of filled cells plus a single color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [[bool; DIM]; DIM],
    color: ColorName,
}

impl Shape {
    /// Build a shape from filled-cell offsets within the bounding matrix
    ///
    /// Panics if `offsets` is empty or any offset falls outside the matrix;
    /// both indicate a misconfigured caller, not a runtime condition.
    pub fn from_offsets(color: ColorName, offsets: &[(u8, u8)]) -> Self {
        assert!(
            !offsets.is_empty(),
            "shape must have at least one filled cell"
        );
        let mut cells = [[false; DIM]; DIM];
        for &(row, col) in offsets {
            assert!(
                (row as usize) < DIM && (col as usize) < DIM,
                "shape offset ({row}, {col}) outside the {DIM}x{DIM} bounding matrix"
            );
            cells[row as usize][col as usize] = true;
        }
        Self { cells, color }
    }

    /// Build a shape from a catalog template
    ///
    /// Panics if `index` is out of range for the catalog.
    pub fn from_template(index: usize, color: ColorName) -> Self {
        Self::from_offsets(color, TEMPLATES[index])
    }

    /// The shape's color
    pub fn color(&self) -> ColorName {
        self.color
    }

    /// Whether the cell at (row, col) of the bounding matrix is filled
    pub fn is_cell_filled(&self, row: usize, col: usize) -> bool {
        row < DIM && col < DIM && self.cells[row][col]
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.offsets().len()
    }

    /// Filled-cell offsets within the bounding matrix, row-major
    pub fn offsets(&self) -> ArrayVec<(i8, i8), MAX_SHAPE_CELLS> {
        let mut offsets = ArrayVec::new();
        for row in 0..DIM {
            for col in 0..DIM {
                if self.cells[row][col] {
                    offsets.push((row as i8, col as i8));
                }
            }
        }
        offsets
    }

    /// Rotate 90 degrees clockwise
    ///
    /// `new[c][DIM-1-r] = old[r][c]` on the bounding matrix, then the result
    /// is re-anchored at the matrix origin so the bounding box stays minimal.
    /// The filled-cell count is preserved, and four rotations restore the
    /// original filled-cell pattern.
    pub fn rotate(&self) -> Shape {
        let mut rotated = [[false; DIM]; DIM];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &filled) in cells.iter().enumerate() {
                rotated[col][DIM - 1 - row] = filled;
            }
        }
        Shape {
            cells: rotated,
            color: self.color,
        }
        .normalized()
    }

    /// Shift the filled cells so the bounding box starts at the matrix origin
    fn normalized(&self) -> Shape {
        let bounds = self.bounds();
        if bounds.min_row == 0 && bounds.min_col == 0 {
            return *self;
        }
        let mut cells = [[false; DIM]; DIM];
        for row in bounds.min_row as usize..=bounds.max_row as usize {
            for col in bounds.min_col as usize..=bounds.max_col as usize {
                if self.cells[row][col] {
                    cells[row - bounds.min_row as usize][col - bounds.min_col as usize] = true;
                }
            }
        }
        Shape {
            cells,
            color: self.color,
        }
    }

    /// Extent of the filled cells
    pub fn bounds(&self) -> ShapeBounds {
        let mut min_row = DIM;
        let mut max_row = 0;
        let mut min_col = DIM;
        let mut max_col = 0;
        for row in 0..DIM {
            for col in 0..DIM {
                if self.cells[row][col] {
                    min_row = min_row.min(row);
                    max_row = max_row.max(row);
                    min_col = min_col.min(col);
                    max_col = max_col.max(col);
                }
            }
        }
        // Construction guarantees at least one filled cell.
        ShapeBounds {
            min_row: min_row as u8,
            max_row: max_row as u8,
            min_col: min_col as u8,
            max_col: max_col as u8,
            width: (max_col - min_col + 1) as u8,
            height: (max_row - min_row + 1) as u8,
        }
    }

    /// Center of the filled cells as (row, col)
    ///
    /// A half-integer value when the corresponding extent is even, so a
    /// cursor can align between cells symmetrically.
    pub fn center(&self) -> (f32, f32) {
        let bounds = self.bounds();
        (
            bounds.min_row as f32 + (bounds.height - 1) as f32 / 2.0,
            bounds.min_col as f32 + (bounds.width - 1) as f32 / 2.0,
        )
    }
}

/// Shape template catalog - filled-cell offsets within the bounding matrix
///
/// Order groups related templates: lines by length, then squares and
/// rectangles, then the tetromino set, then large corners.
pub const TEMPLATES: &[&[(u8, u8)]] = &[
    // single block
    &[(0, 0)],
    // dominoes
    &[(0, 0), (0, 1)],
    &[(0, 0), (1, 0)],
    // straight trominoes
    &[(0, 0), (0, 1), (0, 2)],
    &[(0, 0), (1, 0), (2, 0)],
    // corner trominoes
    &[(0, 0), (0, 1), (1, 0)],
    &[(0, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (1, 1)],
    &[(0, 1), (1, 0), (1, 1)],
    // straight tetrominoes
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    // square and rectangles
    &[(0, 0), (0, 1), (1, 0), (1, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)],
    &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    // T, S, Z, J, L
    &[(0, 0), (0, 1), (0, 2), (1, 1)],
    &[(0, 1), (0, 2), (1, 0), (1, 1)],
    &[(0, 0), (0, 1), (1, 1), (1, 2)],
    &[(0, 0), (1, 0), (1, 1), (1, 2)],
    &[(0, 2), (1, 0), (1, 1), (1, 2)],
    // large corners
    &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)],
    &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
    &[(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_well_formed() {
        for (index, template) in TEMPLATES.iter().enumerate() {
            assert!(!template.is_empty(), "template {index} is empty");
            let shape = Shape::from_template(index, ColorName::Red);
            assert_eq!(shape.cell_count(), template.len());
        }
    }

    #[test]
    fn test_rotate_normalizes_to_origin() {
        // Horizontal tromino becomes a vertical one anchored at (0, 0),
        // not drifting to the far column of the matrix.
        let line = Shape::from_offsets(ColorName::Blue, &[(0, 0), (0, 1), (0, 2)]);
        let rotated = line.rotate();
        assert_eq!(
            rotated.offsets().as_slice(),
            &[(0, 0), (1, 0), (2, 0)] as &[(i8, i8)]
        );
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        for (index, _) in TEMPLATES.iter().enumerate() {
            let shape = Shape::from_template(index, ColorName::Green);
            let back = shape.rotate().rotate().rotate().rotate();
            assert_eq!(back, shape, "template {index} broke the rotation law");
        }
    }

    #[test]
    fn test_rotate_preserves_cell_count() {
        for (index, template) in TEMPLATES.iter().enumerate() {
            let mut shape = Shape::from_template(index, ColorName::Purple);
            for _ in 0..4 {
                shape = shape.rotate();
                assert_eq!(shape.cell_count(), template.len());
            }
        }
    }

    #[test]
    fn test_bounds_of_offset_shape() {
        // L-shaped, deliberately not anchored at the matrix origin.
        let shape = Shape::from_offsets(ColorName::Teal, &[(1, 1), (2, 1), (2, 2), (2, 3)]);
        let bounds = shape.bounds();
        assert_eq!(bounds.min_row, 1);
        assert_eq!(bounds.max_row, 2);
        assert_eq!(bounds.min_col, 1);
        assert_eq!(bounds.max_col, 3);
        assert_eq!(bounds.width, 3);
        assert_eq!(bounds.height, 2);
    }

    #[test]
    fn test_center_between_cells() {
        // 2x2 square: both extents even, center sits between cells.
        let shape = Shape::from_offsets(ColorName::Red, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(shape.center(), (0.5, 0.5));

        // Horizontal tromino: odd width centers on the middle cell.
        let line = Shape::from_offsets(ColorName::Red, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(line.center(), (0.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "at least one filled cell")]
    fn test_empty_shape_rejected() {
        let _ = Shape::from_offsets(ColorName::Red, &[]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_matrix_offset_rejected() {
        let _ = Shape::from_offsets(ColorName::Red, &[(0, 4)]);
    }
}
