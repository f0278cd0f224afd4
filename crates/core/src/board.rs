//! Board module - manages the game grid
//!
//! The board is a 10x10 grid of tiles addressed as (row, col), both axes
//! indexed 0..9. Uses a flat array for better cache locality when scanning
//! lines. There is no gravity: blocks stay where they are placed, and
//! completed rows and columns vanish in place.
//!
//! Boards are value types. Operations that change the grid either take
//! `&mut self` (construction helpers) or clone the board and return a new
//! one (the clearing and placement passes), so a caller can hand out a
//! snapshot and keep mutating its own copy safely.

use arrayvec::ArrayVec;

use blockfall_types::{ColorName, GameMode, BOARD_SIZE};

/// Total number of tiles on the board
const TILE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Visual-animation descriptor kinds attached to tiles by a clearing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAnimationKind {
    /// Line vanishing during the first clear phase
    LineClear,
    /// Column/row sweep during the full-board second phase
    BoardClear,
}

/// A pending visual animation on one tile
///
/// `start_ms` is an absolute timestamp computed from the caller-supplied
/// base; the engine never schedules anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileAnimation {
    pub kind: TileAnimationKind,
    pub start_ms: u64,
    pub duration_ms: u32,
}

/// One addressable cell of the board
///
/// `block` is the fill state (None = unfilled). `background` is a decorative
/// target color used by alternate board variants; it survives clears.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tile {
    pub background: Option<ColorName>,
    pub block: Option<ColorName>,
    /// Pending animations; a tile on a cleared row/column intersection can
    /// carry one per cleared line plus both full-board sweep phases.
    pub animations: ArrayVec<TileAnimation, 4>,
}

impl Tile {
    /// Whether a block currently occupies this tile
    pub fn is_filled(&self) -> bool {
        self.block.is_some()
    }
}

/// The game board - 10x10 tiles using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of tiles, row-major order (row * BOARD_SIZE + col)
    tiles: [Tile; TILE_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            tiles: std::array::from_fn(|_| Tile::default()),
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_SIZE as i8 || col < 0 || col >= BOARD_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_SIZE as usize) + (col as usize))
    }

    /// Edge length of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get tile at (row, col), None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<&Tile> {
        Self::index(row, col).map(|idx| &self.tiles[idx])
    }

    /// Set the block at (row, col)
    /// Returns false if out of bounds
    pub fn set_block(&mut self, row: i8, col: i8, block: Option<ColorName>) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.tiles[idx].block = block;
                true
            }
            None => false,
        }
    }

    /// Set the decorative background at (row, col)
    /// Returns false if out of bounds
    pub fn set_background(&mut self, row: i8, col: i8, background: Option<ColorName>) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.tiles[idx].background = background;
                true
            }
            None => false,
        }
    }

    /// Append a pending animation to the tile at (row, col)
    /// Returns false if out of bounds or the tile's animation list is full
    pub fn push_animation(&mut self, row: i8, col: i8, animation: TileAnimation) -> bool {
        match Self::index(row, col) {
            Some(idx) => self.tiles[idx].animations.try_push(animation).is_ok(),
            None => false,
        }
    }

    /// Drop every pending animation on the board
    pub fn clear_animations(&mut self) {
        for tile in &mut self.tiles {
            tile.animations.clear();
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        row < 0 || row >= BOARD_SIZE as i8 || col < 0 || col >= BOARD_SIZE as i8
    }

    /// Check if position is within bounds and unfilled
    pub fn is_vacant(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(tile) if !tile.is_filled())
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(tile) if tile.is_filled())
    }

    /// Check whether the tile at (row, col) accepts a block in the given mode
    ///
    /// The base rule is the same in every current variant; the exhaustive
    /// match keeps a variant that reserves tiles a visible change here.
    pub fn is_placeable(&self, row: i8, col: i8, mode: GameMode) -> bool {
        match mode {
            GameMode::Classic | GameMode::Target => self.is_vacant(row, col),
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_SIZE as usize {
            return false;
        }
        let start = row * BOARD_SIZE as usize;
        let end = start + BOARD_SIZE as usize;
        self.tiles[start..end].iter().all(Tile::is_filled)
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= BOARD_SIZE as usize {
            return false;
        }
        self.tiles[col..]
            .iter()
            .step_by(BOARD_SIZE as usize)
            .all(Tile::is_filled)
    }

    /// Indices of all completely filled rows, ascending
    pub fn full_rows(&self) -> ArrayVec<u8, { BOARD_SIZE as usize }> {
        (0..BOARD_SIZE as usize)
            .filter(|&row| self.is_row_full(row))
            .map(|row| row as u8)
            .collect()
    }

    /// Indices of all completely filled columns, ascending
    pub fn full_cols(&self) -> ArrayVec<u8, { BOARD_SIZE as usize }> {
        (0..BOARD_SIZE as usize)
            .filter(|&col| self.is_col_full(col))
            .map(|col| col as u8)
            .collect()
    }

    /// Check if every tile on the board is unfilled
    pub fn is_board_empty(&self) -> bool {
        self.tiles.iter().all(|tile| !tile.is_filled())
    }

    /// Number of filled tiles
    pub fn filled_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_filled()).count()
    }

    /// Get a reference to the internal tile array
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Remove every block from the board
    pub fn clear(&mut self) {
        for tile in &mut self.tiles {
            tile.block = None;
            tile.animations.clear();
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
