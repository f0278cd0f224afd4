//! Core game rules - pure, deterministic, and testable
//!
//! This crate contains the board model, shape catalog, placement rules,
//! line clearing, scoring, and the upcoming-shape queue. It has **zero
//! dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical shape sequences
//! - **Testable**: every rule is a pure function or a value-in/value-out pass
//! - **Portable**: runs anywhere the host embeds it (GUI, headless, server)
//!
//! # Module Structure
//!
//! - [`board`]: 10x10 tile grid with flat-array storage and line scans
//! - [`shape`]: polyomino bounding-matrix model, rotation, template catalog
//! - [`generator`]: random shapes with weighted color selection
//! - [`placement`]: placement validation and application
//! - [`clearing`]: full row/column detection, clearing, full-board detection
//! - [`scoring`]: combo-tier score tables
//! - [`queue`]: visible shape slots, purchasable unlocks, finite backlog
//! - [`rng`]: injectable entropy with a seedable LCG implementation
//!
//! # Game Rules
//!
//! Shapes are dropped anywhere they fit on a fixed 10x10 board - there is
//! no gravity and no piece motion. Every completed row and column clears
//! simultaneously and in place; a pass that empties the board earns a flat
//! bonus. The game ends when no queued shape fits anywhere in any allowed
//! orientation.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{
//!     clearing::clear_lines, generator::ShapeGenerator, placement::place_shape,
//!     rng::SimpleRng, scoring::ScoreTable, Board,
//! };
//! use blockfall_types::GameMode;
//!
//! let mut rng = SimpleRng::new(12345);
//! let generator = ShapeGenerator::uniform();
//! let shape = generator.generate(&mut rng);
//!
//! let board = Board::new();
//! let board = place_shape(&shape, 0, 0, &board, GameMode::Classic).expect("empty board");
//!
//! let result = clear_lines(&board, &ScoreTable::default());
//! assert!(!result.full_board_clear);
//! ```

pub mod board;
pub mod clearing;
pub mod generator;
pub mod placement;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile, TileAnimation, TileAnimationKind};
pub use clearing::{clear_lines, ClearResult};
pub use generator::ShapeGenerator;
pub use placement::{is_valid_placement, place_shape};
pub use queue::{QueueError, QueueItem, ShapeQueue};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::ScoreTable;
pub use shape::{Shape, ShapeBounds, TEMPLATES};
