//! Shared types module - data structures and constants for the puzzle engine
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (rules engine, rendering, headless simulation).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 10 x 10 tiles, addressed as `(row, col)` with both axes
//!   indexed 0-9
//! - **Flat index**: `row * BOARD_SIZE + col` (row-major)
//!
//! Unlike falling-block games there is no gravity: shapes are dropped onto
//! any free region, and completed rows *and* columns vanish in place.
//!
//! # Scoring Tables
//!
//! Line clears are scored per axis through a combo tier (1/2/3/4+ lines
//! cleared simultaneously on that axis), rows and columns independently:
//!
//! | Tier | Points |
//! |--------|--------|
//! | Single | 100 |
//! | Double | 300 |
//! | Triple | 600 |
//! | Quad | 1000 |
//!
//! A pass that leaves the whole board empty adds `FULL_BOARD_BONUS` (300)
//! on top, once per pass.
//!
//! # Animation Timing Tables
//!
//! Clear animations are described as relative offsets, never scheduled here.
//! Each tier carries a start delay, a per-line duration, a wave delay that
//! staggers line starts within the tier, and for the quad tier a count of
//! secondary beat cues spaced `BEAT_INTERVAL_MS` apart.
//!
//! # Queue Slots
//!
//! The player-facing queue has up to `MAX_QUEUE_SLOTS` (4) slots. Slots
//! beyond the initially unlocked count are purchasable placeholders costing
//! `SLOT_COSTS` (5000/15000/50000 for slots 2/3/4).
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{ClearTier, ColorName, CueId, BOARD_SIZE};
//!
//! let color = ColorName::from_str("teal").unwrap();
//! assert_eq!(color.as_str(), "teal");
//!
//! let tier = ClearTier::from_count(6).unwrap();
//! assert_eq!(tier, ClearTier::Quad);
//! assert_eq!(tier.cue(), CueId::ClearQuad);
//!
//! assert_eq!(BOARD_SIZE, 10);
//! ```

/// Board edge length in tiles (the board is square)
pub const BOARD_SIZE: u8 = 10;

/// Bounding matrix edge length for shapes (4x4 covers every template)
pub const SHAPE_DIM: u8 = 4;

/// Flat bonus for a clearing pass that empties the entire board
pub const FULL_BOARD_BONUS: u32 = 300;

/// Default per-tier points for cleared rows (tiers 1/2/3/4+)
pub const ROW_CLEAR_SCORES: [u32; 4] = [100, 300, 600, 1000];

/// Default per-tier points for cleared columns (tiers 1/2/3/4+)
///
/// Kept as a separate table so the axes stay independently configurable
/// even though the defaults match.
pub const COL_CLEAR_SCORES: [u32; 4] = [100, 300, 600, 1000];

/// Maximum number of player-facing queue slots
pub const MAX_QUEUE_SLOTS: usize = 4;

/// Purchase cost of queue slots 2, 3 and 4
pub const SLOT_COSTS: [u32; 3] = [5_000, 15_000, 50_000];

/// Spacing between secondary beat cues within a quad or full-board phase
pub const BEAT_INTERVAL_MS: u32 = 120;

/// Tile colors available to the shape generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Purple,
}

impl ColorName {
    /// All colors, in palette order
    pub const ALL: [ColorName; 7] = [
        ColorName::Red,
        ColorName::Orange,
        ColorName::Yellow,
        ColorName::Green,
        ColorName::Teal,
        ColorName::Blue,
        ColorName::Purple,
    ];

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(ColorName::Red),
            "orange" => Some(ColorName::Orange),
            "yellow" => Some(ColorName::Yellow),
            "green" => Some(ColorName::Green),
            "teal" => Some(ColorName::Teal),
            "blue" => Some(ColorName::Blue),
            "purple" => Some(ColorName::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Yellow => "yellow",
            ColorName::Green => "green",
            ColorName::Teal => "teal",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
        }
    }
}

/// Board variants
///
/// `Classic` is the default free board. `Target` is the alternate mode whose
/// boards come from an external content source with decorative background
/// targets; the base placement rule is the same, and the enum is matched
/// exhaustively wherever the mode can change which tiles accept a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic,
    Target,
}

impl GameMode {
    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "target" => Some(GameMode::Target),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Target => "target",
        }
    }
}

/// Queue generation policy
///
/// `Infinite` generates shapes on demand; `Finite` pre-generates a capped
/// total and ends the game when the backlog runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueMode {
    Infinite,
    Finite,
}

impl QueueMode {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueMode::Infinite => "infinite",
            QueueMode::Finite => "finite",
        }
    }
}

/// Combo tier selected by how many lines cleared simultaneously on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearTier {
    Single,
    Double,
    Triple,
    Quad,
}

impl ClearTier {
    /// Tier for a cleared-line count on one axis; `None` when nothing cleared
    pub fn from_count(lines: usize) -> Option<Self> {
        match lines {
            0 => None,
            1 => Some(ClearTier::Single),
            2 => Some(ClearTier::Double),
            3 => Some(ClearTier::Triple),
            _ => Some(ClearTier::Quad),
        }
    }

    /// Index into per-tier tables (0-3)
    pub fn index(&self) -> usize {
        match self {
            ClearTier::Single => 0,
            ClearTier::Double => 1,
            ClearTier::Triple => 2,
            ClearTier::Quad => 3,
        }
    }

    /// The sound cue announcing a clear of this tier
    pub fn cue(&self) -> CueId {
        match self {
            ClearTier::Single => CueId::ClearSingle,
            ClearTier::Double => CueId::ClearDouble,
            ClearTier::Triple => CueId::ClearTriple,
            ClearTier::Quad => CueId::ClearQuad,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearTier::Single => "single",
            ClearTier::Double => "double",
            ClearTier::Triple => "triple",
            ClearTier::Quad => "quad",
        }
    }
}

/// Opaque sound-cue identifiers handed to the external audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueId {
    ClearSingle,
    ClearDouble,
    ClearTriple,
    ClearQuad,
    FullBoard,
    Beat,
}

impl CueId {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            CueId::ClearSingle => "clear_single",
            CueId::ClearDouble => "clear_double",
            CueId::ClearTriple => "clear_triple",
            CueId::ClearQuad => "clear_quad",
            CueId::FullBoard => "full_board",
            CueId::Beat => "beat",
        }
    }
}

/// Relative timing for one combo tier of the clear animation
///
/// All values are milliseconds relative to the owning phase's base timestamp.
/// `beat_count` is the number of secondary beat cues the tier emits, spaced
/// `BEAT_INTERVAL_MS` apart from the phase start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierTiming {
    pub start_delay_ms: u32,
    pub duration_ms: u32,
    pub wave_delay_ms: u32,
    pub beat_count: u8,
}

/// Default tier timings, indexed by `ClearTier::index()`
///
/// Higher tiers start later and animate longer; only the quad tier carries
/// beat cues.
pub const TIER_TIMINGS: [TierTiming; 4] = [
    TierTiming {
        start_delay_ms: 0,
        duration_ms: 280,
        wave_delay_ms: 40,
        beat_count: 0,
    },
    TierTiming {
        start_delay_ms: 60,
        duration_ms: 340,
        wave_delay_ms: 50,
        beat_count: 0,
    },
    TierTiming {
        start_delay_ms: 120,
        duration_ms: 420,
        wave_delay_ms: 60,
        beat_count: 0,
    },
    TierTiming {
        start_delay_ms: 180,
        duration_ms: 520,
        wave_delay_ms: 70,
        beat_count: 4,
    },
];

/// Timing of the full-board-clear second phase (columns then rows)
pub const FULL_BOARD_TIMING: TierTiming = TierTiming {
    start_delay_ms: 0,
    duration_ms: 600,
    wave_delay_ms: 80,
    beat_count: 6,
};
