//! Timeline module - scheduling data for clear animations and cues
//!
//! Builds a pure description of when each cleared line animates and when
//! each sound cue fires, all as millisecond offsets from a caller-supplied
//! base timestamp. No timers, no callbacks: the presentation layer owns the
//! clock and drives itself off these numbers, so aborting a sequence is the
//! caller clearing its own handles.
//!
//! Within a phase, line starts are staggered by the tier's wave delay; a
//! phase's end accounts for the full wave span (board size minus one steps)
//! regardless of how many lines cleared, so phases never overlap. When a
//! pass empties the board, a second phase sweeps all columns and then all
//! rows, anchored strictly after the first phase ends.

use tracing::debug;

use blockfall_types::{
    ClearTier, CueId, TierTiming, BEAT_INTERVAL_MS, BOARD_SIZE, FULL_BOARD_TIMING, TIER_TIMINGS,
};

/// Per-axis tier tables plus full-board sweep timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Timing for 1/2/3/4+ rows cleared in one pass
    pub row_tiers: [TierTiming; 4],
    /// Timing for 1/2/3/4+ columns cleared in one pass
    pub col_tiers: [TierTiming; 4],
    /// Timing of the full-board second phase
    pub full_board: TierTiming,
    /// Spacing of secondary beat cues within a phase
    pub beat_interval_ms: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            row_tiers: TIER_TIMINGS,
            col_tiers: TIER_TIMINGS,
            full_board: FULL_BOARD_TIMING,
            beat_interval_ms: BEAT_INTERVAL_MS,
        }
    }
}

/// Scheduled animation of the cleared lines on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisTimeline {
    pub tier: ClearTier,
    /// Lines cleared on this axis
    pub lines: u8,
    /// Absolute start of the phase (base + tier start delay)
    pub start_ms: u64,
    /// Per-line animation duration
    pub duration_ms: u32,
    /// Stagger between consecutive line starts
    pub wave_delay_ms: u32,
    /// Secondary beat cues this tier emits
    pub beat_count: u8,
}

impl AxisTimeline {
    /// Start of the nth cleared line's animation (first line starts at once)
    pub fn line_start_ms(&self, line_index: usize) -> u64 {
        self.start_ms + line_index as u64 * self.wave_delay_ms as u64
    }

    /// End of the phase, covering the full wave span
    pub fn end_ms(&self) -> u64 {
        self.start_ms
            + self.duration_ms as u64
            + (BOARD_SIZE as u64 - 1) * self.wave_delay_ms as u64
    }
}

/// One cell-by-cell sweep of the full-board second phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepTimeline {
    pub start_ms: u64,
    pub duration_ms: u32,
    pub wave_delay_ms: u32,
}

impl SweepTimeline {
    /// Start of the nth line's sweep
    pub fn line_start_ms(&self, line_index: usize) -> u64 {
        self.start_ms + line_index as u64 * self.wave_delay_ms as u64
    }

    /// End of the sweep, covering the full wave span
    pub fn end_ms(&self) -> u64 {
        self.start_ms
            + self.duration_ms as u64
            + (BOARD_SIZE as u64 - 1) * self.wave_delay_ms as u64
    }
}

/// The full-board second phase: all columns sweep, then all rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullBoardTimeline {
    pub start_ms: u64,
    pub beat_count: u8,
    pub col_sweep: SweepTimeline,
    pub row_sweep: SweepTimeline,
}

/// A scheduled sound cue for the external audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueEvent {
    pub cue: CueId,
    pub at_ms: u64,
}

/// Complete scheduling data for one clearing pass
#[derive(Debug, Clone, PartialEq)]
pub struct ClearTimeline {
    pub base_ms: u64,
    pub rows: Option<AxisTimeline>,
    pub cols: Option<AxisTimeline>,
    pub full_board: Option<FullBoardTimeline>,
    /// All cues of the pass, ordered by time
    pub cues: Vec<CueEvent>,
}

impl ClearTimeline {
    /// Whether this pass scheduled anything at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_none() && self.cols.is_none() && self.full_board.is_none()
    }

    /// End of the last scheduled phase, or the base timestamp if none
    pub fn end_ms(&self) -> u64 {
        if let Some(full_board) = &self.full_board {
            return full_board.row_sweep.end_ms();
        }
        self.rows
            .iter()
            .chain(self.cols.iter())
            .map(AxisTimeline::end_ms)
            .max()
            .unwrap_or(self.base_ms)
    }
}

/// Compute the scheduling data for a clearing pass
///
/// Pure function of the clear counts and the config; an all-zero input
/// yields an empty timeline with no cues.
pub fn build_clear_timeline(
    cleared_rows: usize,
    cleared_cols: usize,
    full_board: bool,
    base_ms: u64,
    config: &TimelineConfig,
) -> ClearTimeline {
    let rows = axis_timeline(cleared_rows, &config.row_tiers, base_ms);
    let cols = axis_timeline(cleared_cols, &config.col_tiers, base_ms);

    let mut cues = Vec::new();
    for axis in rows.iter().chain(cols.iter()) {
        cues.push(CueEvent {
            cue: axis.tier.cue(),
            at_ms: axis.start_ms,
        });
        push_beats(&mut cues, axis.start_ms, axis.beat_count, config);
    }

    let full_board = full_board.then(|| {
        // Anchor after whichever first-phase axis ends last; a defensive
        // zero-line call anchors at the base timestamp.
        let first_phase_end = rows
            .iter()
            .chain(cols.iter())
            .map(AxisTimeline::end_ms)
            .max()
            .unwrap_or(base_ms);

        let timing = config.full_board;
        let col_sweep = SweepTimeline {
            start_ms: first_phase_end + timing.start_delay_ms as u64,
            duration_ms: timing.duration_ms,
            wave_delay_ms: timing.wave_delay_ms,
        };
        let row_sweep = SweepTimeline {
            start_ms: col_sweep.end_ms(),
            duration_ms: timing.duration_ms,
            wave_delay_ms: timing.wave_delay_ms,
        };

        cues.push(CueEvent {
            cue: CueId::FullBoard,
            at_ms: col_sweep.start_ms,
        });
        push_beats(&mut cues, col_sweep.start_ms, timing.beat_count, config);

        FullBoardTimeline {
            start_ms: col_sweep.start_ms,
            beat_count: timing.beat_count,
            col_sweep,
            row_sweep,
        }
    });

    cues.sort_by_key(|event| event.at_ms);

    let timeline = ClearTimeline {
        base_ms,
        rows,
        cols,
        full_board,
        cues,
    };
    debug!(
        cleared_rows,
        cleared_cols,
        full_board = timeline.full_board.is_some(),
        end_ms = timeline.end_ms(),
        cue_count = timeline.cues.len(),
        "built clear timeline"
    );
    timeline
}

fn axis_timeline(lines: usize, tiers: &[TierTiming; 4], base_ms: u64) -> Option<AxisTimeline> {
    let tier = ClearTier::from_count(lines)?;
    let timing = tiers[tier.index()];
    Some(AxisTimeline {
        tier,
        lines: lines as u8,
        start_ms: base_ms + timing.start_delay_ms as u64,
        duration_ms: timing.duration_ms,
        wave_delay_ms: timing.wave_delay_ms,
        beat_count: timing.beat_count,
    })
}

fn push_beats(cues: &mut Vec<CueEvent>, phase_start_ms: u64, count: u8, config: &TimelineConfig) {
    for beat in 1..=count as u64 {
        cues.push(CueEvent {
            cue: CueId::Beat,
            at_ms: phase_start_ms + beat * config.beat_interval_ms as u64,
        });
    }
}
