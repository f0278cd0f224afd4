//! Cue module - the audio collaborator boundary
//!
//! The engine only ever *names* sounds; playing them is the host's job. A
//! [`CuePlayer`] is an explicit capability handed into the dispatch call -
//! never a process-wide registration slot - so tests substitute a recording
//! or no-op player and hosts route cues wherever they like.

use crate::timeline::{ClearTimeline, CueEvent};

use blockfall_types::CueId;

/// Fire-and-forget sink for scheduled sound cues
pub trait CuePlayer {
    /// Accept one cue with its absolute timestamp; no reply expected
    fn play(&mut self, cue: CueId, at_ms: u64);
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCuePlayer;

impl CuePlayer for NullCuePlayer {
    fn play(&mut self, _cue: CueId, _at_ms: u64) {}
}

/// Records every cue it receives, in arrival order
#[derive(Debug, Clone, Default)]
pub struct RecordingCuePlayer {
    pub events: Vec<CueEvent>,
}

impl CuePlayer for RecordingCuePlayer {
    fn play(&mut self, cue: CueId, at_ms: u64) {
        self.events.push(CueEvent { cue, at_ms });
    }
}

/// Hand every cue of a timeline to the player, in time order
pub fn dispatch_cues(timeline: &ClearTimeline, player: &mut dyn CuePlayer) {
    for event in &timeline.cues {
        player.play(event.cue, event.at_ms);
    }
}
