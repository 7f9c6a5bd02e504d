//! Pure playback state machine
//!
//! ```text
//!            install              tick (not final)
//!   Idle ─────────────▶ Ready ─────────────────▶ Playing ─┐
//!    ▲                    │                         ▲     │ tick
//!    │ reset              │ tick (final)            └─────┘
//!    │                    ▼                               │ tick (final)
//!    └───────────────── Finished ◀────────────────────────┘
//! ```
//!
//! Transitions never touch a clock. The timer driver and the browser
//! session both feed ticks into this type.

use serde::Serialize;
use std::sync::Arc;

use crate::core::Trace;

/// Lifecycle of one playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// No trace installed
    #[default]
    Idle,
    /// Trace installed, no tick yet
    Ready,
    /// At least one step shown, final step not reached
    Playing,
    /// Final step shown; further ticks are ignored
    Finished,
}

/// Everything an observer needs to draw one frame
///
/// Snapshots are whole values: the array, highlight and counters always
/// belong to the same step.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Snapshot {
    pub array: Vec<f64>,
    pub compared: Vec<usize>,
    pub is_swap: bool,
    pub comparisons: u64,
    pub swaps: u64,
    /// Index of the step shown, `None` before the first tick
    pub step_index: Option<usize>,
    pub step_count: usize,
    pub status: PlaybackStatus,
}

impl Snapshot {
    /// The empty snapshot shown when nothing is playing
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.status == PlaybackStatus::Finished
    }
}

/// Playback cursor over one installed trace
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    trace: Option<Arc<Trace>>,
    input: Vec<f64>,
    cursor: Option<usize>,
    status: PlaybackStatus,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a trace, replacing any previous one
    ///
    /// `input` is the unsorted array shown until the first tick.
    pub fn install(&mut self, trace: Arc<Trace>, input: Vec<f64>) {
        self.trace = Some(trace);
        self.input = input;
        self.cursor = None;
        self.status = PlaybackStatus::Ready;
    }

    /// Advance exactly one step
    ///
    /// Returns the new snapshot, or `None` when idle or already finished.
    /// A trace with no steps finishes on its first tick.
    pub fn tick(&mut self) -> Option<Snapshot> {
        if !matches!(self.status, PlaybackStatus::Ready | PlaybackStatus::Playing) {
            return None;
        }
        let trace = self.trace.as_ref()?;
        let next = self.cursor.map_or(0, |i| i + 1);
        let step = match trace.steps.get(next) {
            Some(step) => step,
            None => {
                // Empty trace: the first tick ends the run on the raw input.
                self.status = PlaybackStatus::Finished;
                return Some(self.snapshot());
            }
        };
        self.status = if step.is_final || next + 1 == trace.len() {
            PlaybackStatus::Finished
        } else {
            PlaybackStatus::Playing
        };
        self.cursor = Some(next);
        Some(self.snapshot())
    }

    /// Drop the trace and return to the idle state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == PlaybackStatus::Finished
    }

    /// Index of the step currently shown
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn trace(&self) -> Option<&Arc<Trace>> {
        self.trace.as_ref()
    }

    /// Current view: the shown step, the raw input before the first tick,
    /// or the idle snapshot
    pub fn snapshot(&self) -> Snapshot {
        let trace = match (&self.trace, self.status) {
            (Some(trace), status) if status != PlaybackStatus::Idle => trace,
            _ => return Snapshot::idle(),
        };
        match self.cursor.and_then(|i| trace.steps.get(i).map(|s| (i, s))) {
            Some((index, step)) => Snapshot {
                array: step.array.clone(),
                compared: step.compared.clone(),
                is_swap: step.is_swap,
                comparisons: step.comparisons,
                swaps: step.swaps,
                step_index: Some(index),
                step_count: trace.len(),
                status: self.status,
            },
            None => Snapshot {
                array: self.input.clone(),
                step_count: trace.len(),
                status: self.status,
                ..Snapshot::default()
            },
        }
    }
}
