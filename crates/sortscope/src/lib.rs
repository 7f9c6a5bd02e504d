//! Sortscope - record sorting algorithms and replay them step by step
//!
//! A library for recording every comparison and swap a classic sorting
//! algorithm performs, replaying the recording on a timer, and drawing each
//! step as a bar chart.
//!
//! # Quick Start
//!
//! ```rust
//! use sortscope::{parse_input, run_sort, Algorithm};
//!
//! let values = parse_input("64, 34, 25, 12, 22, 11, 90").unwrap();
//! let outcome = run_sort(Algorithm::Bubble, &values).unwrap();
//!
//! assert_eq!(outcome.sorted, vec![11.0, 12.0, 22.0, 25.0, 34.0, 64.0, 90.0]);
//! assert_eq!(outcome.total_comparisons, 21);
//! ```
//!
//! # Replaying a Trace
//!
//! Native builds ship a tokio-driven [`PlaybackDriver`](playback::PlaybackDriver).
//! The pure state machine underneath can also be stepped by hand:
//!
//! ```rust
//! use std::sync::Arc;
//! use sortscope::prelude::*;
//!
//! let input = vec![3.0, 1.0, 2.0];
//! let outcome = run_sort(Algorithm::Quick, &input).unwrap();
//!
//! let mut state = PlaybackState::new();
//! state.install(Arc::new(outcome.trace), input);
//!
//! let renderer = ChartRenderer::with_style(CharacterSet::Ascii);
//! while let Some(snapshot) = state.tick() {
//!     let frame = renderer.render(&snapshot).unwrap();
//!     println!("{}", frame);
//! }
//! assert!(state.is_finished());
//! ```

pub mod core;
pub mod playback;
pub mod recorder;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;
pub use recorder::record;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Algorithm, CharacterSet, SortError, SortOutcome, Step, Trace};
    pub use crate::playback::{PlaybackConfig, PlaybackState, PlaybackStatus, Snapshot};
    pub use crate::recorder::{record, Recorder, Sorter};
    pub use crate::render::{project, Bar, ChartConfig, ChartRenderer, Highlight, Renderer};
    pub use crate::{parse_input, run_sort, sort_text};

    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::playback::{PlaybackDriver, SnapshotStream};
}

/// Sort `input` with `algorithm` and return the sorted array, the full step
/// trace and the totals
///
/// The caller's slice is not modified. Fails with
/// [`SortError::InvalidInput`] when a value is not finite.
///
/// # Example
/// ```rust
/// use sortscope::{run_sort, Algorithm};
///
/// let outcome = run_sort(Algorithm::Selection, &[5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
/// assert_eq!(outcome.total_comparisons, 10);
/// assert_eq!(outcome.trace.steps.last().unwrap().array, outcome.sorted);
/// ```
pub fn run_sort(algorithm: Algorithm, input: &[f64]) -> Result<SortOutcome, SortError> {
    record(algorithm, input)
}

/// Parse array text and sort it in one call
///
/// # Example
/// ```rust
/// use sortscope::{sort_text, Algorithm};
///
/// let outcome = sort_text(Algorithm::Insertion, "3 1 2").unwrap();
/// assert_eq!(outcome.sorted, vec![1.0, 2.0, 3.0]);
/// assert!(sort_text(Algorithm::Insertion, "3 one 2").is_err());
/// ```
pub fn sort_text(algorithm: Algorithm, text: &str) -> Result<SortOutcome, SortError> {
    let values = parse_input(text)?;
    record(algorithm, &values)
}
