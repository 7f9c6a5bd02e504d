//! Trace recording for the supported sorting algorithms
//!
//! Each algorithm is a [`Sorter`] that drives a [`Recorder`]. The recorder
//! owns a private copy of the input, the running counters and the step list,
//! so a sort never touches the caller's data or any shared state:
//!
//! ```text
//! input ──▶ validate ──▶ Recorder::new ──▶ Sorter::sort ──▶ Recorder::finish ──▶ SortOutcome
//! ```
//!
//! Comparison steps are pushed immediately before the order relation they
//! describe is acted on; swap steps are pushed immediately after the
//! exchange, with the exchanged positions highlighted.

mod bubble;
mod insertion;
mod quick;
mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use std::cmp::Ordering;
use tracing::{debug, span, trace, Level};

use crate::core::{validate_values, Algorithm, SortError, SortOutcome, Step, Trace};

/// A sorting algorithm that reports its work to a [`Recorder`]
pub trait Sorter: Send + Sync {
    /// The algorithm this sorter implements
    fn algorithm(&self) -> Algorithm;

    /// Sort the recorder's working array in place, recording every step
    fn sort(&self, recorder: &mut Recorder);
}

/// Get the sorter for an algorithm
pub fn sorter_for(algorithm: Algorithm) -> Box<dyn Sorter> {
    match algorithm {
        Algorithm::Bubble => Box::new(BubbleSort),
        Algorithm::Selection => Box::new(SelectionSort),
        Algorithm::Insertion => Box::new(InsertionSort),
        Algorithm::Quick => Box::new(QuickSort),
    }
}

/// Working state of one recording: array copy, counters and steps
#[derive(Debug, Clone)]
pub struct Recorder {
    array: Vec<f64>,
    steps: Vec<Step>,
    comparisons: u64,
    swaps: u64,
}

impl Recorder {
    /// Start a recording over a private copy of `input`
    pub fn new(input: &[f64]) -> Self {
        Self {
            array: input.to_vec(),
            steps: Vec::new(),
            comparisons: 0,
            swaps: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Current value at `index`
    pub fn value(&self, index: usize) -> f64 {
        self.array[index]
    }

    /// Current working array
    pub fn values(&self) -> &[f64] {
        &self.array
    }

    /// Steps recorded so far
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Record a comparison step between `a` and `b`
    pub fn record_comparison(&mut self, a: usize, b: usize) {
        self.comparisons += 1;
        self.push_step(vec![a, b], false, false);
    }

    /// Record a comparison step, then compare `array[a]` against `array[b]`
    pub fn compare(&mut self, a: usize, b: usize) -> Ordering {
        self.record_comparison(a, b);
        // Values are validated finite before recording starts.
        self.array[a]
            .partial_cmp(&self.array[b])
            .unwrap_or(Ordering::Equal)
    }

    /// Exchange `a` and `b`, then record a swap step
    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.swaps += 1;
        self.push_step(vec![a, b], true, false);
    }

    /// Exchange `a` and `b` and count it as a swap without recording a step
    ///
    /// Used for insertion shifts, which only show up in the swap counter.
    pub fn shift(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.swaps += 1;
        trace!(from = a, to = b, swaps = self.swaps, "Shifted element");
    }

    /// Record the final step and assemble the outcome
    pub fn finish(mut self, algorithm: Algorithm) -> SortOutcome {
        self.push_step(Vec::new(), false, true);
        SortOutcome {
            sorted: self.array,
            trace: Trace {
                algorithm,
                steps: self.steps,
            },
            total_comparisons: self.comparisons,
            total_swaps: self.swaps,
        }
    }

    fn push_step(&mut self, compared: Vec<usize>, is_swap: bool, is_final: bool) {
        self.steps.push(Step {
            array: self.array.clone(),
            compared,
            is_swap,
            comparisons: self.comparisons,
            swaps: self.swaps,
            is_final,
        });
    }
}

/// Sort `input` with `algorithm`, recording the full trace
///
/// The input is copied; the caller's slice is never modified. Fails with
/// [`SortError::InvalidInput`] if any value is not finite, in which case no
/// trace is produced.
///
/// # Example
/// ```rust
/// use sortscope::{record, Algorithm};
///
/// let outcome = record(Algorithm::Bubble, &[3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(outcome.sorted, vec![1.0, 2.0, 3.0]);
/// assert_eq!(outcome.total_comparisons, 3);
/// assert!(outcome.trace.final_step().unwrap().is_final);
/// ```
pub fn record(algorithm: Algorithm, input: &[f64]) -> Result<SortOutcome, SortError> {
    let record_span = span!(
        Level::INFO,
        "record_sort",
        algorithm = %algorithm,
        input_len = input.len()
    );
    let _enter = record_span.enter();

    validate_values(input)?;

    let mut recorder = Recorder::new(input);
    sorter_for(algorithm).sort(&mut recorder);
    let outcome = recorder.finish(algorithm);

    debug!(
        steps = outcome.trace.len(),
        comparisons = outcome.total_comparisons,
        swaps = outcome.total_swaps,
        "Recorded trace"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_records_step_before_result() {
        let mut recorder = Recorder::new(&[2.0, 1.0]);
        assert_eq!(recorder.compare(0, 1), Ordering::Greater);
        assert_eq!(recorder.comparisons(), 1);
        let step = &recorder.steps()[0];
        assert_eq!(step.compared, vec![0, 1]);
        assert!(!step.is_swap);
        assert_eq!(step.comparisons, 1);
    }

    #[test]
    fn test_swap_records_step_after_exchange() {
        let mut recorder = Recorder::new(&[2.0, 1.0]);
        recorder.swap(0, 1);
        let step = &recorder.steps()[0];
        assert_eq!(step.array, vec![1.0, 2.0]);
        assert!(step.is_swap);
        assert_eq!(step.swaps, 1);
    }

    #[test]
    fn test_shift_counts_without_step() {
        let mut recorder = Recorder::new(&[2.0, 1.0]);
        recorder.shift(0, 1);
        assert_eq!(recorder.swaps(), 1);
        assert!(recorder.steps().is_empty());
        assert_eq!(recorder.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_finish_appends_final_step() {
        let outcome = Recorder::new(&[]).finish(Algorithm::Quick);
        assert_eq!(outcome.trace.len(), 1);
        let last = outcome.trace.final_step().unwrap();
        assert!(last.is_final);
        assert!(last.compared.is_empty());
        assert_eq!(outcome.trace.algorithm, Algorithm::Quick);
    }

    #[test]
    fn test_record_does_not_mutate_input() {
        let input = vec![3.0, 2.0, 1.0];
        let outcome = record(Algorithm::Selection, &input).unwrap();
        assert_eq!(input, vec![3.0, 2.0, 1.0]);
        assert_eq!(outcome.sorted, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_record_rejects_non_finite() {
        let result = record(Algorithm::Bubble, &[1.0, f64::INFINITY]);
        assert!(matches!(result, Err(SortError::InvalidInput { position: 1, .. })));
    }

    #[test]
    fn test_sorter_for_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(sorter_for(algorithm).algorithm(), algorithm);
        }
    }
}
