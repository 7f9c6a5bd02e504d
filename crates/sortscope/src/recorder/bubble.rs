//! Bubble sort
//!
//! Runs the full comparison schedule even when the array is already sorted,
//! so every input of length `n` produces exactly `n(n-1)/2` comparisons.

use std::cmp::Ordering;

use super::{Recorder, Sorter};
use crate::core::Algorithm;

/// Bubble sort without the early-exit pass
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn sort(&self, recorder: &mut Recorder) {
        let n = recorder.len();
        for i in 0..n {
            for j in 0..n - i - 1 {
                // Equal neighbours never swap.
                if recorder.compare(j, j + 1) == Ordering::Greater {
                    recorder.swap(j, j + 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[f64]) -> Recorder {
        let mut recorder = Recorder::new(input);
        BubbleSort.sort(&mut recorder);
        recorder
    }

    #[test]
    fn test_first_pass_schedule() {
        let recorder = run(&[3.0, 1.0, 2.0]);
        let pairs: Vec<(Vec<usize>, bool)> = recorder
            .steps()
            .iter()
            .map(|s| (s.compared.clone(), s.is_swap))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (vec![0, 1], false),
                (vec![0, 1], true),
                (vec![1, 2], false),
                (vec![1, 2], true),
                (vec![0, 1], false),
            ]
        );
        assert_eq!(recorder.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_equal_elements_never_swap() {
        let recorder = run(&[2.0, 2.0, 2.0]);
        assert_eq!(recorder.comparisons(), 3);
        assert_eq!(recorder.swaps(), 0);
    }

    #[test]
    fn test_single_element_has_no_steps() {
        let recorder = run(&[7.0]);
        assert!(recorder.steps().is_empty());
    }
}
