//! Quicksort with Lomuto partitioning
//!
//! The pivot is the last element of the subrange. Partitions recurse on the
//! left subrange before the right one, which fixes the step order.

use std::cmp::Ordering;

use super::{Recorder, Sorter};
use crate::core::Algorithm;

/// Recursive quicksort, left subrange first
pub struct QuickSort;

impl QuickSort {
    fn sort_range(recorder: &mut Recorder, low: usize, high: usize) {
        if low >= high {
            return;
        }
        let pivot = Self::partition(recorder, low, high);
        if pivot > low {
            Self::sort_range(recorder, low, pivot - 1);
        }
        Self::sort_range(recorder, pivot + 1, high);
    }

    /// Partition `low..=high` around `array[high]` and return the pivot's
    /// final position.
    fn partition(recorder: &mut Recorder, low: usize, high: usize) -> usize {
        // Next slot for an element smaller than the pivot.
        let mut boundary = low;
        for j in low..high {
            if recorder.compare(j, high) == Ordering::Less {
                recorder.swap(boundary, j);
                boundary += 1;
            }
        }
        // Pivot placement: counted as a swap, no comparison step before it.
        recorder.swap(boundary, high);
        boundary
    }
}

impl Sorter for QuickSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    fn sort(&self, recorder: &mut Recorder) {
        if recorder.len() > 1 {
            Self::sort_range(recorder, 0, recorder.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_places_pivot() {
        let mut recorder = Recorder::new(&[3.0, 1.0, 2.0]);
        let pivot = QuickSort::partition(&mut recorder, 0, 2);
        assert_eq!(pivot, 1);
        assert_eq!(recorder.values(), &[1.0, 2.0, 3.0]);
        // (0,2) cmp, (1,2) cmp, (0,1) swap, pivot swap (1,2)
        let kinds: Vec<(Vec<usize>, bool)> = recorder
            .steps()
            .iter()
            .map(|s| (s.compared.clone(), s.is_swap))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (vec![0, 2], false),
                (vec![1, 2], false),
                (vec![0, 1], true),
                (vec![1, 2], true),
            ]
        );
    }

    #[test]
    fn test_pivot_swap_has_no_comparison() {
        let mut recorder = Recorder::new(&[1.0, 2.0]);
        QuickSort.sort(&mut recorder);
        // (0,1) cmp, (0,0) swap, pivot swap (1,1)
        assert_eq!(recorder.comparisons(), 1);
        assert_eq!(recorder.swaps(), 2);
        assert!(recorder.steps().last().unwrap().is_swap);
    }

    #[test]
    fn test_left_subrange_first() {
        let mut recorder = Recorder::new(&[4.0, 5.0, 1.0, 3.0]);
        QuickSort.sort(&mut recorder);
        assert_eq!(recorder.values(), &[1.0, 3.0, 4.0, 5.0]);
        // After the first partition the pivot 3.0 sits at index 1; the next
        // comparison is in the right subrange [2, 3] because the left one
        // holds a single element.
        let first_after_pivot = recorder
            .steps()
            .iter()
            .skip_while(|s| !(s.is_swap && s.array == vec![1.0, 3.0, 4.0, 5.0]))
            .find(|s| !s.is_swap)
            .unwrap();
        assert_eq!(first_after_pivot.compared, vec![2, 3]);
    }
}
