//! Insertion sort
//!
//! The key walks down the sorted prefix one position per shift. Every order
//! check against the left neighbour is recorded as a comparison step,
//! including the one that ends the walk. Reaching the front of the array
//! ends the walk without a step. Shifts are counted as swaps but never
//! emitted as swap steps.

use super::{Recorder, Sorter};
use crate::core::Algorithm;

/// Insertion sort with shifts reported through the swap counter
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn sort(&self, recorder: &mut Recorder) {
        for i in 1..recorder.len() {
            // The key always sits at `j`; moving it down one slot is an
            // adjacent exchange, which keeps every snapshot a permutation.
            let mut j = i;
            while j > 0 {
                recorder.record_comparison(j - 1, j);
                if recorder.value(j - 1) <= recorder.value(j) {
                    break;
                }
                recorder.shift(j - 1, j);
                j -= 1;
            }
        }
    }
}
