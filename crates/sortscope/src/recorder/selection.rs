//! Selection sort

use std::cmp::Ordering;

use super::{Recorder, Sorter};
use crate::core::Algorithm;

/// Selection sort: one exchange per outer pass, only when the minimum moved
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn sort(&self, recorder: &mut Recorder) {
        let n = recorder.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                // array[j] < array[min], strictly
                if recorder.compare(min, j) == Ordering::Greater {
                    min = j;
                }
            }
            if min != i {
                recorder.swap(i, min);
            }
        }
    }
}
