//! Mapping playback snapshots to visual attributes
//!
//! [`project`] is the whole presentation contract: bar height relative to
//! the largest value in the current array, and a highlight per position.
//! [`ChartRenderer`] draws that projection as a text bar chart.

mod chart;

pub use chart::{format_value, status_line, BarColumn, ChartConfig, ChartFrame, ChartRenderer};

use anyhow::Result;
use serde::Serialize;

use crate::playback::Snapshot;

/// How one bar is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    #[default]
    Normal,
    /// Position is part of the comparison shown by this step
    Comparing,
    /// Position was just exchanged
    Swapping,
}

/// Visual attributes of one array position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub index: usize,
    pub value: f64,
    /// Height as a fraction of the tallest bar, in `0.0..=1.0`
    pub height: f64,
    pub highlight: Highlight,
}

/// Project a snapshot onto bar attributes
///
/// Heights are `value / max(array)`, clamped to `0.0..=1.0`. When the
/// largest value is not positive every height is zero.
pub fn project(snapshot: &Snapshot) -> Vec<Bar> {
    let max = snapshot
        .array
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    snapshot
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let height = if max > 0.0 {
                (value / max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let highlight = match (snapshot.compared.contains(&index), snapshot.is_swap) {
                (false, _) => Highlight::Normal,
                (true, false) => Highlight::Comparing,
                (true, true) => Highlight::Swapping,
            };
            Bar {
                index,
                value,
                height,
                highlight,
            }
        })
        .collect()
}

/// Core trait for snapshot renderers
pub trait Renderer: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render one snapshot
    fn render(&self, snapshot: &Snapshot) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}

/// Renderer producing the raw bar projection
#[derive(Debug, Clone, Copy, Default)]
pub struct BarRenderer;

impl Renderer for BarRenderer {
    type Output = Vec<Bar>;

    fn render(&self, snapshot: &Snapshot) -> Result<Vec<Bar>> {
        Ok(project(snapshot))
    }

    fn name(&self) -> &'static str {
        "bars"
    }

    fn format(&self) -> &'static str {
        "attributes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(array: Vec<f64>, compared: Vec<usize>, is_swap: bool) -> Snapshot {
        Snapshot {
            array,
            compared,
            is_swap,
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_heights_relative_to_max() {
        let bars = project(&snapshot(vec![2.0, 4.0, 1.0], vec![], false));
        let heights: Vec<f64> = bars.iter().map(|b| b.height).collect();
        assert_eq!(heights, vec![0.5, 1.0, 0.25]);
    }

    #[test]
    fn test_comparison_highlight() {
        let bars = project(&snapshot(vec![1.0, 2.0, 3.0], vec![0, 2], false));
        assert_eq!(bars[0].highlight, Highlight::Comparing);
        assert_eq!(bars[1].highlight, Highlight::Normal);
        assert_eq!(bars[2].highlight, Highlight::Comparing);
    }

    #[test]
    fn test_swap_highlight() {
        let bars = project(&snapshot(vec![1.0, 2.0], vec![0, 1], true));
        assert!(bars.iter().all(|b| b.highlight == Highlight::Swapping));
    }

    #[test]
    fn test_non_positive_max_flattens() {
        let bars = project(&snapshot(vec![-3.0, 0.0, -1.0], vec![], false));
        assert!(bars.iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn test_negative_values_clamp_to_zero() {
        let bars = project(&snapshot(vec![-2.0, 4.0], vec![], false));
        assert_eq!(bars[0].height, 0.0);
        assert_eq!(bars[1].height, 1.0);
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(project(&Snapshot::idle()).is_empty());
        assert!(BarRenderer.render(&Snapshot::idle()).unwrap().is_empty());
    }
}
