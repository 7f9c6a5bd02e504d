//! Text bar chart renderer
//!
//! Layout, top to bottom: `height` rows of bars, an axis row, a value label
//! row and a status row with the running counters. Every bar is at least as
//! wide as the longest value label so labels are never truncated.

use anyhow::{bail, Result};
use std::fmt;
use tracing::trace;

use super::{project, Highlight, Renderer};
use crate::core::{CharacterSet, ChartCanvas};
use crate::playback::{PlaybackStatus, Snapshot};

/// Chart layout options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// Rows available to the tallest bar
    pub height: usize,
    /// Minimum bar width in columns
    pub min_bar_width: usize,
    /// Blank columns between bars
    pub gap: usize,
    pub style: CharacterSet,
    pub show_values: bool,
    pub show_status: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 10,
            min_bar_width: 3,
            gap: 1,
            style: CharacterSet::default(),
            show_values: true,
            show_status: true,
        }
    }
}

/// Horizontal extent of one bar in a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColumn {
    pub index: usize,
    pub x: usize,
    pub width: usize,
    pub highlight: Highlight,
}

/// A rendered chart plus the column map needed to colorize it
#[derive(Debug, Clone)]
pub struct ChartFrame {
    pub canvas: ChartCanvas,
    pub columns: Vec<BarColumn>,
    /// Number of rows occupied by bars (the rows above the axis)
    pub bar_rows: usize,
}

impl ChartFrame {
    /// The bar covering canvas column `x`, if any
    pub fn column_at(&self, x: usize) -> Option<&BarColumn> {
        self.columns
            .iter()
            .find(|column| x >= column.x && x < column.x + column.width)
    }

    /// Rendered rows, trailing spaces removed
    pub fn lines(&self) -> Vec<String> {
        (0..self.canvas.height).map(|y| self.canvas.row(y)).collect()
    }
}

impl fmt::Display for ChartFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canvas)
    }
}

/// Text bar chart renderer
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: CharacterSet) -> Self {
        Self::with_config(ChartConfig {
            style,
            ..ChartConfig::default()
        })
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn glyph(&self, highlight: Highlight) -> char {
        match (self.config.style, highlight) {
            (CharacterSet::Ascii, Highlight::Normal) => '#',
            (CharacterSet::Ascii, Highlight::Comparing) => '=',
            (CharacterSet::Ascii, Highlight::Swapping) => '*',
            (CharacterSet::Unicode, Highlight::Normal) => '█',
            (CharacterSet::Unicode, Highlight::Comparing) => '▓',
            (CharacterSet::Unicode, Highlight::Swapping) => '░',
        }
    }

    fn axis_char(&self) -> char {
        if self.config.style.is_ascii() {
            '-'
        } else {
            '─'
        }
    }

    fn bar_rows(&self, height: f64) -> usize {
        if height <= 0.0 {
            return 0;
        }
        let rows = (height * self.config.height as f64).round() as usize;
        rows.clamp(1, self.config.height)
    }
}

impl Renderer for ChartRenderer {
    type Output = ChartFrame;

    fn render(&self, snapshot: &Snapshot) -> Result<ChartFrame> {
        if self.config.height == 0 {
            bail!("Chart height must be at least 1 row");
        }

        let bars = project(snapshot);
        let labels: Vec<String> = bars.iter().map(|bar| format_value(bar.value)).collect();
        let bar_width = labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.config.min_bar_width)
            .max(1);
        let stride = bar_width + self.config.gap;
        let total_width = (bars.len() * stride).saturating_sub(self.config.gap);

        let axis_y = self.config.height;
        let bottom_y = axis_y - 1;
        let mut canvas = ChartCanvas::new(total_width.max(1), axis_y + 1);
        let mut columns = Vec::with_capacity(bars.len());

        for (bar, label) in bars.iter().zip(&labels) {
            let x = bar.index * stride;
            let rows = self.bar_rows(bar.height);
            let glyph = self.glyph(bar.highlight);
            for dx in 0..bar_width {
                canvas.fill_column_up(x + dx, bottom_y, rows, glyph);
            }
            if self.config.show_values {
                canvas.draw_text_right(x + bar_width - 1, axis_y + 1, label);
            }
            columns.push(BarColumn {
                index: bar.index,
                x,
                width: bar_width,
                highlight: bar.highlight,
            });
        }

        canvas.draw_horizontal_line(0, axis_y, total_width, self.axis_char());

        if self.config.show_status {
            let status_y = if self.config.show_values {
                axis_y + 2
            } else {
                axis_y + 1
            };
            canvas.draw_text(0, status_y, &status_line(snapshot));
        }

        trace!(bars = bars.len(), width = canvas.width, "Rendered chart frame");
        Ok(ChartFrame {
            canvas,
            columns,
            bar_rows: self.config.height,
        })
    }

    fn name(&self) -> &'static str {
        "chart"
    }

    fn format(&self) -> &'static str {
        "text"
    }
}

/// Format a value without a trailing `.0` for whole numbers
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// One-line summary of the counters and progress
pub fn status_line(snapshot: &Snapshot) -> String {
    match (snapshot.status, snapshot.step_index) {
        (PlaybackStatus::Idle, _) => "idle".to_string(),
        (status, Some(index)) => {
            let mut line = format!(
                "comparisons: {}  swaps: {}  step: {}/{}",
                snapshot.comparisons,
                snapshot.swaps,
                index + 1,
                snapshot.step_count
            );
            if status == PlaybackStatus::Finished {
                line.push_str("  sorted");
            }
            line
        }
        (_, None) => format!(
            "comparisons: 0  swaps: 0  step: 0/{}",
            snapshot.step_count
        ),
    }
}
