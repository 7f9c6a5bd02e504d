//! Terminal colorization for chart frames
//!
//! Applies ANSI escape codes to a rendered [`ChartFrame`] using crossterm.
//! Colors follow the frame's column map rather than the glyphs, so ASCII
//! and Unicode charts color the same way.

use crossterm::style::{Color, Stylize};
use sortscope::render::{ChartFrame, Highlight};

/// Color for a bar with the given highlight
pub fn highlight_color(highlight: Highlight) -> Color {
    match highlight {
        Highlight::Normal => Color::Cyan,
        Highlight::Comparing => Color::Yellow,
        Highlight::Swapping => Color::Red,
    }
}

/// Colorize a rendered chart frame
///
/// - Bars: cyan, yellow while compared, red while swapped
/// - Axis: dark grey
/// - Value labels: the color of their bar when highlighted
/// - Status line: green once sorted
pub fn colorize_frame(frame: &ChartFrame) -> String {
    let axis_y = frame.bar_rows;
    let label_y = axis_y + 1;

    let lines: Vec<String> = frame
        .lines()
        .iter()
        .enumerate()
        .map(|(y, line)| {
            if y < axis_y {
                colorize_bar_row(frame, line)
            } else if y == axis_y {
                format!("{}", line.as_str().with(Color::DarkGrey))
            } else if y == label_y && !frame.columns.is_empty() && !is_status(line) {
                colorize_label_row(frame, line)
            } else if line.ends_with("sorted") {
                format!("{}", line.as_str().with(Color::Green))
            } else {
                line.clone()
            }
        })
        .collect();

    lines.join("\n")
}

fn is_status(line: &str) -> bool {
    line.starts_with("comparisons:") || line == "idle"
}

fn colorize_bar_row(frame: &ChartFrame, line: &str) -> String {
    let mut result = String::with_capacity(line.len() * 4);
    for (x, c) in line.chars().enumerate() {
        match frame.column_at(x) {
            Some(column) if c != ' ' => {
                let colored = c.to_string().with(highlight_color(column.highlight));
                result.push_str(&format!("{}", colored));
            }
            _ => result.push(c),
        }
    }
    result
}

fn colorize_label_row(frame: &ChartFrame, line: &str) -> String {
    let mut result = String::with_capacity(line.len() * 4);
    for (x, c) in line.chars().enumerate() {
        match frame.column_at(x) {
            Some(column) if c != ' ' && column.highlight != Highlight::Normal => {
                let colored = c
                    .to_string()
                    .with(highlight_color(column.highlight))
                    .bold();
                result.push_str(&format!("{}", colored));
            }
            _ => result.push(c),
        }
    }
    result
}

/// Remove ANSI escape sequences, leaving the visible text
#[cfg(test)]
fn strip_ansi(input: &str) -> String {
    let mut result = String::new();
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
