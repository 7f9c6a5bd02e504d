//! Core type definitions for trace recording
//!
//! This module contains the fundamental types used throughout sortscope:
//! the algorithm selector, the recorded steps, and the trace that owns them.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::SortError;

/// Sorting algorithms that can be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent exchange, full `n(n-1)/2` comparison schedule
    #[default]
    Bubble,
    /// Minimum selection with one exchange per outer pass
    Selection,
    /// Insertion by walking the key down the sorted prefix
    Insertion,
    /// Lomuto partitioning around the last element
    Quick,
}

impl Algorithm {
    /// All algorithms, in display order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
    ];

    /// Get all valid algorithm names
    pub fn variants() -> &'static [&'static str] {
        &["bubble", "selection", "insertion", "quick"]
    }

    /// Title-cased name for listings, e.g. "Bubble Sort"
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Average-case time complexity
    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::Quick => "O(n log n)",
            _ => "O(n²)",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Repeatedly exchanges adjacent out-of-order pairs",
            Algorithm::Selection => "Selects the minimum of the unsorted suffix each pass",
            Algorithm::Insertion => "Inserts each element into the sorted prefix",
            Algorithm::Quick => "Partitions around the last element and recurses",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bubble => write!(f, "bubble"),
            Algorithm::Selection => write!(f, "selection"),
            Algorithm::Insertion => write!(f, "insertion"),
            Algorithm::Quick => write!(f, "quick"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "quick" | "quicksort" => Ok(Algorithm::Quick),
            _ => Err(SortError::unknown_algorithm(s)),
        }
    }
}

/// One instant of an algorithm's execution
///
/// `array` is a full snapshot, never a diff. The counters are running totals
/// up to and including this step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub array: Vec<f64>,
    pub compared: Vec<usize>,
    pub is_swap: bool,
    pub comparisons: u64,
    pub swaps: u64,
    pub is_final: bool,
}

impl Step {
    /// Returns true if this step highlights a comparison (not an exchange)
    pub fn is_comparison(&self) -> bool {
        !self.is_swap && !self.compared.is_empty()
    }
}

/// The complete ordered record of one algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub algorithm: Algorithm,
    pub steps: Vec<Step>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last step, which carries the sorted array and final totals
    pub fn final_step(&self) -> Option<&Step> {
        self.steps.last()
    }
}

/// Result of recording one sort: the sorted output, its trace and totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortOutcome {
    pub sorted: Vec<f64>,
    pub trace: Trace,
    pub total_comparisons: u64,
    pub total_swaps: u64,
}

/// Character set for rendering charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// Pure ASCII characters only: # = |
    Ascii,
    /// Unicode block elements: █ ▓ ░
    #[default]
    Unicode,
}

impl CharacterSet {
    /// Returns true if this character set uses only ASCII
    pub fn is_ascii(&self) -> bool {
        matches!(self, CharacterSet::Ascii)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ascii => write!(f, "ascii"),
            CharacterSet::Unicode => write!(f, "unicode"),
        }
    }
}
