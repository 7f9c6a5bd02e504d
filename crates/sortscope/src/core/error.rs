//! Core error types for trace recording
//!
//! Validation is the only way the sorting core can fail: the recorder either
//! returns a complete trace or is never run.

use thiserror::Error;

/// Errors raised before a trace is recorded
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SortError {
    /// An entry in the array is not a finite number.
    ///
    /// `position` is the byte offset of the entry in the source text, or the
    /// element index when the values did not come from text.
    #[error("Invalid input: '{entry}' at position {position} is not a finite number")]
    InvalidInput { entry: String, position: usize },

    #[error("Unknown algorithm: {name} (expected one of bubble, selection, insertion, quick)")]
    UnknownAlgorithm { name: String },
}

impl SortError {
    /// Create a new invalid input error
    pub fn invalid_input(entry: impl Into<String>, position: usize) -> Self {
        Self::InvalidInput {
            entry: entry.into(),
            position,
        }
    }

    /// Create a new unknown algorithm error
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }
}
