//! Error types for Ordinate.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Ordinate operations.
pub type Result<T> = std::result::Result<T, OrdinateError>;

/// Errors that can occur in Ordinate.
///
/// Settings validation failures are recovered at the settings boundary and
/// shown as a warning; they never reach the sampler. An undefined sample
/// (a function evaluated outside its domain) is not an error at all - it is
/// simply omitted from its series.
#[derive(Debug, Error)]
pub enum OrdinateError {
    /// A field that failed numeric parsing.
    #[error("{field} is not a number: '{text}'")]
    InvalidNumber { field: &'static str, text: String },

    /// Reversed, equal or non-finite plotting bounds.
    #[error("invalid bounds: x min ({min}) must be less than x max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    /// A point count too small to span the interval.
    #[error("point count must be greater than 1 (got {count})")]
    InvalidPointCount { count: usize },

    /// A step that cannot advance through the interval.
    #[error("step must be positive and finite (got {step})")]
    InvalidStep { step: f64 },

    /// A function key not present in the registry.
    #[error("unknown function key '{key}' (valid keys are 1-5)")]
    UnknownFunction { key: String },

    /// More functions selected than can be overlaid.
    #[error("at most {max} functions can be plotted at once (got {count})")]
    TooManySeries { count: usize, max: usize },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrdinateError {
    /// Create an InvalidNumber error.
    pub fn invalid_number(field: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            text: text.into(),
        }
    }

    /// Create an UnknownFunction error.
    pub fn unknown_function(key: impl Into<String>) -> Self {
        Self::UnknownFunction { key: key.into() }
    }
}
