//! Error types for the analyzer framework.

use thiserror::Error;

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Reasons a single raw value cannot contribute a leading digit.
///
/// These errors never abort an analysis. The analyzer absorbs them, counts the
/// value as excluded and moves on to the next one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidValueError {
    /// The cell was null.
    #[error("Value is missing")]
    Missing,

    /// The cell held blank text.
    #[error("Value is empty")]
    Empty,

    /// Zero has no leading digit.
    #[error("Value is zero")]
    Zero,

    /// NaN or an infinity.
    #[error("Value is not finite")]
    NonFinite,

    /// Text that does not parse as a number.
    #[error("Value '{0}' is not numeric")]
    NotNumeric(String),
}

/// Errors that can occur during analyzer operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    /// No value survived digit extraction, so no frequency can be computed.
    #[error("No valid values available for analysis ({excluded} excluded)")]
    EmptyInput {
        /// Number of values that were rejected by the extractor.
        excluded: u64,
    },

    /// Error occurred while merging states.
    #[error("Failed to merge states: {0}")]
    StateMerge(String),
}

impl AnalyzerError {
    /// Creates an empty input error carrying the number of excluded values.
    pub fn empty_input(excluded: u64) -> Self {
        Self::EmptyInput { excluded }
    }

    /// Creates a state merge error with the given message.
    pub fn state_merge(msg: impl Into<String>) -> Self {
        Self::StateMerge(msg.into())
    }
}
