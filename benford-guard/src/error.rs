//! Error types for the benford-guard library.
//!
//! All fallible public operations return [`Result`], whose error type is
//! [`BenfordError`]. Per-value extraction failures are not part of this type:
//! they are absorbed by the analyzer and reported as an excluded count.

use thiserror::Error;

use crate::analyzers::AnalyzerError;

/// The main error type for the benford-guard library.
#[derive(Error, Debug)]
pub enum BenfordError {
    /// Error raised by an analyzer.
    #[error("Analysis failed: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// Error from serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error related to configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A type alias for `Result<T, BenfordError>`.
pub type Result<T> = std::result::Result<T, BenfordError>;

impl BenfordError {
    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true when the analysis had no usable values.
    ///
    /// Callers typically translate this into a prompt to pick another column.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::Analyzer(AnalyzerError::EmptyInput { .. }))
    }
}

impl From<serde_json::Error> for BenfordError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
