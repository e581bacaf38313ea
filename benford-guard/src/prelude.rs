//! Prelude for commonly used types and traits in benford-guard.

pub use crate::analyzers::{
    analyze, Analyzer, AnalyzerState, AnalysisResult, BenfordAnalyzer, Conformity, RawValue,
};
pub use crate::error::{BenfordError, Result};
pub use crate::formatters::{ChartData, FormatterConfig, JsonFormatter, ResultFormatter};
pub use crate::logging::LogConfig;
