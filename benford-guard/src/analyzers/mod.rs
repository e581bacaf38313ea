//! Analyzer framework and the Benford's Law analyzer.
//!
//! Analysis runs in two steps, following the [`Analyzer`] trait:
//!
//! 1. **State**: every raw value is passed through the digit extractor
//!    ([`leading_digit`]). Values with a leading digit are counted into a
//!    [`DigitCount`]; the rest are counted as excluded.
//! 2. **Metric**: the counts become observed frequencies, which are compared
//!    with [`EXPECTED_DISTRIBUTION`] to produce the discrepancy statistic, the
//!    [`Conformity`] tier and the acceptable range band.
//!
//! States are mergeable ([`AnalyzerState::merge`]), so a column streamed in
//! chunks gives exactly the same result as the whole column analysed at once.
//!
//! ## Example Usage
//!
//! ```rust
//! use benford_guard::analyzers::{Analyzer, AnalyzerState, BenfordAnalyzer, BenfordState, RawValue};
//!
//! let analyzer = BenfordAnalyzer::new().for_column("invoice_total");
//!
//! let first: Vec<RawValue> = vec![1200.into(), 1.75.into(), "31".into()];
//! let second: Vec<RawValue> = vec![None::<i64>.into(), 0.into(), 19.into()];
//!
//! let merged = BenfordState::merge(vec![
//!     analyzer.compute_state_from_values(&first),
//!     analyzer.compute_state_from_values(&second),
//! ])
//! .unwrap();
//!
//! let result = analyzer.compute_metric_from_state(&merged).unwrap();
//! assert_eq!(result.total, 4);
//! assert_eq!(result.excluded, 2);
//! println!("{}: d = {:.4}", result.interpretation(), result.statistic);
//! ```

pub mod benford;
pub mod digits;
pub mod errors;
pub mod traits;
pub mod types;

pub use benford::{analyze, discrepancy_statistic, BenfordAnalyzer, BenfordState};
pub use digits::leading_digit;
pub use errors::{AnalyzerError, AnalyzerResult, InvalidValueError};
pub use traits::{Analyzer, AnalyzerState};
pub use types::{
    AcceptableRange, AnalysisResult, Conformity, DigitCount, LeadingDigit, RawValue,
    ACCEPTABLE_RANGE_TOLERANCE, DIGIT_COUNT, EXPECTED_DISTRIBUTION, HIGH_CONFORMITY_THRESHOLD,
    SIGNIFICANT_DEVIATION_THRESHOLD,
};

#[cfg(test)]
mod tests;
