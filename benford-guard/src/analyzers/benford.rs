//! Benford's Law conformity analyzer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::digits::leading_digit;
use super::errors::{AnalyzerError, AnalyzerResult, InvalidValueError};
use super::traits::{Analyzer, AnalyzerState};
use super::types::{
    AcceptableRange, AnalysisResult, Conformity, DigitCount, LeadingDigit, RawValue, DIGIT_COUNT,
    EXPECTED_DISTRIBUTION,
};
use crate::logging::{truncate_field, LogConfig};

/// Analyzer that tests whether a column's leading digits follow Benford's Law.
///
/// Each value is reduced to its leading digit; values without one (nulls,
/// zeros, non-numeric text) are counted as excluded rather than failing the
/// run. The observed digit frequencies are compared with
/// [`EXPECTED_DISTRIBUTION`] through [`discrepancy_statistic`] and classified
/// into a [`Conformity`] tier.
///
/// # Example
///
/// ```rust
/// use benford_guard::analyzers::{BenfordAnalyzer, Conformity, RawValue};
///
/// let values: Vec<RawValue> = [111, 112, 113, 121, 131, 211, 311, 411, 511, 611, 711, 811, 911]
///     .into_iter()
///     .map(RawValue::from)
///     .collect();
///
/// let result = BenfordAnalyzer::new().for_column("amount").analyze(&values).unwrap();
/// assert_eq!(result.total, 13);
/// assert_eq!(result.conformity, Conformity::Acceptable);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BenfordAnalyzer {
    /// The column the values come from, if known.
    column: Option<String>,
    log_config: LogConfig,
}

impl BenfordAnalyzer {
    /// Creates a new analyzer with default logging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the column being analysed; the name is carried into logs and results.
    pub fn for_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Sets the logging configuration.
    pub fn with_log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = log_config;
        self
    }

    /// Returns the column being analyzed.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Runs the full analysis over `values`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::EmptyInput`] when no value yields a leading digit.
    #[instrument(
        skip(self, values),
        fields(
            analyzer = "benford",
            column = self.column.as_deref().unwrap_or("-"),
            value_count = values.len()
        )
    )]
    pub fn analyze(&self, values: &[RawValue]) -> AnalyzerResult<AnalysisResult> {
        let state = self.compute_state_from_values(values);
        self.compute_metric_from_state(&state)
    }
}

/// State for the Benford analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenfordState {
    /// Occurrences per leading digit.
    pub digit_counts: DigitCount,
    /// Values rejected by the digit extractor.
    pub excluded_count: u64,
}

impl BenfordState {
    /// Folds one value into the state, returning the extraction outcome.
    pub fn observe(&mut self, value: &RawValue) -> Result<LeadingDigit, InvalidValueError> {
        let outcome = leading_digit(value);
        match &outcome {
            Ok(digit) => self.digit_counts.record(*digit),
            Err(_) => self.excluded_count += 1,
        }
        outcome
    }

    /// Number of values that contributed a leading digit.
    pub fn total(&self) -> u64 {
        self.digit_counts.total()
    }
}

impl AnalyzerState for BenfordState {
    fn merge(states: Vec<Self>) -> AnalyzerResult<Self> {
        let mut merged = BenfordState::default();
        for state in &states {
            merged.digit_counts = merged
                .digit_counts
                .checked_add(&state.digit_counts)
                .ok_or_else(|| AnalyzerError::state_merge("digit count overflow"))?;
            merged.excluded_count = merged
                .excluded_count
                .checked_add(state.excluded_count)
                .ok_or_else(|| AnalyzerError::state_merge("excluded count overflow"))?;
        }
        Ok(merged)
    }

    fn is_empty(&self) -> bool {
        self.total() == 0 && self.excluded_count == 0
    }
}

impl Analyzer for BenfordAnalyzer {
    type State = BenfordState;
    type Metric = AnalysisResult;

    fn compute_state_from_values(&self, values: &[RawValue]) -> Self::State {
        let mut state = BenfordState::default();
        for value in values {
            if let Err(err) = state.observe(value) {
                if self.log_config.logs_exclusions() {
                    debug!(
                        value = %truncate_field(&value.to_string(), self.log_config.max_field_length),
                        reason = %err,
                        "Excluding value without a leading digit"
                    );
                }
            }
        }
        state
    }

    fn compute_metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric> {
        let total = state.total();
        let observed = state
            .digit_counts
            .frequencies()
            .ok_or_else(|| AnalyzerError::empty_input(state.excluded_count))?;

        let statistic = discrepancy_statistic(&observed);
        let conformity = Conformity::classify(statistic);

        if self.log_config.logs_metrics() {
            info!(
                column = self.column.as_deref().unwrap_or("-"),
                total,
                excluded = state.excluded_count,
                observed = ?observed,
                statistic,
                interpretation = conformity.label(),
                "Benford analysis completed"
            );
        }
        if state.excluded_count > 0 {
            warn!(
                column = self.column.as_deref().unwrap_or("-"),
                excluded = state.excluded_count,
                "Some values had no leading digit and were excluded"
            );
        }

        Ok(AnalysisResult {
            column: self.column.clone(),
            statistic,
            conformity,
            digit_counts: state.digit_counts,
            observed,
            expected: EXPECTED_DISTRIBUTION,
            acceptable_range: AcceptableRange::benford(),
            total,
            excluded: state.excluded_count,
        })
    }

    fn name(&self) -> &str {
        "benford"
    }

    fn description(&self) -> &str {
        "Conformity of leading-digit frequencies to Benford's Law"
    }

    fn metric_key(&self) -> String {
        match &self.column {
            Some(column) => format!("benford.{column}"),
            None => "benford".to_string(),
        }
    }

    fn columns(&self) -> Vec<&str> {
        self.column.as_deref().into_iter().collect()
    }
}

/// Computes the discrepancy statistic of observed frequencies against Benford's Law.
///
/// `d = sqrt( Σ (observed_i - expected_i)² / (Σ expected_i)² )`
///
/// The normalisation by the squared sum of expected frequencies is kept as is;
/// thresholds in [`Conformity::classify`] are calibrated against it.
pub fn discrepancy_statistic(observed: &[f64; DIGIT_COUNT]) -> f64 {
    let squared_deviation: f64 = observed
        .iter()
        .zip(EXPECTED_DISTRIBUTION.iter())
        .map(|(o, e)| (o - e).powi(2))
        .sum();
    let expected_sum: f64 = EXPECTED_DISTRIBUTION.iter().sum();
    (squared_deviation / expected_sum.powi(2)).sqrt()
}

/// Runs a Benford analysis over an unnamed column.
///
/// Shorthand for `BenfordAnalyzer::new().analyze(values)`.
pub fn analyze(values: &[RawValue]) -> AnalyzerResult<AnalysisResult> {
    BenfordAnalyzer::new().analyze(values)
}
