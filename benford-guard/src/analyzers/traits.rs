//! Core analyzer traits.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::errors::AnalyzerResult;
use super::types::RawValue;

/// Core trait for analyzers that compute a metric from a column of values.
///
/// Computation is split in two: values are first folded into a small,
/// mergeable state, and the final metric is derived from that state. A column
/// delivered in chunks can therefore be folded chunk by chunk, merged, and
/// finalised once.
///
/// Analyzers hold configuration only. Every call works on its own local state,
/// so a single analyzer may be shared across threads.
pub trait Analyzer: Send + Sync + Debug {
    /// The state type for incremental computation.
    type State: AnalyzerState;

    /// The metric type produced by this analyzer.
    type Metric: Send + Sync + Debug;

    /// Folds `values` into a fresh state.
    fn compute_state_from_values(&self, values: &[RawValue]) -> Self::State;

    /// Computes the final metric from the accumulated state.
    fn compute_metric_from_state(&self, state: &Self::State) -> AnalyzerResult<Self::Metric>;

    /// Merges multiple states into a single state.
    fn merge_states(&self, states: Vec<Self::State>) -> AnalyzerResult<Self::State> {
        Self::State::merge(states)
    }

    /// Returns the name of this analyzer.
    fn name(&self) -> &str;

    /// Returns a description of what this analyzer computes.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the metric key for storing results.
    ///
    /// By default, this returns the analyzer name, but column-based
    /// analyzers should override this to include the column name.
    fn metric_key(&self) -> String {
        self.name().to_string()
    }

    /// Returns the column(s) this analyzer operates on, if any.
    fn columns(&self) -> Vec<&str> {
        vec![]
    }
}

/// Trait for analyzer state that supports incremental computation.
///
/// States must be serializable so partial results can be cached or shipped
/// between workers before merging.
pub trait AnalyzerState:
    Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>
{
    /// Merges multiple states into a single state.
    fn merge(states: Vec<Self>) -> AnalyzerResult<Self>
    where
        Self: Sized;

    /// Returns whether this state represents an empty computation.
    fn is_empty(&self) -> bool {
        false
    }
}
