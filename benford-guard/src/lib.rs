//! # benford-guard - Benford's Law analysis for Rust
//!
//! benford-guard tests whether the leading digits of a numeric column follow
//! Benford's Law, the distribution under which digit `d` leads with
//! probability close to `log10(1 + 1/d)`. Large departures from it are a
//! classic red flag for fabricated or manipulated figures.
//!
//! ## Quick Start
//!
//! ```rust
//! use benford_guard::prelude::*;
//!
//! # fn example() -> benford_guard::error::Result<()> {
//! let column: Vec<RawValue> = vec![
//!     1832.into(), 215.40.into(), "1,204".into(), 0.into(), 97.into(), "3.1e4".into(),
//! ];
//!
//! let result = BenfordAnalyzer::new().for_column("amount").analyze(&column)?;
//!
//! println!("d = {:.4}: {}", result.statistic, result.interpretation());
//! if result.has_exclusions() {
//!     println!("warning: {} values had no leading digit", result.excluded);
//! }
//!
//! // Data for an observed-vs-expected chart with an acceptable range band.
//! let chart_json = JsonFormatter::new().format(&result)?;
//! # let _ = chart_json;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## How a column is analysed
//!
//! 1. Each value is reduced to its leading digit (the first non-zero digit,
//!    ignoring sign). Nulls, zeros, non-finite floats and non-numeric text
//!    have no leading digit; they are excluded and counted, never fatal.
//! 2. Digit counts become observed frequencies.
//! 3. The discrepancy statistic `d` compares them with the expected
//!    frequencies `[0.301, 0.176, 0.125, 0.097, 0.079, 0.067, 0.058, 0.051, 0.046]`.
//! 4. `d < 0.01` is high conformity, `d < 0.2` acceptable with minor
//!    discrepancies, anything else a significant deviation.
//! 5. A ±20% acceptable range band is derived around each expected frequency.
//!
//! An analysis with no usable value fails with an empty input error instead
//! of producing an undefined statistic.
//!
//! ## Architecture
//!
//! - **`analyzers`**: digit extraction, the analyzer traits and the Benford analyzer
//! - **`formatters`**: chart data and JSON output
//! - **`logging`**: logging configuration and subscriber setup
//! - **`error`**: the crate error type
//!
//! The crate keeps no global state: every call works on the values it is
//! handed and returns an owned result, so concurrent analyses never interact.

pub mod analyzers;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_fixtures;
