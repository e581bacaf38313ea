//! Chart data and result formatting.
//!
//! An [`AnalysisResult`] is turned into [`ChartData`]: a renderer-agnostic
//! description of the observed-vs-expected chart (bars for observed
//! frequencies, a line for Benford's expected frequencies and a shaded
//! acceptable range band). Producing an image is left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use benford_guard::analyzers::{analyze, RawValue};
//! use benford_guard::formatters::{JsonFormatter, ResultFormatter};
//!
//! let values: Vec<RawValue> = (1..=500).map(RawValue::from).collect();
//! let result = analyze(&values).unwrap();
//!
//! let json = JsonFormatter::new().format(&result).unwrap();
//! assert!(json.contains("\"Acceptable Range\""));
//! ```

use serde::{Deserialize, Serialize};

use crate::analyzers::{AnalysisResult, Conformity, DIGIT_COUNT};
use crate::error::Result;

/// Configuration options for chart data and formatters.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Include the acceptable range band series
    pub include_band: bool,
    /// Include the full interpretation sentence
    pub include_description: bool,
    /// Scale frequencies to percentages (0-100) instead of fractions
    pub as_percentages: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            include_band: true,
            include_description: true,
            as_percentages: false,
        }
    }
}

impl FormatterConfig {
    /// Creates a minimal configuration: bars and expected line only.
    pub fn minimal() -> Self {
        Self {
            include_band: false,
            include_description: false,
            as_percentages: false,
        }
    }

    /// Creates a detailed configuration showing everything.
    pub fn detailed() -> Self {
        Self::default()
    }

    /// Sets whether to include the acceptable range band.
    pub fn with_band(mut self, include: bool) -> Self {
        self.include_band = include;
        self
    }

    /// Sets whether to include the interpretation sentence.
    pub fn with_description(mut self, include: bool) -> Self {
        self.include_description = include;
        self
    }

    /// Sets whether to express frequencies as percentages.
    pub fn with_percentages(mut self, enabled: bool) -> Self {
        self.as_percentages = enabled;
        self
    }
}

/// One series of the observed-vs-expected chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSeries {
    /// Bars, one per digit.
    Bar {
        label: String,
        color: String,
        values: Vec<f64>,
    },
    /// A line with point markers.
    Line {
        label: String,
        color: String,
        marker: String,
        values: Vec<f64>,
    },
    /// A filled area between two curves.
    Band {
        label: String,
        color: String,
        alpha: f64,
        low: Vec<f64>,
        high: Vec<f64>,
    },
}

impl ChartSeries {
    /// The legend label of the series.
    pub fn label(&self) -> &str {
        match self {
            ChartSeries::Bar { label, .. }
            | ChartSeries::Line { label, .. }
            | ChartSeries::Band { label, .. } => label,
        }
    }
}

/// Axis description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAxis {
    pub label: String,
    /// Inclusive display range, when fixed.
    pub range: Option<(f64, f64)>,
}

/// Everything a renderer needs to draw the observed-vs-expected chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub x_axis: ChartAxis,
    pub y_axis: ChartAxis,
    /// Relative padding around the plotted data.
    pub margin: f64,
    /// X positions: the digits 1 through 9.
    pub categories: Vec<u8>,
    pub series: Vec<ChartSeries>,
    pub column: Option<String>,
    pub statistic: f64,
    pub conformity: Conformity,
    pub interpretation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total: u64,
    pub excluded: u64,
}

impl ChartData {
    /// Derives chart data from an analysis result.
    pub fn from_result(result: &AnalysisResult, config: &FormatterConfig) -> Self {
        let scale = if config.as_percentages { 100.0 } else { 1.0 };
        let scaled = |values: &[f64; DIGIT_COUNT]| -> Vec<f64> {
            values.iter().map(|v| v * scale).collect()
        };

        let mut series = vec![
            ChartSeries::Bar {
                label: "Observed".to_string(),
                color: "skyblue".to_string(),
                values: scaled(&result.observed),
            },
            ChartSeries::Line {
                label: "Benford".to_string(),
                color: "blue".to_string(),
                marker: "circle".to_string(),
                values: scaled(&result.expected),
            },
        ];
        if config.include_band {
            series.push(ChartSeries::Band {
                label: "Acceptable Range".to_string(),
                color: "lightcoral".to_string(),
                alpha: 0.3,
                low: scaled(&result.acceptable_range.low),
                high: scaled(&result.acceptable_range.high),
            });
        }

        Self {
            title: "Expected vs Observed Frequencies".to_string(),
            x_axis: ChartAxis {
                label: "First Digit".to_string(),
                range: Some((0.5, 9.5)),
            },
            y_axis: ChartAxis {
                label: "Frequency (%)".to_string(),
                range: None,
            },
            margin: 0.05,
            categories: (1..=9).collect(),
            series,
            column: result.column.clone(),
            statistic: result.statistic,
            conformity: result.conformity,
            interpretation: result.interpretation().to_string(),
            description: config
                .include_description
                .then(|| result.conformity.description().to_string()),
            total: result.total,
            excluded: result.excluded,
        }
    }

    /// Finds a series by its legend label.
    pub fn series_by_label(&self, label: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.label() == label)
    }
}

/// Trait for rendering analysis results into an output representation.
///
/// # Examples
///
/// ```rust
/// use benford_guard::analyzers::AnalysisResult;
/// use benford_guard::formatters::ResultFormatter;
///
/// struct StatisticOnly;
///
/// impl ResultFormatter for StatisticOnly {
///     fn format(&self, result: &AnalysisResult) -> benford_guard::prelude::Result<String> {
///         Ok(format!("{:.4}", result.statistic))
///     }
/// }
/// ```
pub trait ResultFormatter {
    /// Formats an analysis result.
    fn format(&self, result: &AnalysisResult) -> Result<String>;

    /// Formats an analysis result with custom configuration.
    fn format_with_config(
        &self,
        result: &AnalysisResult,
        _config: &FormatterConfig,
    ) -> Result<String> {
        // Default implementation ignores config and uses standard format
        self.format(result)
    }
}

/// Formats analysis results as JSON chart data.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    config: FormatterConfig,
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default configuration.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            pretty: true,
        }
    }

    /// Creates a new JSON formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            pretty: true,
        }
    }

    /// Sets whether to use pretty-printed JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        self.format_with_config(result, &self.config)
    }

    fn format_with_config(
        &self,
        result: &AnalysisResult,
        config: &FormatterConfig,
    ) -> Result<String> {
        let chart = ChartData::from_result(result, config);
        let json = if self.pretty {
            serde_json::to_string_pretty(&chart)?
        } else {
            serde_json::to_string(&chart)?
        };
        Ok(json)
    }
}
