//! Types for Benford analysis inputs, intermediate counts and results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of possible leading digits (1 through 9).
pub const DIGIT_COUNT: usize = 9;

/// Expected leading-digit frequencies under Benford's Law, for digits 1..=9.
///
/// These are the rounded values of `log10(1 + 1/d)` and are used verbatim.
pub const EXPECTED_DISTRIBUTION: [f64; DIGIT_COUNT] = [
    0.301, 0.176, 0.125, 0.097, 0.079, 0.067, 0.058, 0.051, 0.046,
];

/// Statistics strictly below this value indicate high conformity.
pub const HIGH_CONFORMITY_THRESHOLD: f64 = 0.01;

/// Statistics strictly below this value (and not below
/// [`HIGH_CONFORMITY_THRESHOLD`]) are acceptable with minor discrepancies.
pub const SIGNIFICANT_DEVIATION_THRESHOLD: f64 = 0.2;

/// Relative half-width of the acceptable range band around each expected frequency.
pub const ACCEPTABLE_RANGE_TOLERANCE: f64 = 0.2;

/// One observation taken from the analysed column.
///
/// Columns coming out of a CSV reader or a dataframe are rarely uniformly
/// typed, so integers, floats, numeric-looking text and nulls are all accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// An integer cell.
    Integer(i64),
    /// A floating point cell.
    Float(f64),
    /// A textual cell that should hold a number.
    Text(String),
    /// A null cell.
    Missing,
}

impl RawValue {
    /// Returns true if the cell is null.
    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(v) => write!(f, "{v}"),
            RawValue::Float(v) => write!(f, "{v}"),
            RawValue::Text(s) => write!(f, "{s}"),
            RawValue::Missing => write!(f, "<missing>"),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    RawValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                /// Values above `i64::MAX` are kept as their exact decimal text.
                fn from(value: $ty) -> Self {
                    i64::try_from(value)
                        .map_or_else(|_| RawValue::Text(value.to_string()), RawValue::Integer)
                }
            }
        )*
    };
}

impl_from_wide_integer!(u64, usize, i128, u128, isize);

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

/// A leading digit, guaranteed to be in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LeadingDigit(u8);

impl LeadingDigit {
    /// Creates a leading digit, returning `None` outside `1..=9`.
    pub fn new(digit: u8) -> Option<Self> {
        (1..=9).contains(&digit).then_some(Self(digit))
    }

    /// Returns the digit value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based slot of this digit in a [`DigitCount`].
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for LeadingDigit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a leading digit"))
    }
}

impl From<LeadingDigit> for u8 {
    fn from(digit: LeadingDigit) -> Self {
        digit.0
    }
}

impl fmt::Display for LeadingDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Occurrence counts per leading digit; slot `i` counts digit `i + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitCount([u64; DIGIT_COUNT]);

impl DigitCount {
    /// Creates an empty count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a count from raw per-digit values.
    pub fn from_counts(counts: [u64; DIGIT_COUNT]) -> Self {
        Self(counts)
    }

    /// Records one occurrence of `digit`.
    pub fn record(&mut self, digit: LeadingDigit) {
        self.0[digit.index()] += 1;
    }

    /// Returns the number of occurrences of `digit`.
    pub fn get(&self, digit: LeadingDigit) -> u64 {
        self.0[digit.index()]
    }

    /// Returns the total number of recorded occurrences.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Returns the raw per-digit counts.
    pub fn as_array(&self) -> &[u64; DIGIT_COUNT] {
        &self.0
    }

    /// Adds two counts slot by slot, returning `None` on overflow.
    pub fn checked_add(&self, other: &DigitCount) -> Option<DigitCount> {
        let mut sum = self.0;
        for (slot, extra) in sum.iter_mut().zip(other.0.iter()) {
            *slot = slot.checked_add(*extra)?;
        }
        Some(DigitCount(sum))
    }

    /// Returns the relative frequency of each digit, or `None` when nothing was recorded.
    pub fn frequencies(&self) -> Option<[f64; DIGIT_COUNT]> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let total = total as f64;
        Some(self.0.map(|count| count as f64 / total))
    }
}

/// How closely a column follows Benford's Law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conformity {
    /// `d < 0.01`.
    High,
    /// `0.01 <= d < 0.2`.
    Acceptable,
    /// `d >= 0.2`.
    Significant,
}

impl Conformity {
    /// Classifies a discrepancy statistic.
    ///
    /// Values sitting exactly on a threshold fall into the weaker tier.
    pub fn classify(statistic: f64) -> Self {
        if statistic < HIGH_CONFORMITY_THRESHOLD {
            Conformity::High
        } else if statistic < SIGNIFICANT_DEVIATION_THRESHOLD {
            Conformity::Acceptable
        } else {
            Conformity::Significant
        }
    }

    /// Short interpretation label.
    pub fn label(self) -> &'static str {
        match self {
            Conformity::High => "high conformity",
            Conformity::Acceptable => "acceptable with minor discrepancies",
            Conformity::Significant => "significant deviation",
        }
    }

    /// Full sentence suitable for showing next to the chart.
    pub fn description(self) -> &'static str {
        match self {
            Conformity::High => {
                "The observed frequencies closely match the expected frequencies based on \
                 Benford's Law. This indicates a high level of conformity to Benford's Law."
            }
            Conformity::Acceptable => {
                "The observed frequencies deviate slightly from Benford's Law but still within \
                 an acceptable range. It suggests a reasonable level of conformity to Benford's \
                 Law with minor discrepancies."
            }
            Conformity::Significant => {
                "The observed frequencies deviate significantly from Benford's Law. It indicates \
                 a notable deviation and divergence from the expected frequencies."
            }
        }
    }
}

impl fmt::Display for Conformity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower and upper bound per digit of the acceptable range band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptableRange {
    /// `expected * (1 - tolerance)` per digit.
    pub low: [f64; DIGIT_COUNT],
    /// `expected * (1 + tolerance)` per digit.
    pub high: [f64; DIGIT_COUNT],
}

impl AcceptableRange {
    /// Builds the band around [`EXPECTED_DISTRIBUTION`].
    pub fn benford() -> Self {
        Self {
            low: EXPECTED_DISTRIBUTION.map(|e| e * (1.0 - ACCEPTABLE_RANGE_TOLERANCE)),
            high: EXPECTED_DISTRIBUTION.map(|e| e * (1.0 + ACCEPTABLE_RANGE_TOLERANCE)),
        }
    }

    /// Returns true if `frequency` lies inside the band for `digit`.
    pub fn contains(&self, digit: LeadingDigit, frequency: f64) -> bool {
        let i = digit.index();
        self.low[i] <= frequency && frequency <= self.high[i]
    }
}

/// The outcome of one Benford analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Column the values came from, when the caller named it.
    pub column: Option<String>,
    /// Discrepancy statistic `d`.
    pub statistic: f64,
    /// Conformity tier derived from `statistic`.
    pub conformity: Conformity,
    /// Raw per-digit counts.
    pub digit_counts: DigitCount,
    /// Observed leading-digit frequencies.
    pub observed: [f64; DIGIT_COUNT],
    /// Expected leading-digit frequencies.
    pub expected: [f64; DIGIT_COUNT],
    /// Acceptable range band around `expected`.
    pub acceptable_range: AcceptableRange,
    /// Number of values that contributed a leading digit.
    pub total: u64,
    /// Number of values that were skipped as invalid.
    pub excluded: u64,
}

impl AnalysisResult {
    /// The interpretation label for this result.
    pub fn interpretation(&self) -> &'static str {
        self.conformity.label()
    }

    /// Returns true if some values were excluded; callers should surface this as a warning.
    pub fn has_exclusions(&self) -> bool {
        self.excluded > 0
    }

    /// Digits whose observed frequency falls outside the acceptable range band.
    pub fn digits_outside_range(&self) -> Vec<LeadingDigit> {
        (1..=9u8)
            .filter_map(LeadingDigit::new)
            .filter(|&d| !self.acceptable_range.contains(d, self.observed[d.index()]))
            .collect()
    }
}
