//! Deterministic datasets for exercising the analyzers.
//!
//! No randomness is involved, so every fixture produces the same values on
//! every run and results can be compared exactly.

use crate::analyzers::{RawValue, EXPECTED_DISTRIBUTION};

/// Log-uniform values spanning three decades (1 to 1000).
///
/// Log-uniform data follows Benford's Law, so the statistic for this sample
/// is well below the high conformity threshold once `n` is in the thousands.
pub fn benford_sample(n: usize) -> Vec<RawValue> {
    let n_f = n as f64;
    (0..n)
        .map(|i| RawValue::Float(10f64.powf(3.0 * (i as f64 + 0.5) / n_f)))
        .collect()
}

/// Exactly 1000 integers whose leading digits match [`EXPECTED_DISTRIBUTION`].
///
/// Digit `d` appears `EXPECTED_DISTRIBUTION[d - 1] * 1000` times.
pub fn exact_benford_values() -> Vec<RawValue> {
    let mut values = Vec::with_capacity(1000);
    for (i, expected) in EXPECTED_DISTRIBUTION.iter().enumerate() {
        let digit = i as i64 + 1;
        let count = (expected * 1000.0).round() as i64;
        values.extend((0..count).map(|k| RawValue::Integer(digit * 100 + k % 100)));
    }
    values
}

/// `n` values whose leading digits cycle through 1..=9.
pub fn uniform_sample(n: usize) -> Vec<RawValue> {
    (0..n)
        .map(|i| RawValue::Integer((i % 9) as i64 + 1))
        .collect()
}

/// `n` values that all start with `digit`.
pub fn single_digit_sample(digit: u8, n: usize) -> Vec<RawValue> {
    let base = i64::from(digit) * 1000;
    (0..n).map(|i| RawValue::Integer(base + (i % 1000) as i64)).collect()
}

/// A column with the kinds of cells a CSV export tends to contain.
///
/// Yields 6 usable values (leading digits 1, 1, 2, 3, 4, 9) and 6 exclusions.
pub fn messy_column() -> Vec<RawValue> {
    vec![
        RawValue::Integer(1024),
        RawValue::Float(0.0017),
        RawValue::Text("2.5.1".to_string()),
        RawValue::Text(" 271.8 ".to_string()),
        RawValue::Missing,
        RawValue::Integer(0),
        RawValue::Text(String::new()),
        RawValue::Text("-31".to_string()),
        RawValue::Float(f64::NAN),
        RawValue::Text("4e3".to_string()),
        RawValue::Text("n/a".to_string()),
        RawValue::Integer(-9),
    ]
}
