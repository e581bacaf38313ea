//! Leading digit extraction.
//!
//! The leading digit of a number is the first non-zero digit of its decimal
//! representation. Sign and magnitude are ignored, so `-55`, `5.5` and
//! `0.0055` all lead with `5`.

use std::borrow::Cow;

use super::errors::InvalidValueError;
use super::types::{LeadingDigit, RawValue};
use crate::logging::truncate_field;

/// Longest text fragment kept inside a [`InvalidValueError::NotNumeric`].
const MAX_REPORTED_TEXT: usize = 64;

/// Extracts the leading digit of a raw value.
///
/// # Errors
///
/// Returns an [`InvalidValueError`] when the value is null, blank, zero,
/// not finite, or text that does not parse as a number. Text may group
/// digits with `,` or `_`.
///
/// # Examples
///
/// ```rust
/// use benford_guard::analyzers::{leading_digit, RawValue};
///
/// assert_eq!(leading_digit(&RawValue::from(789)).unwrap().get(), 7);
/// assert_eq!(leading_digit(&RawValue::from(0.0456)).unwrap().get(), 4);
/// assert_eq!(leading_digit(&RawValue::from(-55)).unwrap().get(), 5);
/// assert!(leading_digit(&RawValue::from(0)).is_err());
/// ```
pub fn leading_digit(value: &RawValue) -> Result<LeadingDigit, InvalidValueError> {
    match value {
        RawValue::Integer(0) => Err(InvalidValueError::Zero),
        // Exact decimal text; going through f64 could round 999..9 up to 1e19.
        RawValue::Integer(v) => first_significant_digit(&v.unsigned_abs().to_string()),
        RawValue::Float(v) => {
            if !v.is_finite() {
                Err(InvalidValueError::NonFinite)
            } else if *v == 0.0 {
                Err(InvalidValueError::Zero)
            } else {
                first_significant_digit(&format!("{:e}", v.abs()))
            }
        }
        RawValue::Text(text) => leading_digit_of_text(text),
        RawValue::Missing => Err(InvalidValueError::Missing),
    }
}

fn leading_digit_of_text(text: &str) -> Result<LeadingDigit, InvalidValueError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidValueError::Empty);
    }

    let number: Cow<'_, str> = if trimmed.parse::<f64>().is_ok() {
        Cow::Borrowed(trimmed)
    } else {
        strip_digit_separators(trimmed)
            .filter(|stripped| stripped.parse::<f64>().is_ok())
            .map(Cow::Owned)
            .ok_or_else(|| {
                InvalidValueError::NotNumeric(truncate_field(trimmed, MAX_REPORTED_TEXT))
            })?
    };

    // Parses but holds no digit at all: "inf", "NaN", "infinity".
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return Err(InvalidValueError::NonFinite);
    }

    // Scan the text rather than the parsed f64: long integers keep full
    // precision, and "1e999" or "1e-400" still lead with 1 although the
    // parsed value overflows or underflows.
    first_significant_digit(&number)
}

/// Removes `,` and `_` sitting between two ASCII digits ("1,204", "2_310_000").
///
/// Returns `None` when there is nothing to remove.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    let mut removed = false;
    for (i, c) in text.char_indices() {
        if matches!(c, ',' | '_') {
            let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
            let before_digit = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            if after_digit && before_digit {
                removed = true;
                continue;
            }
        }
        stripped.push(c);
    }
    removed.then_some(stripped)
}

/// Finds the first non-zero digit of a mantissa, stopping at any exponent marker.
fn first_significant_digit(repr: &str) -> Result<LeadingDigit, InvalidValueError> {
    repr.bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .find(|b| matches!(b, b'1'..=b'9'))
        .and_then(|b| LeadingDigit::new(b - b'0'))
        .ok_or(InvalidValueError::Zero)
}
