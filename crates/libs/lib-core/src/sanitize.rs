//! # Input Sanitizer
//!
//! Live-typing filter that turns raw keyboard text into [`SanitizedText`].
//!
//! The filter never fails. Characters outside `[0-9.]` are dropped, only the
//! first decimal point survives, and an optional precision truncates the
//! fractional part. Empty input stays empty so "no input" can be told apart
//! from an explicit `"0"`.
//!
//! ```rust
//! use lib_core::sanitize::sanitize_number_input;
//!
//! assert_eq!(sanitize_number_input("~$1,234.5678", Some(2)).as_str(), "1234.56");
//! assert_eq!(sanitize_number_input("1.2.3", None).as_str(), "1.23");
//! assert_eq!(sanitize_number_input("", Some(6)).as_str(), "");
//! ```

use crate::decimal::Decimal;
use std::fmt;

/// A non-negative decimal string with at most one `.`, or the empty string.
///
/// Partial forms produced while typing (`"."`, `"5."`, `".5"`) are valid
/// sanitized text; [`SanitizedText::to_decimal`] reports whether the text is
/// already a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SanitizedText(String);

impl SanitizedText {
    /// The empty text.
    pub fn empty() -> Self {
        SanitizedText(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the text, `None` when it is empty or a bare `"."`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::parse(&self.0).ok()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SanitizedText> for String {
    fn from(value: SanitizedText) -> Self {
        value.0
    }
}

impl PartialEq<&str> for SanitizedText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Sanitize raw input text.
///
/// With `max_decimals = Some(n)` the fractional part is cut to `n` digits
/// without rounding; `Some(0)` also removes the decimal point.
pub fn sanitize_number_input(raw: &str, max_decimals: Option<u32>) -> SanitizedText {
    let mut int_part = String::with_capacity(raw.len());
    let mut frac_part = String::new();
    let mut seen_point = false;

    for ch in raw.chars() {
        match ch {
            '0'..='9' if seen_point => frac_part.push(ch),
            '0'..='9' => int_part.push(ch),
            '.' => seen_point = true,
            _ => {}
        }
    }

    if !seen_point {
        return SanitizedText(int_part);
    }

    match max_decimals {
        Some(0) => SanitizedText(int_part),
        Some(max) => {
            frac_part.truncate(max as usize);
            SanitizedText(format!("{}.{}", int_part, frac_part))
        }
        None => SanitizedText(format!("{}.{}", int_part, frac_part)),
    }
}

/// Render a computed value as sanitized text at `max_decimals` precision.
///
/// Negative values cannot come from typed input and sanitize to empty.
pub fn sanitize_decimal(value: &Decimal, max_decimals: u32) -> SanitizedText {
    if value.is_negative() {
        return SanitizedText::empty();
    }
    SanitizedText(value.truncate(max_decimals).to_canonical())
}
