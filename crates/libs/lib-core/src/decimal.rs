//! # Decimal Engine
//!
//! Arbitrary-precision decimal values for token and fiat amounts.
//!
//! [`Decimal`] wraps [`BigDecimal`] so amounts never pass through binary
//! floating point. Arithmetic keeps full precision; the only lossy operation is
//! [`Decimal::truncate`], which drops fractional digits toward zero and is
//! applied at the input/display boundary only.
//!
//! ## Canonical Form
//!
//! [`Decimal::to_canonical`] (and `Display`) render a plain decimal string:
//! no exponent, no trailing fractional zeros, no trailing point.
//!
//! ```rust
//! use lib_core::decimal::Decimal;
//!
//! let price = Decimal::parse("2.0").unwrap();
//! let fiat = Decimal::parse("10").unwrap().mul(&price);
//! assert_eq!(fiat.to_canonical(), "20");
//!
//! let third = Decimal::parse("1").unwrap().div(&Decimal::parse("3").unwrap()).unwrap();
//! assert_eq!(third.truncate(4).to_canonical(), "0.3333");
//! ```

use crate::error::{AppError, Result};
use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arbitrary-precision decimal number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// The value zero.
    pub fn zero() -> Self {
        Decimal(BigDecimal::from(0))
    }

    /// Parse a plain decimal string.
    ///
    /// Accepts an optional leading `-`, digits, and at most one `.`; either side
    /// of the point may be empty (`"5."`, `".5"`) but not both. Exponents,
    /// `NaN`, `Infinity` and whitespace are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDecimal`] when `text` does not follow that grammar.
    pub fn parse(text: &str) -> Result<Self> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(AppError::InvalidDecimal(text.to_string()));
        }

        let int_part = if int_part.is_empty() { "0" } else { int_part };
        let normalized = match (negative, frac_part.is_empty()) {
            (false, true) => int_part.to_string(),
            (false, false) => format!("{}.{}", int_part, frac_part),
            (true, true) => format!("-{}", int_part),
            (true, false) => format!("-{}.{}", int_part, frac_part),
        };

        BigDecimal::from_str(&normalized)
            .map(Decimal)
            .map_err(|_| AppError::InvalidDecimal(text.to_string()))
    }

    /// Exact product.
    pub fn mul(&self, other: &Decimal) -> Decimal {
        Decimal(&self.0 * &other.0)
    }

    /// Quotient at the engine's full working precision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UndefinedRate`] when `divisor` is zero.
    pub fn div(&self, divisor: &Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(AppError::UndefinedRate);
        }
        Ok(Decimal(&self.0 / &divisor.0))
    }

    /// Drop every fractional digit past `digits`, rounding toward zero.
    pub fn truncate(&self, digits: u32) -> Decimal {
        Decimal(self.0.with_scale_round(i64::from(digits), RoundingMode::Down))
    }

    /// Whether the value equals zero (at any scale).
    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }

    /// Whether the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::from(0)
    }

    /// Plain decimal string without exponent or trailing zeros.
    pub fn to_canonical(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        self.0.normalized().to_plain_string()
    }

    /// Digits before the decimal point, without sign.
    pub fn integer_digits(&self) -> String {
        let canonical = self.truncate(0).to_canonical();
        canonical.trim_start_matches('-').to_string()
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal(BigDecimal::from(value))
    }
}

impl FromStr for Decimal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Decimal::parse(s)
    }
}

impl TryFrom<String> for Decimal {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        Decimal::parse(value.trim())
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_canonical()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}
