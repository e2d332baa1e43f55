//! # Amount Formatting
//!
//! Display strings for token and USD amounts. Formatting is read-only: the
//! strings produced here are never parsed back into the synchronizer.
//!
//! All rounding is floor rounding, matching the truncation policy of the
//! amount input, so a displayed amount never exceeds the real one.
//!
//! ## Functions
//!
//! - [`prettify_number`] - Abbreviated token or USD amount
//! - [`format_number`] - Thousands separators with a fixed number of decimals
//! - [`format_percentage`] - Percentage label such as `(0.5%)`

use lib_core::Decimal;

/// Abbreviate a canonical decimal string for display.
///
/// Token amounts (`usd = false`):
///
/// | value | output |
/// |-------|--------|
/// | `≤ 0` or not a number | `0` |
/// | `< 0.000001` | `< 0.000001` |
/// | `< 2` | up to 6 decimals |
/// | `< 1,000` | up to 2 decimals |
/// | `< 1,000,000` | integer with separators |
/// | larger | 2 decimals with `m`, `b` or `t` suffix |
///
/// USD amounts (`usd = true`):
///
/// | value | output |
/// |-------|--------|
/// | `≤ 0` or not a number | `$0.00` |
/// | `< 0.01` | `< $0.01` |
/// | `≤ 100` | `$` with 2 decimals |
/// | larger | `$` integer with separators |
///
/// ```rust
/// use terminal::ui::format::prettify_number;
///
/// assert_eq!(prettify_number("1234567.891", false), "1.23m");
/// assert_eq!(prettify_number("16.5", true), "$16.50");
/// assert_eq!(prettify_number("", false), "0");
/// ```
pub fn prettify_number(value: &str, usd: bool) -> String {
    let number = match Decimal::parse(value) {
        Ok(number) if !number.is_negative() && !number.is_zero() => number,
        _ => return if usd { "$0.00" } else { "0" }.to_string(),
    };

    if usd {
        prettify_usd(&number)
    } else {
        prettify_amount(&number)
    }
}

fn prettify_usd(number: &Decimal) -> String {
    if number.truncate(2).is_zero() {
        return "< $0.01".to_string();
    }
    if number > &Decimal::from(100u64) {
        return format!("${}", group_thousands(&number.integer_digits()));
    }
    format!("${}", format_number(number, 2))
}

fn prettify_amount(number: &Decimal) -> String {
    if number.truncate(6).is_zero() {
        return "< 0.000001".to_string();
    }
    if number < &Decimal::from(2u64) {
        return number.truncate(6).to_canonical();
    }
    if number < &Decimal::from(1_000u64) {
        return group_canonical(&number.truncate(2));
    }
    if number < &Decimal::from(1_000_000u64) {
        return group_thousands(&number.integer_digits());
    }

    const MAGNITUDES: [(u64, &str); 3] = [
        (1_000_000_000_000, "t"),
        (1_000_000_000, "b"),
        (1_000_000, "m"),
    ];
    for (unit, suffix) in MAGNITUDES {
        let unit = Decimal::from(unit);
        if number >= &unit {
            if let Ok(scaled) = number.div(&unit) {
                return format!("{}{}", format_number(&scaled, 2), suffix);
            }
        }
    }
    group_thousands(&number.integer_digits())
}

/// Format a number with separators and exactly `decimals` fractional digits,
/// truncating extra digits (e.g. `1234567.899` → `"1,234,567.89"`).
///
/// ```rust
/// use lib_core::Decimal;
/// use terminal::ui::format::format_number;
///
/// let value = Decimal::parse("1234567.899").unwrap();
/// assert_eq!(format_number(&value, 2), "1,234,567.89");
/// assert_eq!(format_number(&Decimal::from(100u64), 2), "100.00");
/// ```
pub fn format_number(value: &Decimal, decimals: u32) -> String {
    let canonical = value.truncate(decimals).to_canonical();
    let (integer_part, decimal_part) = split_canonical(&canonical);

    let integer_with_commas = group_thousands(integer_part);
    if decimals == 0 {
        return integer_with_commas;
    }

    format!(
        "{}.{:0<width$}",
        integer_with_commas,
        decimal_part,
        width = decimals as usize
    )
}

/// Format a percentage value as a parenthesised label.
pub fn format_percentage(pct: f64) -> String {
    format!("({}%)", pct)
}

fn group_canonical(value: &Decimal) -> String {
    let canonical = value.to_canonical();
    let (integer_part, decimal_part) = split_canonical(&canonical);
    if decimal_part.is_empty() {
        group_thousands(integer_part)
    } else {
        format!("{}.{}", group_thousands(integer_part), decimal_part)
    }
}

fn split_canonical(canonical: &str) -> (&str, &str) {
    canonical.split_once('.').unwrap_or((canonical, ""))
}

/// Insert a comma every three digits of an integer digit string.
fn group_thousands(integer_part: &str) -> String {
    let mut result = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_amount_tiers() {
        assert_eq!(prettify_number("0.0000001", false), "< 0.000001");
        assert_eq!(prettify_number("1.123456789", false), "1.123456");
        assert_eq!(prettify_number("1.5", false), "1.5");
        assert_eq!(prettify_number("999.999", false), "999.99");
        assert_eq!(prettify_number("12.00", false), "12");
        assert_eq!(prettify_number("123456.78", false), "123,456");
        assert_eq!(prettify_number("1234567.891", false), "1.23m");
        assert_eq!(prettify_number("2500000000", false), "2.50b");
        assert_eq!(prettify_number("7890000000000", false), "7.89t");
    }

    #[test]
    fn test_prettify_usd_tiers() {
        assert_eq!(prettify_number("0.001", true), "< $0.01");
        assert_eq!(prettify_number("0.019", true), "$0.01");
        assert_eq!(prettify_number("16.5", true), "$16.50");
        assert_eq!(prettify_number("100", true), "$100.00");
        assert_eq!(prettify_number("12345.99", true), "$12,345");
    }

    #[test]
    fn test_prettify_never_fails() {
        assert_eq!(prettify_number("", false), "0");
        assert_eq!(prettify_number(".", true), "$0.00");
        assert_eq!(prettify_number("0", false), "0");
        assert_eq!(prettify_number("0", true), "$0.00");
        assert_eq!(prettify_number("-3", false), "0");
    }

    #[test]
    fn test_format_number() {
        let value = Decimal::parse("1234567.89").unwrap();
        assert_eq!(format_number(&value, 2), "1,234,567.89");
        assert_eq!(format_number(&Decimal::from(100u64), 2), "100.00");
        assert_eq!(format_number(&Decimal::parse("0.5").unwrap(), 0), "0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.5), "(0.5%)");
    }
}
