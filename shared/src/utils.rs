//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the dialog's default lengths
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert_eq!(format_address(address, 4, 4), "0x52...9EE7");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Addresses that are not longer than `prefix_len + suffix_len`, or that are
/// not plain ASCII, are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(addr, 6, 6), "0x5290...169EE7");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if !address.is_ascii() || address_len <= prefix_len + suffix_len {
        return address.to_string();
    }

    // ASCII-only, so byte offsets are char boundaries
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address keeping the `0x` prefix plus four characters on each side.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(truncate_address(addr), "0x5290...9EE7");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
        assert_eq!(format_address(addr, 4, 4), "0x52...9EE7");
        assert_eq!(format_address("0x1234", 4, 4), "0x1234");
    }

    #[test]
    fn test_format_address_non_ascii_untouched() {
        assert_eq!(format_address("ÄÖÜäöüßÄÖÜäöü", 2, 2), "ÄÖÜäöüßÄÖÜäöü");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
        assert_eq!(truncate_address(addr), "0x5290...9EE7");
    }
}
