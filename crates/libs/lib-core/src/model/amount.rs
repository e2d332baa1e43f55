//! # Amount Pair and Input Mode

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which unit the visible input field represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMode {
    /// The user types token quantities.
    #[default]
    TokenUnit,
    /// The user types USD amounts.
    FiatUnit,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::TokenUnit => InputMode::FiatUnit,
            InputMode::FiatUnit => InputMode::TokenUnit,
        }
    }

    pub fn is_fiat(self) -> bool {
        self == InputMode::FiatUnit
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::TokenUnit => f.write_str("token"),
            InputMode::FiatUnit => f.write_str("fiat"),
        }
    }
}

/// Token amount and its USD equivalent as canonical decimal strings.
///
/// An empty string means "no value", which is distinct from `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmountPair {
    pub token_amount: String,
    pub fiat_amount: String,
}

impl AmountPair {
    pub fn new(token_amount: impl Into<String>, fiat_amount: impl Into<String>) -> Self {
        Self {
            token_amount: token_amount.into(),
            fiat_amount: fiat_amount.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Both sides are blank.
    pub fn is_empty(&self) -> bool {
        self.token_amount.is_empty() && self.fiat_amount.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_twice_is_identity() {
        assert_eq!(InputMode::TokenUnit.toggled().toggled(), InputMode::TokenUnit);
        assert!(InputMode::TokenUnit.toggled().is_fiat());
    }

    #[test]
    fn test_empty_pair() {
        assert!(AmountPair::empty().is_empty());
        assert!(!AmountPair::new("0", "").is_empty());
    }
}
