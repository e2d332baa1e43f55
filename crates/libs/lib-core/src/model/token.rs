//! # Token Records
//!
//! Tokens are owned by the token-data collaborator. The amount-input core only
//! reads them; price and balance updates arrive as fresh records.
//!
//! ## Wire Format
//!
//! Token lists arrive as JSON with camelCase keys and decimal values encoded
//! as strings:
//!
//! ```json
//! {
//!   "address": "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
//!   "symbol": "ETH",
//!   "name": "Ether",
//!   "decimals": 18,
//!   "usdPrice": "3120.55",
//!   "balance": "1.5",
//!   "logoURI": "https://example.org/eth.svg"
//! }
//! ```

use crate::decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tradable token with optional live price and wallet balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub address: String,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    /// Fractional digits the token supports on chain (`uint8` in ERC-20).
    pub decimals: u8,
    /// USD price, `None` while unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_price: Option<Decimal>,
    /// Wallet balance, `None` while no wallet is connected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(default, rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl Token {
    /// Create a token without price or balance.
    pub fn new(address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            name: String::new(),
            decimals,
            usd_price: None,
            balance: None,
            logo_uri: None,
        }
    }

    pub fn with_price(mut self, usd_price: Decimal) -> Self {
        self.usd_price = Some(usd_price);
        self
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Some(balance);
        self
    }

    /// USD value of the balance.
    ///
    /// An unknown price counts as zero, so the value is known whenever the
    /// balance is.
    pub fn balance_usd(&self) -> Option<Decimal> {
        let balance = self.balance.as_ref()?;
        Some(match &self.usd_price {
            Some(price) => balance.mul(price),
            None => Decimal::zero(),
        })
    }

    /// Whether `address` identifies this token (addresses compare case-insensitively).
    pub fn has_address(&self, address: &str) -> bool {
        self.address.eq_ignore_ascii_case(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn test_balance_usd() {
        let token = Token::new("0x1", "BNT", 18)
            .with_price(dec("3"))
            .with_balance(dec("5.5"));
        assert_eq!(token.balance_usd(), Some(dec("16.5")));
    }

    #[test]
    fn test_balance_usd_without_price_is_zero() {
        let token = Token::new("0x1", "BNT", 18).with_balance(dec("5.5"));
        assert_eq!(token.balance_usd(), Some(Decimal::zero()));
    }

    #[test]
    fn test_balance_usd_without_balance_is_unknown() {
        let token = Token::new("0x1", "BNT", 18).with_price(dec("3"));
        assert_eq!(token.balance_usd(), None);
    }

    #[test]
    fn test_deserialize_token_list_entry() {
        let json = r#"{
            "address": "0xABC",
            "symbol": "ETH",
            "decimals": 18,
            "usdPrice": "3120.55",
            "balance": null,
            "logoURI": "eth.svg"
        }"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.symbol, "ETH");
        assert_eq!(token.usd_price, Some(dec("3120.55")));
        assert_eq!(token.balance, None);
        assert_eq!(token.logo_uri.as_deref(), Some("eth.svg"));
        assert!(token.has_address("0xabc"));
    }

    #[test]
    fn test_decimals_above_u8_are_rejected() {
        let json = r#"{"address": "0xABC", "symbol": "BAD", "decimals": 5000000}"#;
        assert!(serde_json::from_str::<Token>(json).is_err());

        let json = r#"{"address": "0xABC", "symbol": "MAX", "decimals": 255}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.decimals, u8::MAX);
    }
}
