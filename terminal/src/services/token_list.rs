//! # Token List
//!
//! Tokens offered by the token picker. The list is loaded once from JSON and
//! refreshed record by record as prices and balances arrive.

use crate::core::error::Result;
use lib_core::Token;

/// Ordered collection of tradable tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parse a JSON array of token records.
    pub fn from_json(json: &str) -> Result<Self> {
        let tokens: Vec<Token> = serde_json::from_str(json)?;
        tracing::debug!(count = tokens.len(), "token list loaded");
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn find(&self, address: &str) -> Option<&Token> {
        self.tokens.iter().find(|token| token.has_address(address))
    }

    /// Look a token up by address, or by symbol ignoring case.
    pub fn lookup(&self, key: &str) -> Option<&Token> {
        self.find(key).or_else(|| {
            self.tokens
                .iter()
                .find(|token| token.symbol.eq_ignore_ascii_case(key))
        })
    }

    /// Tokens for a picker: `excluded` addresses are dropped and the rest are
    /// matched against `query` by symbol or name, ignoring case.
    pub fn filtered(&self, excluded: &[String], query: &str) -> Vec<&Token> {
        let query = query.trim().to_lowercase();
        self.tokens
            .iter()
            .filter(|token| !excluded.iter().any(|address| token.has_address(address)))
            .filter(|token| {
                query.is_empty()
                    || token.symbol.to_lowercase().contains(&query)
                    || token.name.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Insert a token or replace the record with the same address.
    pub fn upsert(&mut self, token: Token) {
        match self.tokens.iter_mut().find(|t| t.has_address(&token.address)) {
            Some(existing) => *existing = token,
            None => self.tokens.push(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::{AppError, Decimal};

    const LIST: &str = r#"[
        {"address": "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE", "symbol": "ETH",
         "name": "Ether", "decimals": 18, "usdPrice": "3000"},
        {"address": "0x1F573D6Fb3F13d689FF844B4cE37794d79a7FF1C", "symbol": "BNT",
         "name": "Bancor Network Token", "decimals": 18, "usdPrice": "2.5", "balance": "10"},
        {"address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "symbol": "USDC",
         "name": "USD Coin", "decimals": 6}
    ]"#;

    #[test]
    fn test_from_json() {
        let list = TokenList::from_json(LIST).unwrap();
        assert_eq!(list.len(), 3);

        let bnt = list.lookup("bnt").unwrap();
        assert_eq!(bnt.usd_price, Decimal::parse("2.5").ok());
        assert_eq!(bnt.balance, Decimal::parse("10").ok());
        assert!(list.lookup("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").is_some());
    }

    #[test]
    fn test_from_json_rejects_bad_records() {
        let json = r#"[{"address": "0x1", "symbol": "X", "decimals": 18, "usdPrice": "1e5"}]"#;
        let err = TokenList::from_json(json).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_from_json_rejects_out_of_range_decimals() {
        let json = r#"[{"address": "0x1", "symbol": "X", "decimals": 5000000, "usdPrice": "3"}]"#;
        let err = TokenList::from_json(json).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    fn symbols(tokens: Vec<&Token>) -> Vec<&str> {
        tokens.iter().map(|t| t.symbol.as_str()).collect()
    }

    #[test]
    fn test_filtered_excludes_and_searches() {
        let list = TokenList::from_json(LIST).unwrap();
        let excluded = vec!["0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee".to_string()];

        assert_eq!(symbols(list.filtered(&excluded, "")), vec!["BNT", "USDC"]);
        assert_eq!(symbols(list.filtered(&[], "coin")), vec!["USDC"]);

        assert!(list.filtered(&excluded, "ether").is_empty());
    }

    #[test]
    fn test_upsert_replaces_by_address() {
        let mut list = TokenList::from_json(LIST).unwrap();
        let updated = Token::new("0x1f573d6fb3f13d689ff844b4ce37794d79a7ff1c", "BNT", 18)
            .with_price(Decimal::from(3u64));

        list.upsert(updated);
        list.upsert(Token::new("0x2", "NEW", 8));

        assert_eq!(list.len(), 4);
        assert_eq!(list.lookup("BNT").and_then(|t| t.usd_price.clone()), Some(Decimal::from(3u64)));
    }
}
