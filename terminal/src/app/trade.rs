//! # Trade Widget
//!
//! The two amount fields of the trade page. The "from" field is typed by the
//! user; the "to" field is disabled and receives quoted amounts.
//!
//! Each field's picker excludes the token selected in the other field, so a
//! pair can never trade a token for itself.

use crate::app::toggle::ToggleContext;
use crate::app::token_input::{FieldOptions, TokenInputField};
use crate::services::token_list::TokenList;
use lib_core::sanitize::sanitize_number_input;
use lib_core::sync::fiat_value;
use lib_core::{AmountPair, Config, InputMode, Propagation, Token};

/// Address of native ETH in token lists.
pub const ETH_ADDRESS: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// Token addresses requested for a trade, e.g. from page query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradePair {
    pub from: String,
    pub to: Option<String>,
}

impl TradePair {
    /// `from` falls back to native ETH.
    pub fn new(from: Option<String>, to: Option<String>) -> Self {
        Self {
            from: from.unwrap_or_else(|| ETH_ADDRESS.to_string()),
            to,
        }
    }
}

impl Default for TradePair {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug)]
pub struct TradeWidget {
    toggle: ToggleContext,
    from: TokenInputField,
    to: TokenInputField,
    fiat_precision: u32,
}

impl TradeWidget {
    /// Build both fields and select the tokens of `pair` found in `tokens`.
    ///
    /// `propagation` receives the amounts typed into the "from" field.
    pub fn new(
        pair: &TradePair,
        tokens: &TokenList,
        toggle: ToggleContext,
        config: &Config,
        propagation: Propagation,
    ) -> Self {
        let from_options = FieldOptions {
            label: "You Pay".to_string(),
            selectable: true,
            ..FieldOptions::default()
        };
        let to_options = FieldOptions {
            label: "You Receive".to_string(),
            selectable: true,
            disabled: true,
            start_empty: true,
            ..FieldOptions::default()
        };

        let mut widget = Self {
            from: TokenInputField::new(from_options, toggle.clone(), config, propagation),
            to: TokenInputField::new(
                to_options,
                toggle.clone(),
                config,
                Propagation::on_change(|_: &str| {}),
            ),
            toggle,
            fiat_precision: config.fiat_precision,
        };

        match tokens.find(&pair.from) {
            Some(token) => widget.from.select_token(token.clone()),
            None => tracing::warn!(address = %pair.from, "from token not in token list"),
        }
        if let Some(to) = &pair.to {
            match tokens.find(to) {
                Some(token) if !token.has_address(&pair.from) => {
                    widget.to.select_token(token.clone())
                }
                _ => tracing::warn!(address = %to, "to token unavailable"),
            }
        }
        widget.sync_exclusions();
        widget
    }

    pub fn from(&self) -> &TokenInputField {
        &self.from
    }

    pub fn from_mut(&mut self) -> &mut TokenInputField {
        &mut self.from
    }

    pub fn to(&self) -> &TokenInputField {
        &self.to
    }

    pub fn toggle(&self) -> InputMode {
        self.toggle.toggle()
    }

    pub fn select_from(&mut self, token: Token) {
        self.from.select_token(token);
        self.to.reset();
        self.sync_exclusions();
    }

    pub fn select_to(&mut self, token: Token) {
        self.to.select_token(token);
        self.sync_exclusions();
    }

    /// Refresh price or balance of `token` in whichever field holds it.
    ///
    /// Returns `false` when neither field has it selected.
    pub fn update_token(&mut self, token: Token) -> bool {
        let from = self.from.update_token(token.clone());
        let to = self.to.update_token(token);
        from || to
    }

    /// Swap the two tokens. Both fields start over.
    pub fn switch(&mut self) -> bool {
        let (Some(from), Some(to)) = (self.from.token().cloned(), self.to.token().cloned()) else {
            return false;
        };
        self.from.select_token(to);
        self.to.select_token(from);
        self.sync_exclusions();
        true
    }

    /// Write a quoted output amount into the "to" field.
    ///
    /// Returns `false` when no output token is selected.
    pub fn apply_quote(&mut self, output_amount: &str) -> bool {
        let Some(token) = self.to.token() else {
            return false;
        };
        let decimals = u32::from(token.decimals);
        let token_amount = sanitize_number_input(output_amount, Some(decimals)).into_string();
        let fiat_amount = fiat_value(&token_amount, token, self.fiat_precision);
        tracing::debug!(%token_amount, %fiat_amount, token = %token.symbol, "quote applied");
        self.to.set_amounts(AmountPair::new(token_amount, fiat_amount));
        true
    }

    /// Output amount at spot prices, used when no quote service is wired in.
    pub fn spot_quote(&self, input_amount: &str) -> Option<String> {
        let input = self.from.token()?.usd_price.as_ref()?;
        let output = self.to.token()?.usd_price.as_ref()?;
        let amount = lib_core::Decimal::parse(input_amount).ok()?;
        amount
            .mul(input)
            .div(output)
            .ok()
            .map(|quote| quote.to_canonical())
    }

    fn sync_exclusions(&mut self) {
        let excluded = |field: &TokenInputField| {
            field
                .token()
                .map(|token| vec![token.address.clone()])
                .unwrap_or_default()
        };
        let from_excluded = excluded(&self.to);
        let to_excluded = excluded(&self.from);
        self.from.set_excluded_tokens(from_excluded);
        self.to.set_excluded_tokens(to_excluded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    const LIST: &str = r#"[
        {"address": "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE", "symbol": "ETH",
         "name": "Ether", "decimals": 18, "usdPrice": "3000", "balance": "2"},
        {"address": "0x1F573D6Fb3F13d689FF844B4cE37794d79a7FF1C", "symbol": "BNT",
         "name": "Bancor Network Token", "decimals": 18, "usdPrice": "2.5"},
        {"address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "symbol": "USDC",
         "name": "USD Coin", "decimals": 6, "usdPrice": "1"}
    ]"#;

    fn symbols(tokens: Vec<&Token>) -> Vec<String> {
        tokens.iter().map(|t| t.symbol.clone()).collect()
    }

    fn widget(pair: TradePair) -> (TradeWidget, TokenList, Arc<Mutex<Vec<String>>>) {
        let tokens = TokenList::from_json(LIST).unwrap();
        let typed = Arc::new(Mutex::new(Vec::new()));
        let sink = typed.clone();
        let widget = TradeWidget::new(
            &pair,
            &tokens,
            ToggleContext::new(),
            &Config::default(),
            Propagation::set_input(move |amount: &str| sink.lock().push(amount.to_string())),
        );
        (widget, tokens, typed)
    }

    #[test]
    fn test_from_defaults_to_eth() {
        let (widget, _, _) = widget(TradePair::default());

        assert_eq!(widget.from().token().map(|t| t.symbol.as_str()), Some("ETH"));
        assert!(widget.to().token().is_none());
        assert!(widget.to().show_select_token());
    }

    #[test]
    fn test_pickers_exclude_each_other() {
        let usdc = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string();
        let (widget, tokens, _) = widget(TradePair::new(None, Some(usdc)));

        let from_choices = symbols(widget.from().picker_tokens(&tokens, ""));
        let to_choices = symbols(widget.to().picker_tokens(&tokens, ""));

        assert_eq!(from_choices, vec!["ETH", "BNT"]);
        assert_eq!(to_choices, vec!["BNT", "USDC"]);
    }

    #[test]
    fn test_switch_swaps_tokens() {
        let (mut widget, tokens, _) = widget(TradePair::default());
        assert!(!widget.switch());

        widget.select_to(tokens.lookup("BNT").cloned().unwrap());
        widget.from_mut().on_input_change("1");
        assert!(widget.switch());

        assert_eq!(widget.from().token().map(|t| t.symbol.as_str()), Some("BNT"));
        assert_eq!(widget.to().token().map(|t| t.symbol.as_str()), Some("ETH"));
        assert!(widget.from().pair().is_empty());
    }

    #[test]
    fn test_quote_fills_disabled_field() {
        let (mut widget, tokens, typed) = widget(TradePair::default());
        assert!(!widget.apply_quote("1"));
        widget.select_to(tokens.lookup("USDC").cloned().unwrap());

        widget.from_mut().on_input_change("0.5");
        let quote = widget.spot_quote(&widget.from().pair().token_amount).unwrap();
        assert_eq!(quote, "1500");
        assert!(widget.apply_quote(&quote));

        assert_eq!(widget.to().pair(), &AmountPair::new("1500", "1500"));
        assert_eq!(widget.to().input_value(), "1500");
        assert_eq!(*typed.lock(), vec!["0.5"]);
    }

    #[test]
    fn test_quote_truncates_to_output_decimals() {
        let usdc = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string();
        let (mut widget, _, _) = widget(TradePair::new(None, Some(usdc)));

        assert!(widget.apply_quote("12.3456789"));

        assert_eq!(widget.to().pair(), &AmountPair::new("12.345678", "12.345678"));
    }

    #[test]
    fn test_select_from_clears_quoted_output() {
        let (mut widget, tokens, _) = widget(TradePair::default());
        widget.select_to(tokens.lookup("USDC").cloned().unwrap());
        widget.from_mut().on_input_change("1");
        assert!(widget.apply_quote("3000"));
        assert!(!widget.to().pair().is_empty());

        widget.select_from(tokens.lookup("BNT").cloned().unwrap());

        assert!(widget.from().pair().is_empty());
        assert!(widget.to().pair().is_empty());
        assert_eq!(widget.to().token().map(|t| t.symbol.as_str()), Some("USDC"));
        assert_eq!(widget.to().input_value(), "");
    }

    #[test]
    fn test_update_token_refreshes_selected_field() {
        let (mut widget, tokens, _) = widget(TradePair::default());
        widget.select_to(tokens.lookup("USDC").cloned().unwrap());
        widget.from_mut().on_input_change("1");

        let eth = tokens.lookup("ETH").cloned().unwrap();
        let repriced = eth.with_price(lib_core::Decimal::parse("3100").unwrap());
        assert!(widget.update_token(repriced));
        let bnt = tokens.lookup("BNT").cloned().unwrap();
        assert!(!widget.update_token(bnt));

        assert_eq!(widget.from().pair().token_amount, "1");
        assert_eq!(widget.spot_quote("1").as_deref(), Some("3100"));
    }
}
