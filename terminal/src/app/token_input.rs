//! # Token Input Field
//!
//! Headless view model of one amount field on the trade page: a token
//! picker, a text box typed in token or USD units, the converted amount next
//! to it, and a balance button that fills the field with the whole balance.
//!
//! The field owns an [`AmountSynchronizer`] and reads the page-wide
//! [`ToggleContext`] on every edit and every render. Rendering produces a
//! serializable [`FieldView`]; nothing here draws.
//!
//! ## Display Rules
//!
//! | mode | disabled | input box |
//! |------|----------|-----------|
//! | token | no | token amount as typed |
//! | token | yes | token amount cut to display precision |
//! | fiat | any | `~$` + fiat amount cut to display precision, or blank |

use crate::app::toggle::ToggleContext;
use crate::services::token_list::TokenList;
use crate::ui::format::{format_percentage, prettify_number};
use lib_core::config::DISPLAY_PRECISION;
use lib_core::sanitize::sanitize_number_input;
use lib_core::{AmountPair, AmountSynchronizer, Config, InputMode, Propagation, Token};
use serde::{Deserialize, Serialize};

/// Static options of a field, usually read from page configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOptions {
    pub label: String,
    /// The token picker can be opened.
    pub selectable: bool,
    /// Typing and the max button are ignored; the owner writes amounts.
    pub disabled: bool,
    /// Show a "select a token" prompt until a token is chosen.
    pub start_empty: bool,
    /// Addresses hidden from the picker.
    pub excluded_tokens: Vec<String>,
    pub error_msg: Option<String>,
    /// USD slippage shown next to the converted amount, in percent.
    pub usd_slippage: Option<f64>,
}

/// Balance button text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceLabel {
    pub balance: String,
    pub balance_usd: String,
    /// Whether clicking it fills the field.
    pub enabled: bool,
}

/// Everything a renderer needs to draw the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub label: String,
    pub mode: InputMode,
    pub token_symbol: Option<String>,
    pub show_select_token: bool,
    pub picker_open: bool,
    pub selectable: bool,
    pub disabled: bool,
    pub input_value: String,
    pub placeholder: &'static str,
    pub converted_amount: String,
    pub balance: Option<BalanceLabel>,
    pub error_msg: Option<String>,
    pub usd_slippage: Option<String>,
}

/// One dual-unit amount field.
#[derive(Debug)]
pub struct TokenInputField {
    options: FieldOptions,
    toggle: ToggleContext,
    sync: AmountSynchronizer,
    token: Option<Token>,
    show_select_token: bool,
    picker_open: bool,
}

impl TokenInputField {
    pub fn new(
        options: FieldOptions,
        toggle: ToggleContext,
        config: &Config,
        propagation: Propagation,
    ) -> Self {
        Self {
            show_select_token: options.start_empty,
            options,
            toggle,
            sync: AmountSynchronizer::new(config, propagation),
            token: None,
            picker_open: false,
        }
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn pair(&self) -> &AmountPair {
        self.sync.pair()
    }

    pub fn mode(&self) -> InputMode {
        self.toggle.mode()
    }

    /// Handle text typed into the input box. Ignored when disabled.
    pub fn on_input_change(&mut self, raw_text: &str) -> bool {
        if self.options.disabled {
            return false;
        }
        self.sync
            .on_user_edited(raw_text, self.toggle.mode(), self.token.as_ref());
        true
    }

    /// Handle a click on the balance button.
    pub fn set_max_amount(&mut self) -> bool {
        if self.options.disabled {
            return false;
        }
        match &self.token {
            Some(token) => self.sync.set_max_amount(self.toggle.mode(), token),
            None => false,
        }
    }

    /// Pick a token. Amounts typed for the previous token are discarded.
    pub fn select_token(&mut self, token: Token) {
        tracing::info!(field = %self.options.label, token = %token.symbol, "token selected");
        self.token = Some(token);
        self.show_select_token = false;
        self.picker_open = false;
        self.sync.reset();
    }

    pub fn clear_token(&mut self) {
        self.token = None;
        self.show_select_token = self.options.start_empty;
        self.sync.reset();
    }

    /// Refresh price or balance of the selected token, keeping the amounts.
    ///
    /// Returns `false` when `token` is not the selected one.
    pub fn update_token(&mut self, token: Token) -> bool {
        match &mut self.token {
            Some(current) if current.has_address(&token.address) => {
                *current = token;
                true
            }
            _ => false,
        }
    }

    /// Write amounts computed by the owner, such as a quoted output.
    pub fn set_amounts(&mut self, pair: AmountPair) {
        self.sync.set_pair(pair);
    }

    pub fn reset(&mut self) {
        self.sync.reset();
    }

    pub fn set_excluded_tokens(&mut self, excluded: Vec<String>) {
        self.options.excluded_tokens = excluded;
    }

    pub fn open_picker(&mut self) -> bool {
        if self.options.selectable {
            self.picker_open = true;
        }
        self.picker_open
    }

    /// Picker entries for `query`, without the excluded tokens.
    pub fn picker_tokens<'a>(&self, list: &'a TokenList, query: &str) -> Vec<&'a Token> {
        list.filtered(&self.options.excluded_tokens, query)
    }

    pub fn input_value(&self) -> String {
        let pair = self.sync.pair();
        match (self.toggle.mode(), self.options.disabled) {
            (InputMode::TokenUnit, false) => pair.token_amount.clone(),
            (InputMode::TokenUnit, true) => {
                sanitize_number_input(&pair.token_amount, Some(DISPLAY_PRECISION))
                    .into_string()
            }
            (InputMode::FiatUnit, _) if pair.fiat_amount.is_empty() => String::new(),
            (InputMode::FiatUnit, _) => format!(
                "~${}",
                sanitize_number_input(&pair.fiat_amount, Some(DISPLAY_PRECISION))
            ),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self.toggle.mode() {
            InputMode::TokenUnit => "0.00",
            InputMode::FiatUnit => "~$0.00",
        }
    }

    /// The amount in the other unit, shown beside the input box.
    pub fn converted_amount(&self) -> String {
        let pair = self.sync.pair();
        let mode = self.toggle.mode();
        let prefix = if mode.is_fiat() { "" } else { "~" };

        let amount = match &self.token {
            Some(_) if !pair.is_empty() => match mode {
                InputMode::TokenUnit => prettify_number(&pair.fiat_amount, true),
                InputMode::FiatUnit => prettify_number(&pair.token_amount, false),
            },
            _ => "0".to_string(),
        };

        match (&self.token, mode) {
            (Some(token), InputMode::FiatUnit) => format!("{}{} {}", prefix, amount, token.symbol),
            _ => format!("{}{}", prefix, amount),
        }
    }

    pub fn balance_label(&self) -> Option<BalanceLabel> {
        let token = self.token.as_ref()?;
        let balance = token.balance.as_ref()?;
        let balance_usd = token.balance_usd()?;

        Some(BalanceLabel {
            balance: format!("Balance: {}", prettify_number(&balance.to_canonical(), false)),
            balance_usd: format!("(~{})", prettify_number(&balance_usd.to_canonical(), true)),
            enabled: !self.options.disabled,
        })
    }

    pub fn show_select_token(&self) -> bool {
        self.show_select_token && self.token.is_none()
    }

    pub fn view(&self) -> FieldView {
        FieldView {
            label: self.options.label.clone(),
            mode: self.toggle.mode(),
            token_symbol: self.token.as_ref().map(|t| t.symbol.clone()),
            show_select_token: self.show_select_token(),
            picker_open: self.picker_open,
            selectable: self.options.selectable,
            disabled: self.options.disabled,
            input_value: self.input_value(),
            placeholder: self.placeholder(),
            converted_amount: self.converted_amount(),
            balance: self.balance_label(),
            error_msg: self.options.error_msg.clone(),
            usd_slippage: self.options.usd_slippage.map(format_percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::{Decimal, Forwarder};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    fn bnt() -> Token {
        Token::new("0x1F573D6Fb3F13d689FF844B4cE37794d79a7FF1C", "BNT", 18)
            .with_price(dec("3"))
            .with_balance(dec("5.5"))
    }

    fn field(
        options: FieldOptions,
        toggle: &ToggleContext,
    ) -> (TokenInputField, Arc<Mutex<Vec<String>>>) {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = emitted.clone();
        let field = TokenInputField::new(
            options,
            toggle.clone(),
            &Config::default(),
            Propagation::set_input(move |amount: &str| sink.lock().push(amount.to_string())),
        );
        (field, emitted)
    }

    #[test]
    fn test_typing_in_both_units() {
        let toggle = ToggleContext::new();
        let (mut field, emitted) = field(FieldOptions::default(), &toggle);
        field.select_token(bnt());

        assert!(field.on_input_change("2"));
        assert_eq!(field.input_value(), "2");
        assert_eq!(field.converted_amount(), "~$6.00");

        toggle.toggle();
        assert!(field.on_input_change("~$9"));
        assert_eq!(field.pair(), &AmountPair::new("3", "9"));
        assert_eq!(field.input_value(), "~$9");
        assert_eq!(field.converted_amount(), "3 BNT");
        assert_eq!(*emitted.lock(), vec!["2", "3"]);
    }

    #[test]
    fn test_toggle_twice_keeps_pair() {
        let toggle = ToggleContext::new();
        let (mut field, _) = field(FieldOptions::default(), &toggle);
        field.select_token(bnt());
        field.on_input_change("1.25");
        let before = field.pair().clone();

        toggle.toggle();
        assert_eq!(field.input_value(), "~$3.75");
        toggle.toggle();

        assert_eq!(field.pair(), &before);
        assert_eq!(field.input_value(), "1.25");
    }

    #[test]
    fn test_toggle_twice_after_fiat_edit() {
        let toggle = ToggleContext::new();
        let (mut field, emitted) = field(FieldOptions::default(), &toggle);
        field.select_token(bnt());
        toggle.toggle();
        field.on_input_change("~$10");
        let before = field.pair().clone();
        assert_eq!(before, AmountPair::new("3.333333333333333333", "10"));

        toggle.toggle();
        assert_eq!(field.input_value(), "3.333333333333333333");
        toggle.toggle();

        assert_eq!(field.pair(), &before);
        assert_eq!(field.input_value(), "~$10");
        assert_eq!(emitted.lock().len(), 1);
    }

    #[test]
    fn test_toggle_twice_after_max_amount() {
        let toggle = ToggleContext::new();
        let (mut field, emitted) = field(FieldOptions::default(), &toggle);
        field.select_token(bnt());
        assert!(field.set_max_amount());
        let before = field.pair().clone();

        toggle.toggle();
        toggle.toggle();

        assert_eq!(field.pair(), &before);
        assert_eq!(field.input_value(), "5.5");
        assert_eq!(*emitted.lock(), vec!["5.5"]);
    }

    #[test]
    fn test_disabled_field_truncates_display() {
        let toggle = ToggleContext::new();
        let options = FieldOptions {
            disabled: true,
            ..FieldOptions::default()
        };
        let (mut field, emitted) = field(options, &toggle);
        field.select_token(bnt());
        field.set_amounts(AmountPair::new("1.123456789", "3.370370367"));

        assert_eq!(field.input_value(), "1.123456");
        toggle.set_mode(InputMode::FiatUnit);
        assert_eq!(field.input_value(), "~$3.370370");

        assert!(!field.on_input_change("5"));
        assert!(!field.set_max_amount());
        assert!(emitted.lock().is_empty());
    }

    #[test]
    fn test_empty_pair_shows_zero() {
        let toggle = ToggleContext::new();
        let (mut field, _) = field(FieldOptions::default(), &toggle);

        assert_eq!(field.converted_amount(), "~0");
        assert_eq!(field.placeholder(), "0.00");

        field.select_token(bnt());
        toggle.toggle();
        assert_eq!(field.converted_amount(), "0 BNT");
        assert_eq!(field.input_value(), "");
        assert_eq!(field.placeholder(), "~$0.00");
    }

    #[test]
    fn test_max_amount_and_balance_label() {
        let toggle = ToggleContext::new();
        let (mut field, emitted) = field(FieldOptions::default(), &toggle);
        assert!(!field.set_max_amount());
        field.select_token(bnt());

        let label = field.balance_label().unwrap();
        assert_eq!(label.balance, "Balance: 5.5");
        assert_eq!(label.balance_usd, "(~$16.50)");
        assert!(label.enabled);

        assert!(field.set_max_amount());
        assert_eq!(field.pair(), &AmountPair::new("5.5", "16.5"));
        assert_eq!(field.converted_amount(), "~$16.50");

        toggle.toggle();
        assert!(field.set_max_amount());
        assert_eq!(field.input_value(), "~$16.5");
        assert_eq!(*emitted.lock(), vec!["5.5", "5.5"]);
    }

    #[test]
    fn test_balance_label_with_unknown_price() {
        let toggle = ToggleContext::new();
        let (mut field, _) = field(FieldOptions::default(), &toggle);
        field.select_token(Token::new("0x2", "NEW", 8).with_balance(dec("2")));

        let label = field.balance_label().unwrap();
        assert_eq!(label.balance_usd, "(~$0.00)");
    }

    #[test]
    fn test_start_empty_prompt() {
        let toggle = ToggleContext::new();
        let options = FieldOptions {
            start_empty: true,
            selectable: true,
            ..FieldOptions::default()
        };
        let (mut field, _) = field(options, &toggle);
        assert!(field.show_select_token());

        assert!(field.open_picker());
        field.select_token(bnt());
        assert!(!field.show_select_token());
        assert!(!field.view().picker_open);
    }

    #[derive(Clone, Default)]
    struct Cancels(Arc<Mutex<usize>>);

    impl Forwarder for Cancels {
        fn forward(&self, _amount: &str) {}

        fn cancel(&self) {
            *self.0.lock() += 1;
        }
    }

    fn debounced_field(options: FieldOptions) -> (TokenInputField, Cancels) {
        let cancels = Cancels::default();
        let field = TokenInputField::new(
            options,
            ToggleContext::new(),
            &Config::default(),
            Propagation::set_input_debounced(|_: &str| {}, cancels.clone()),
        );
        (field, cancels)
    }

    #[test]
    fn test_select_token_resets_and_cancels() {
        let (mut field, cancels) = debounced_field(FieldOptions::default());
        field.select_token(bnt());
        field.on_input_change("4");

        field.select_token(Token::new("0x2", "NEW", 8));

        assert!(field.pair().is_empty());
        assert_eq!(*cancels.0.lock(), 2);
    }

    #[test]
    fn test_clear_token_restores_prompt() {
        let options = FieldOptions {
            start_empty: true,
            selectable: true,
            ..FieldOptions::default()
        };
        let (mut field, cancels) = debounced_field(options);
        field.select_token(bnt());
        field.on_input_change("4");
        assert!(!field.show_select_token());

        field.clear_token();

        assert!(field.token().is_none());
        assert!(field.pair().is_empty());
        assert!(field.show_select_token());
        assert_eq!(*cancels.0.lock(), 2);
        assert_eq!(field.input_value(), "");
    }

    #[test]
    fn test_update_token_keeps_amounts() {
        let toggle = ToggleContext::new();
        let (mut field, _) = field(FieldOptions::default(), &toggle);
        field.select_token(bnt());
        field.on_input_change("2");

        assert!(field.update_token(bnt().with_price(dec("4"))));
        assert!(!field.update_token(Token::new("0x2", "NEW", 8)));
        assert_eq!(field.pair().token_amount, "2");
        assert_eq!(field.token().and_then(|t| t.usd_price.clone()), Some(dec("4")));
    }

    #[test]
    fn test_options_from_json() {
        let json = r#"{"label": "You Receive", "disabled": true, "usdSlippage": 0.5}"#;
        let options: FieldOptions = serde_json::from_str(json).unwrap();
        assert!(options.disabled);
        assert!(!options.selectable);

        let toggle = ToggleContext::new();
        let (field, _) = field(options, &toggle);
        let view = field.view();
        assert_eq!(view.label, "You Receive");
        assert_eq!(view.usd_slippage.as_deref(), Some("(0.5%)"));
    }
}
