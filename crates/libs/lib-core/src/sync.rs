//! # Amount Synchronizer
//!
//! State machine keeping a token amount and its USD equivalent consistent while
//! the user types into either unit.
//!
//! ## States
//!
//! ```text
//!                 UserEdited(text, TokenUnit)
//!   ┌───────┐ ─────────────────────────────► ┌────────────────────┐
//!   │ Empty │                                │ TokenAuthoritative │
//!   └───────┘ ◄──── edit to "" / reset ───── └────────────────────┘
//!       │                                              ▲
//!       │ UserEdited(text, FiatUnit)                   │ UserEdited(_, TokenUnit)
//!       ▼                                              │
//!   ┌───────────────────┐ ─────────────────────────────┘
//!   │ FiatAuthoritative │
//!   └───────────────────┘
//! ```
//!
//! Every edit fully replaces both sides of the [`AmountPair`] and emits the
//! token-unit amount through the configured [`Propagation`].
//!
//! ## Zero Handling
//!
//! The two directions treat a zero result differently:
//!
//! - Token edits blank a derived fiat amount of `"0"`, so typing `"0."` does
//!   not flash `$0` next to the field.
//! - Fiat edits keep the typed fiat text verbatim, `"0"` included.
//!
//! Unknown or zero prices blank the derived side in both directions.

use crate::config::Config;
use crate::decimal::Decimal;
use crate::model::{AmountPair, InputMode, Token};
use crate::propagation::Propagation;
use crate::sanitize::{sanitize_decimal, sanitize_number_input, SanitizedText};

/// Which side of the pair was edited last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Empty,
    TokenAuthoritative,
    FiatAuthoritative,
}

/// Stateful core of the dual-unit amount input.
#[derive(Debug)]
pub struct AmountSynchronizer {
    pair: AmountPair,
    state: SyncState,
    fiat_precision: u32,
    propagation: Propagation,
}

impl AmountSynchronizer {
    pub fn new(config: &Config, propagation: Propagation) -> Self {
        Self {
            pair: AmountPair::empty(),
            state: SyncState::Empty,
            fiat_precision: config.fiat_precision,
            propagation,
        }
    }

    pub fn pair(&self) -> &AmountPair {
        &self.pair
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Apply a keystroke in the unit given by `mode`.
    pub fn on_user_edited(&mut self, raw_text: &str, mode: InputMode, token: Option<&Token>) {
        let decimals = token.map(|t| u32::from(t.decimals));
        let price = token.and_then(|t| t.usd_price.as_ref());

        let (pair, authoritative) = match mode {
            InputMode::TokenUnit => {
                let token_text = sanitize_number_input(raw_text, decimals);
                let fiat_text = match token_to_fiat(&token_text, price, self.fiat_precision) {
                    Some(fiat) if fiat.as_str() != "0" => fiat,
                    _ => SanitizedText::empty(),
                };
                let state = if token_text.is_empty() {
                    SyncState::Empty
                } else {
                    SyncState::TokenAuthoritative
                };
                (AmountPair::new(token_text, fiat_text), state)
            }
            InputMode::FiatUnit => {
                let fiat_text = sanitize_number_input(raw_text, Some(self.fiat_precision));
                let token_text = fiat_to_token(&fiat_text, price, decimals).unwrap_or_default();
                let state = if fiat_text.is_empty() {
                    SyncState::Empty
                } else {
                    SyncState::FiatAuthoritative
                };
                (AmountPair::new(token_text, fiat_text), state)
            }
        };

        tracing::debug!(
            mode = %mode,
            token = token.map(|t| t.symbol.as_str()).unwrap_or("-"),
            token_amount = %pair.token_amount,
            fiat_amount = %pair.fiat_amount,
            state = ?authoritative,
            "amount edited"
        );

        self.pair = pair;
        self.state = authoritative;
        self.propagation.emit(&self.pair.token_amount);
    }

    /// Fill the field with the whole balance of `token`.
    ///
    /// Routed through [`on_user_edited`](Self::on_user_edited) in the unit of
    /// `mode`, so truncation and derivation match manual typing. Returns
    /// `false` without touching state when the balance is unknown.
    pub fn set_max_amount(&mut self, mode: InputMode, token: &Token) -> bool {
        let (Some(balance), Some(balance_usd)) = (token.balance.as_ref(), token.balance_usd())
        else {
            tracing::debug!(token = %token.symbol, "max amount skipped, balance unknown");
            return false;
        };

        let text = match mode {
            InputMode::TokenUnit => balance.to_canonical(),
            InputMode::FiatUnit => balance_usd.to_canonical(),
        };
        self.on_user_edited(&text, mode, Some(token));
        true
    }

    /// Overwrite the pair with values computed elsewhere (e.g. a quoted output).
    ///
    /// Nothing is propagated: the owner already holds these values.
    pub fn set_pair(&mut self, pair: AmountPair) {
        self.state = if pair.is_empty() {
            SyncState::Empty
        } else {
            SyncState::TokenAuthoritative
        };
        self.pair = pair;
    }

    /// Return to `Empty` and drop in-flight delayed propagation.
    pub fn reset(&mut self) {
        self.propagation.cancel_pending();
        self.pair = AmountPair::empty();
        self.state = SyncState::Empty;
        tracing::debug!("amount input reset");
    }
}

/// USD value of a token amount computed outside the input, such as a quote.
///
/// Follows the token-edit rules: an unknown price or a zero result is blank.
pub fn fiat_value(token_amount: &str, token: &Token, fiat_precision: u32) -> String {
    let token_text = sanitize_number_input(token_amount, None);
    match token_to_fiat(&token_text, token.usd_price.as_ref(), fiat_precision) {
        Some(fiat) if fiat.as_str() != "0" => fiat.into_string(),
        _ => String::new(),
    }
}

fn token_to_fiat(
    token_text: &SanitizedText,
    price: Option<&Decimal>,
    fiat_precision: u32,
) -> Option<SanitizedText> {
    let amount = token_text.to_decimal()?;
    let fiat = amount.mul(price?);
    Some(sanitize_decimal(&fiat, fiat_precision))
}

fn fiat_to_token(
    fiat_text: &SanitizedText,
    price: Option<&Decimal>,
    decimals: Option<u32>,
) -> Option<SanitizedText> {
    let amount = fiat_text.to_decimal()?;
    let token = amount.div(price?).ok()?;
    Some(match decimals {
        Some(decimals) => sanitize_decimal(&token, decimals),
        None => sanitize_number_input(&token.to_canonical(), None),
    })
}
