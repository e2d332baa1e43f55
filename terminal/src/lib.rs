//! # Swap Terminal - Library Root
//!
//! Headless trade page of a token swap app: two amount fields that accept
//! either token quantities or their USD value, a token picker, and a wallet
//! connection dialog. The binary (`main.rs`) drives these widgets from stdin
//! and prints their views as JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - TokenInputField, TradeWidget, WalletModal │
//! │  services  - Debouncer, TokenList, wallet state        │
//! │  ui        - amount formatting                         │
//! │  debug     - tracing setup                             │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          ▼                              ▼
//! ┌─────────────────────┐      ┌─────────────────────────┐
//! │  lib-core           │      │  shared                 │
//! │  Decimal, sanitizer │      │  wallet DTOs, address   │
//! │  AmountSynchronizer │      │  formatting             │
//! └─────────────────────┘      └─────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! 1. Text typed into the "from" field goes through the sanitizer and the
//!    [`AmountSynchronizer`](lib_core::AmountSynchronizer), which derives the
//!    other unit.
//! 2. The token amount is set immediately and forwarded to the
//!    [`Debouncer`](services::Debouncer).
//! 3. After a quiet period the debouncer requests a quote; the result lands in
//!    the disabled "to" field through
//!    [`TradeWidget::apply_quote`](app::TradeWidget::apply_quote).
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use app::{FieldView, ToggleContext, TokenInputField, TradePair, TradeWidget, WalletModal};
pub use core::{AppError, Result};
