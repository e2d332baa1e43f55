//! # Trade Page Widgets
//!
//! Headless view models of the trade page. Each widget owns its state and
//! renders a serializable view; the binary prints those views and a GUI
//! would draw them.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ TradeWidget                                  │
//! │  ├── TokenInputField "You Pay"    (typed)    │──► Propagation ──► Debouncer ──► quote
//! │  └── TokenInputField "You Receive" (quoted)  │◄── apply_quote
//! │         ▲                                    │
//! │         └── ToggleContext (token / fiat)     │
//! └──────────────────────────────────────────────┘
//!   WalletModal ──► WalletConnector / AccountStore
//! ```
//!
//! ## Key Components
//!
//! - **[`ToggleContext`]**: page-wide unit toggle shared by both fields
//! - **[`TokenInputField`]**: one dual-unit amount field
//! - **[`TradeWidget`]**: the pair of fields with mutual token exclusion
//! - **[`WalletModal`]**: wallet connection dialog

pub mod toggle;
pub mod token_input;
pub mod trade;
pub mod wallet_modal;

pub use toggle::ToggleContext;
pub use token_input::{BalanceLabel, FieldOptions, FieldView, TokenInputField};
pub use trade::{TradePair, TradeWidget, ETH_ADDRESS};
pub use wallet_modal::{WalletModal, WalletModalView};
