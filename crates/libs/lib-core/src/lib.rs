//! # Core Library
//!
//! Numeric core of the swap amount input: decimal engine, input sanitizer,
//! amount synchronizer, configuration and error types.
//!
//! ## Modules
//!
//! - **[`decimal`]**: arbitrary-precision [`Decimal`] with truncation
//! - **[`sanitize`]**: live-typing filter producing [`SanitizedText`]
//! - **[`sync`]**: the [`AmountSynchronizer`] state machine
//! - **[`propagation`]**: routing of settled amounts ([`Propagation`], [`Forwarder`])
//! - **[`model`]**: [`Token`], [`AmountPair`], [`InputMode`]
//! - **[`config`]**: precision and debounce settings from the environment
//! - **[`error`]**: [`AppError`] and the crate [`Result`] alias

pub mod config;
pub mod decimal;
pub mod error;
pub mod model;
pub mod propagation;
pub mod sanitize;
pub mod sync;

// Re-export commonly used types
pub use config::Config;
pub use decimal::Decimal;
pub use error::{AppError, Result};
pub use model::{AmountPair, InputMode, Token};
pub use propagation::{AmountCallback, Forwarder, Propagation};
pub use sanitize::{sanitize_number_input, SanitizedText};
pub use sync::{AmountSynchronizer, SyncState};
