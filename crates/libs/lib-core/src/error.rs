//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the amount-input
//! core. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Numeric Errors** - never shown to the user
//!    - [`UndefinedRate`](AppError::UndefinedRate) → the derived field is left blank
//!    - [`InvalidDecimal`](AppError::InvalidDecimal) → the text is not a decimal number
//!
//! 2. **Startup Errors**
//!    - [`Config`](AppError::Config) → environment misconfiguration
//!
//! 3. **Collaborator Errors**
//!    - [`Wallet`](AppError::Wallet) → wallet connection failures
//!    - [`Validation`](AppError::Validation) → malformed collaborator data
//!
//! The synchronizer converts numeric errors into data (an empty string) before
//! anything reaches the caller; they only surface from the [`crate::decimal`]
//! API itself.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::decimal::Decimal;
//! use lib_core::error::{AppError, Result};
//!
//! fn rate(fiat: &str, price: &str) -> Result<Decimal> {
//!     Decimal::parse(fiat)?.div(&Decimal::parse(price)?)
//! }
//!
//! assert!(matches!(rate("10", "0"), Err(AppError::UndefinedRate)));
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering all failure scenarios of the amount-input core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Conversion attempted with an unknown or zero price.
    #[error("Undefined rate: price is unknown or zero")]
    UndefinedRate,

    /// Text could not be parsed as a decimal number.
    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wallet connection error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Collaborator data failed validation (e.g. a malformed token list).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

/// Convert `lib_utils::envs::Error` to `AppError`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                AppError::Config(format!("{} must be set in environment", name))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} must be a valid number", name))
            }
        }
    }
}
