//! # Common Error Types
//!
//! The terminal shares [`AppError`] with `lib-core` so decimal, configuration
//! and wallet failures travel through one type.
//!
//! ## Error Conversion
//!
//! - [`ConnectError`] → `AppError::Wallet`
//! - `serde_json::Error` → `AppError::Validation`
//! - `lib_utils::envs::Error` → `AppError::Config`
//!
//! ```rust
//! use terminal::core::error::AppError;
//! use terminal::services::wallet::ConnectError;
//!
//! let err: AppError = ConnectError::Rejected("user closed the prompt".to_string()).into();
//! assert_eq!(err.to_string(), "Wallet error: Connection rejected: user closed the prompt");
//! ```

pub use lib_core::error::{AppError, Result};

use crate::services::wallet::ConnectError;

impl From<ConnectError> for AppError {
    fn from(err: ConnectError) -> Self {
        AppError::Wallet(err.to_string())
    }
}
