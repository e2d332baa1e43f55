//! # Core Abstractions
//!
//! Core traits and error types shared by the terminal's widgets and services.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Collaborator traits (`WalletConnector`, `AccountStore`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use terminal::core::service::{AccountStore, WalletConnector};
//! use terminal::services::wallet::{InMemoryAccountStore, LocalConnector};
//!
//! let connector: Arc<dyn WalletConnector> = Arc::new(LocalConnector::new("0x5290"));
//! let accounts: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{AccountStore, WalletConnector};
