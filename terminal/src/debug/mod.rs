//! # Logging Infrastructure
//!
//! File and stderr logging for the terminal binary.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use terminal::debug::{self, DebugConfig};
//!
//! let _guard = debug::init_logger(&DebugConfig::from_env());
//!
//! tracing::info!(token = "BNT", "token selected");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `terminal=debug,lib_core=debug`)
//! - `TERMINAL_LOG_DIR`: Directory of the daily log file (default: `logs`)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;
