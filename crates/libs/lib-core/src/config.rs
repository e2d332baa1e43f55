//! # Amount Input Configuration
//!
//! This module manages the precision and propagation settings of the amount
//! input, loaded from environment variables. Configuration is validated on
//! startup to fail fast if misconfigured.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! let fiat_digits = config.fiat_precision;
//! ```
//!
//! The config must be initialized once at application startup using
//! [`init_config()`]. Components take a `&Config` so tests can pass
//! [`Config::default()`] without touching the environment.

use crate::error::{AppError, Result};
use lib_utils::envs::get_env_parse_or;
use std::sync::OnceLock;
use std::time::Duration;

/// Upper bound for any configured precision.
pub const MAX_PRECISION: u32 = 18;

/// Fractional digits shown in the input box for fiat amounts and for
/// disabled fields.
pub const DISPLAY_PRECISION: u32 = 6;

/// Upper bound for the debounce delay in milliseconds.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Amount input configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Fractional digits kept for typed and derived fiat amounts.
    pub fiat_precision: u32,

    /// Quiet period before the debounced forwarder fires.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fiat_precision: 6,
            debounce_ms: 500,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `SWAP_FIAT_PRECISION` (default 6)
    /// - `SWAP_DEBOUNCE_MS` (default 500)
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        Ok(Self {
            fiat_precision: get_env_parse_or("SWAP_FIAT_PRECISION", defaults.fiat_precision)?,
            debounce_ms: get_env_parse_or("SWAP_DEBOUNCE_MS", defaults.debounce_ms)?,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.fiat_precision > MAX_PRECISION {
            return Err(AppError::Config(format!(
                "SWAP_FIAT_PRECISION must be between 0 and {}",
                MAX_PRECISION
            )));
        }

        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(AppError::Config(format!(
                "SWAP_DEBOUNCE_MS must be between 0 and {}",
                MAX_DEBOUNCE_MS
            )));
        }

        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<&'static Config> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// Falls back to [`Config::default()`] when [`init_config()`] has not run.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(|| {
        tracing::debug!("core config read before init_config, using defaults");
        Config::default()
    })
}
