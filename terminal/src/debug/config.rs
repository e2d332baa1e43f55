//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "terminal=info,lib_core=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log level filter (e.g., "terminal=debug,info")
    pub log_level: String,
    /// Log directory (for rotation), `None` disables the file log
    pub log_dir: Option<PathBuf>,
    /// File name prefix of the rotated log
    pub log_file_prefix: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: Some(PathBuf::from("logs")),
            log_file_prefix: "terminal.log".to_string(),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `RUST_LOG`: filter directives
    /// - `TERMINAL_LOG_DIR`: log directory, an empty value disables the file log
    pub fn from_env() -> Self {
        let log_dir = match std::env::var("TERMINAL_LOG_DIR") {
            Ok(dir) if dir.trim().is_empty() => None,
            Ok(dir) => Some(PathBuf::from(dir)),
            Err(_) => Some(PathBuf::from("logs")),
        };

        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_dir,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DebugConfig::default();
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_file_prefix, "terminal.log");
    }
}
