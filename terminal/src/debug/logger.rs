//! Logging initialization

use super::config::DebugConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - An `EnvFilter` from `config.log_level`
/// - Compact output on stderr, keeping stdout free for views
/// - Daily-rotated, non-blocking file output when a log directory is set
/// - A panic hook that logs the panic before the default handler runs
///
/// Keep the returned guard alive until exit so buffered file lines are flushed.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_LEVEL));

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI codes in log files
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false);

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    if let Err(e) = initialized {
        eprintln!("Warning: logging already initialized: {}", e);
        return guard;
    }

    tracing::info!(
        log_level = %config.log_level,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );

    setup_panic_hook();
    guard
}

fn file_writer(
    config: &DebugConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let log_dir = config.log_dir.as_ref()?;

    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, &config.log_file_prefix);
    Some(tracing_appender::non_blocking(file_appender))
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        tracing::error!(%location, %message, "PANIC");
        default_panic(panic_info);
    }));
}
