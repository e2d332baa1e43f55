//! # Debounced Forwarder
//!
//! Coalesces bursts of amount updates into one delayed delivery carrying the
//! latest value, typically in front of a quote request.
//!
//! A background Tokio task watches a `watch` channel. Every update restarts
//! the quiet period; when `delay` passes without a new update the latest
//! value is handed to the sink. [`Forwarder::cancel`] replaces the pending
//! value with nothing, so a token switch never delivers an amount typed for
//! the previous token.
//!
//! ```rust,no_run
//! use lib_core::Forwarder;
//! use std::time::Duration;
//! use terminal::services::debounce::Debouncer;
//!
//! # async fn demo() {
//! let debounce = Debouncer::spawn(Duration::from_millis(500), |amount| {
//!     tracing::info!(%amount, "requesting quote");
//! });
//! debounce.forward("1");
//! debounce.forward("12"); // only "12" reaches the sink
//! # }
//! ```

use lib_core::Forwarder;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Debounced sink for token amounts.
#[derive(Debug)]
pub struct Debouncer {
    tx: watch::Sender<Option<String>>,
    task: JoinHandle<()>,
}

impl Debouncer {
    /// Start the debouncer task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<F>(delay: Duration, sink: F) -> Self
    where
        F: Fn(String) + Send + 'static,
    {
        let (tx, mut rx) = watch::channel::<Option<String>>(None);

        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                // Wait for a quiet period; every new value restarts it
                loop {
                    tokio::select! {
                        changed = rx.changed() => {
                            if changed.is_err() {
                                return;
                            }
                        }
                        _ = tokio::time::sleep(delay) => break,
                    }
                }

                let latest = rx.borrow_and_update().clone();
                match latest {
                    Some(amount) => {
                        let delay_ms = delay.as_millis() as u64;
                        tracing::debug!(%amount, delay_ms, "debounced amount forwarded");
                        sink(amount);
                    }
                    None => tracing::trace!("debounced amount cancelled"),
                }
            }
        });

        Self { tx, task }
    }
}

impl Forwarder for Debouncer {
    fn forward(&self, amount: &str) {
        self.tx.send_replace(Some(amount.to_string()));
    }

    fn cancel(&self) {
        self.tx.send_replace(None);
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
