//! # Amount Propagation
//!
//! How a settled token amount leaves the synchronizer.
//!
//! The routing is chosen once, at construction:
//!
//! - [`Propagation::Replace`]: a single `on_change` callback receives every
//!   amount and nothing else is called.
//! - [`Propagation::Default`]: the immediate `set_input` setter receives every
//!   amount, and an optional [`Forwarder`] receives the same value for
//!   delayed, coalesced delivery downstream.
//!
//! The propagated value is always in token units, whichever side was typed.

/// Callback receiving a token amount.
pub type AmountCallback = Box<dyn FnMut(&str) + Send>;

/// Delayed downstream sink, typically a debouncer in front of a quote service.
///
/// Implementations must coalesce: after a burst of `forward` calls only the
/// latest value is delivered. `cancel` drops any value not yet delivered.
pub trait Forwarder: Send {
    fn forward(&self, amount: &str);

    fn cancel(&self);
}

/// Routing of settled amounts to the rest of the application.
pub enum Propagation {
    /// Replaces the default setter and forwarder routing.
    Replace(AmountCallback),
    /// Immediate setter plus optional delayed forwarder.
    Default {
        set_input: AmountCallback,
        debounce: Option<Box<dyn Forwarder>>,
    },
}

impl Propagation {
    pub fn on_change<F>(callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Propagation::Replace(Box::new(callback))
    }

    pub fn set_input<F>(setter: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Propagation::Default {
            set_input: Box::new(setter),
            debounce: None,
        }
    }

    pub fn set_input_debounced<F, D>(setter: F, debounce: D) -> Self
    where
        F: FnMut(&str) + Send + 'static,
        D: Forwarder + 'static,
    {
        Propagation::Default {
            set_input: Box::new(setter),
            debounce: Some(Box::new(debounce)),
        }
    }

    /// Deliver a settled token amount.
    pub fn emit(&mut self, amount: &str) {
        match self {
            Propagation::Replace(on_change) => on_change(amount),
            Propagation::Default {
                set_input,
                debounce,
            } => {
                set_input(amount);
                if let Some(debounce) = debounce {
                    debounce.forward(amount);
                }
            }
        }
    }

    /// Drop in-flight delayed deliveries.
    pub fn cancel_pending(&self) {
        if let Propagation::Default {
            debounce: Some(debounce),
            ..
        } = self
        {
            debounce.cancel();
        }
    }
}

impl std::fmt::Debug for Propagation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Propagation::Replace(_) => f.write_str("Propagation::Replace"),
            Propagation::Default { debounce, .. } => f
                .debug_struct("Propagation::Default")
                .field("debounced", &debounce.is_some())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingForwarder {
        forwarded: Arc<Mutex<Vec<String>>>,
        cancels: Arc<Mutex<usize>>,
    }

    impl Forwarder for RecordingForwarder {
        fn forward(&self, amount: &str) {
            self.forwarded.lock().unwrap().push(amount.to_string());
        }

        fn cancel(&self) {
            *self.cancels.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_default_routing_calls_setter_and_forwarder() {
        let set = Arc::new(Mutex::new(Vec::new()));
        let sink = set.clone();
        let forwarder = RecordingForwarder::default();

        let mut propagation = Propagation::set_input_debounced(
            move |amount: &str| sink.lock().unwrap().push(amount.to_string()),
            forwarder.clone(),
        );
        propagation.emit("1.5");
        propagation.cancel_pending();

        assert_eq!(*set.lock().unwrap(), vec!["1.5"]);
        assert_eq!(*forwarder.forwarded.lock().unwrap(), vec!["1.5"]);
        assert_eq!(*forwarder.cancels.lock().unwrap(), 1);
    }

    #[test]
    fn test_replace_routing_calls_only_on_change() {
        let changed = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = changed.clone();

        let mut propagation =
            Propagation::on_change(move |amount: &str| sink.lock().unwrap().push(amount.into()));
        propagation.emit("2");
        propagation.cancel_pending();

        assert_eq!(*changed.lock().unwrap(), vec!["2"]);
    }
}
