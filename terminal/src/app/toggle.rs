//! # Unit Toggle Context
//!
//! Page-wide token/fiat toggle shared by every amount field on a page.
//!
//! The context is an explicit handle: each field receives a clone at
//! construction and reads the mode on every edit and render. Clones share
//! one underlying value.

use lib_core::InputMode;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared [`InputMode`] for a page.
#[derive(Debug, Clone, Default)]
pub struct ToggleContext {
    mode: Arc<RwLock<InputMode>>,
}

impl ToggleContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        *self.mode.read()
    }

    pub fn set_mode(&self, mode: InputMode) {
        *self.mode.write() = mode;
    }

    /// Flip the mode and return the new value.
    pub fn toggle(&self) -> InputMode {
        let mut mode = self.mode.write();
        *mode = mode.toggled();
        tracing::debug!(mode = %*mode, "unit toggle switched");
        *mode
    }
}
