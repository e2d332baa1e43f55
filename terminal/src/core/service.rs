//! # Service Traits
//!
//! Collaborator traits for dependency injection, so the wallet dialog can be
//! driven by a real connector in the binary and by mocks in tests.

use crate::services::wallet::ConnectError;
use async_trait::async_trait;
use shared::{ConnectedAccount, ConnectorId};

/// Activates a wallet through one of its connectors.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Ask the wallet behind `connector` for an account.
    ///
    /// Fails with [`ConnectError::UnsupportedNetwork`] when the wallet is on a
    /// chain the app does not serve; callers may retry once.
    async fn activate(&self, connector: &ConnectorId) -> Result<ConnectedAccount, ConnectError>;
}

/// Receives the connected account and the auto-login preference.
pub trait AccountStore: Send + Sync {
    fn set_account(&self, account: ConnectedAccount);

    fn set_auto_login(&self, enabled: bool);
}
