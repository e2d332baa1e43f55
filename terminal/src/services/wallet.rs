//! # Wallet Service
//!
//! Connection errors and state for the wallet dialog, plus the local
//! implementations of the collaborator traits used by the binary.
//!
//! ## Features
//! - [`ConnectError`] reported by wallet connectors
//! - [`ConnectionState`] of a connection attempt
//! - [`InMemoryAccountStore`] holding the connected account
//! - [`LocalConnector`] answering every activation with a fixed account

use crate::core::service::{AccountStore, WalletConnector};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared::{ConnectedAccount, ConnectorId};
use thiserror::Error;

/// Wallet activation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectError {
    /// The wallet is connected to a chain the app does not serve
    #[error("Unsupported network")]
    UnsupportedNetwork,
    /// The wallet refused or failed the activation
    #[error("Connection rejected: {0}")]
    Rejected(String),
}

/// Wallet connection status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No attempt in progress
    #[default]
    Idle,
    /// Activation requested, waiting for the wallet
    Connecting,
    /// Connected with account
    Connected(ConnectedAccount),
    /// Last attempt failed
    Error,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(_))
    }
}

/// Account store kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    account: RwLock<Option<ConnectedAccount>>,
    auto_login: RwLock<bool>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self) -> Option<ConnectedAccount> {
        self.account.read().clone()
    }

    pub fn auto_login(&self) -> bool {
        *self.auto_login.read()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn set_account(&self, account: ConnectedAccount) {
        tracing::info!(address = %account.address, chain_id = ?account.chain_id, "account stored");
        *self.account.write() = Some(account);
    }

    fn set_auto_login(&self, enabled: bool) {
        *self.auto_login.write() = enabled;
    }
}

/// Connector that activates every wallet with the same local account.
#[derive(Debug, Clone)]
pub struct LocalConnector {
    address: String,
    chain_id: u64,
}

impl LocalConnector {
    /// Connector for `address` on Ethereum mainnet.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            chain_id: 1,
        }
    }
}

#[async_trait]
impl WalletConnector for LocalConnector {
    async fn activate(&self, connector: &ConnectorId) -> Result<ConnectedAccount, ConnectError> {
        if self.address.is_empty() {
            return Err(ConnectError::Rejected(format!(
                "no local account for connector {}",
                connector
            )));
        }
        tracing::debug!(%connector, address = %self.address, "local wallet activated");
        Ok(ConnectedAccount {
            address: self.address.clone(),
            chain_id: Some(self.chain_id),
        })
    }
}
