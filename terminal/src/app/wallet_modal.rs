//! # Wallet Connection Dialog
//!
//! Lists the supported wallets, activates the one the user picks and reports
//! the account to the [`AccountStore`].
//!
//! ```text
//! open() ──► Idle ──try_connecting──► Connecting ──ok──► Connected (closed)
//!                                        │
//!                                        ├─ UnsupportedNetwork ─► auto-login, retry once
//!                                        └─ other error ───────► Error
//! ```

use crate::core::error::Result;
use crate::core::service::{AccountStore, WalletConnector};
use crate::services::wallet::{ConnectError, ConnectionState};
use serde::Serialize;
use shared::{ConnectedAccount, WalletInfo};
use std::sync::Arc;

/// Renderable state of the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletModalView {
    pub open: bool,
    pub title: &'static str,
    /// Wallet list, empty once a wallet is selected.
    pub wallets: Vec<WalletInfo>,
    pub selected: Option<WalletInfo>,
    pub pending: bool,
    pub error: Option<&'static str>,
}

pub struct WalletModal<C: WalletConnector + ?Sized, S: AccountStore + ?Sized> {
    wallets: Vec<WalletInfo>,
    connector: Arc<C>,
    accounts: Arc<S>,
    open: bool,
    state: ConnectionState,
    selected: Option<WalletInfo>,
}

impl<C, S> WalletModal<C, S>
where
    C: WalletConnector + ?Sized,
    S: AccountStore + ?Sized,
{
    pub fn new(wallets: Vec<WalletInfo>, connector: Arc<C>, accounts: Arc<S>) -> Self {
        Self {
            wallets,
            connector,
            accounts,
            open: false,
            state: ConnectionState::Idle,
            selected: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&WalletInfo> {
        self.selected.as_ref()
    }

    /// Show the dialog with a fresh wallet list.
    pub fn open(&mut self) {
        self.open = true;
        self.state = ConnectionState::Idle;
        self.selected = None;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Activate `wallet`.
    ///
    /// An unsupported network enables auto-login and retries once. A failed
    /// retry is not surfaced: the dialog stays in `Connecting` and `Ok(None)`
    /// is returned. Any other failure moves the dialog to `Error`.
    pub async fn try_connecting(&mut self, wallet: WalletInfo) -> Result<Option<ConnectedAccount>> {
        tracing::info!(wallet = %wallet.name, connector = %wallet.connector, "connecting wallet");
        self.state = ConnectionState::Connecting;
        self.selected = Some(wallet.clone());

        match self.connector.activate(&wallet.connector).await {
            Ok(account) => Ok(Some(self.connected(account))),
            Err(ConnectError::UnsupportedNetwork) => {
                tracing::debug!(wallet = %wallet.name, "unsupported network, retrying activation");
                self.accounts.set_auto_login(true);
                match self.connector.activate(&wallet.connector).await {
                    Ok(account) => Ok(Some(self.connected(account))),
                    Err(err) => {
                        tracing::debug!(
                            wallet = %wallet.name,
                            error = %err,
                            "retry did not connect"
                        );
                        Ok(None)
                    }
                }
            }
            Err(err) => {
                tracing::warn!(wallet = %wallet.name, error = %err, "wallet connection failed");
                self.state = ConnectionState::Error;
                Err(err.into())
            }
        }
    }

    fn connected(&mut self, account: ConnectedAccount) -> ConnectedAccount {
        self.accounts.set_auto_login(true);
        self.on_account(Some(&account));
        self.accounts.set_account(account.clone());
        self.state = ConnectionState::Connected(account.clone());
        account
    }

    /// React to the account reported by the wallet; a present account closes
    /// the dialog.
    pub fn on_account(&mut self, account: Option<&ConnectedAccount>) {
        if account.is_some() {
            self.open = false;
        }
    }

    pub fn title(&self) -> &'static str {
        match self.state {
            ConnectionState::Error => "Wallet Error",
            ConnectionState::Connecting => "Connecting to ...",
            _ => "Connect Wallet",
        }
    }

    pub fn view(&self) -> WalletModalView {
        WalletModalView {
            open: self.open,
            title: self.title(),
            wallets: if self.selected.is_none() {
                self.wallets.clone()
            } else {
                Vec::new()
            },
            selected: self.selected.clone(),
            pending: self.state == ConnectionState::Connecting,
            error: (self.state == ConnectionState::Error).then_some("Failed to connect to wallet."),
        }
    }
}
