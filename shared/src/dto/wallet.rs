//! # Wallet DTOs
//!
//! Descriptors of the wallets the connection dialog offers, and the account
//! record reported back once a wallet is connected.
//!
//! ## Example
//!
//! ```json
//! [
//!   { "name": "MetaMask", "icon": "metamask.svg", "connector": "injected" },
//!   { "name": "WalletConnect", "icon": "walletconnect.svg", "connector": "walletconnect" }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle identifying the connector that activates a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorId(String);

impl ConnectorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wallet offered in the connection dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    /// Display name (e.g., "MetaMask")
    pub name: String,
    /// Icon reference shown next to the name
    pub icon: String,
    /// Connector used to activate the wallet
    pub connector: ConnectorId,
}

impl WalletInfo {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, connector: ConnectorId) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            connector,
        }
    }
}

/// Account returned by a successful wallet activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedAccount {
    /// Account address
    pub address: String,
    /// Chain the wallet is connected to, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_info_roundtrip_field_names() {
        let info = WalletInfo::new("MetaMask", "metamask.svg", ConnectorId::new("injected"));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["connector"], "injected");
        assert_eq!(json["name"], "MetaMask");
    }

    #[test]
    fn test_connected_account_omits_unknown_chain() {
        let account = ConnectedAccount {
            address: "0xabc".to_string(),
            chain_id: None,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, r#"{"address":"0xabc"}"#);
    }
}
