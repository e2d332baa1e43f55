//! # Shared Data Transfer Objects Library
//!
//! Contract between the amount-input core and its external collaborators.
//! DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::wallet`]**: supported wallet descriptors and connected accounts
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format account addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! - Field names use **camelCase** in JSON, matching the wallet registry
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::WalletInfo;
//! use shared::utils::truncate_address;
//!
//! let wallets: Vec<WalletInfo> = serde_json::from_str(
//!     r#"[{ "name": "MetaMask", "icon": "metamask.svg", "connector": "injected" }]"#,
//! ).unwrap();
//! assert_eq!(wallets[0].connector.as_str(), "injected");
//!
//! let display = truncate_address("0x52908400098527886E0F7030069857D2E4169EE7");
//! assert_eq!(display, "0x5290...9EE7");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
