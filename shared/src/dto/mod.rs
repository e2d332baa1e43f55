//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`wallet`] - Supported wallet descriptors and connected account records
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase via `#[serde(rename_all = "camelCase")]`
//! - **Optional fields**: Omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod wallet;

pub use wallet::*;
