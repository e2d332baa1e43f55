//! # Services Module
//!
//! Collaborators behind the swap widgets.
//!
//! ```text
//! services/
//! ├── debounce.rs    - Debounced amount forwarder (tokio task)
//! ├── token_list.rs  - Token records offered by the picker
//! └── wallet.rs      - Connection state, account store, local connector
//! ```
//!
//! ## Threading
//!
//! - **Debouncer**: owns a background task; the handle is `Send` and is moved
//!   into the field's propagation
//! - **InMemoryAccountStore**: `parking_lot::RwLock` inside, share it in an `Arc`
//! - **TokenList**: plain data, cloned into each picker

pub mod debounce;
pub mod token_list;
pub mod wallet;

pub use debounce::Debouncer;
pub use token_list::TokenList;
pub use wallet::{ConnectError, ConnectionState, InMemoryAccountStore, LocalConnector};
