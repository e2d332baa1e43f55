//! # Amount Input Model
//!
//! Value types read and written by the amount synchronizer.
//!
//! - **[`token`]**: token records supplied by the token-data collaborator
//! - **[`amount`]**: the token/fiat [`AmountPair`] and the [`InputMode`] toggle

pub mod amount;
pub mod token;

pub use amount::{AmountPair, InputMode};
pub use token::Token;
