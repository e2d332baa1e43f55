//! # Presentation Helpers
//!
//! - **[`format`]**: display strings for token and USD amounts

pub mod format;
