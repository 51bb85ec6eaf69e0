//! Foundation types for the actionsense toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Position`], [`LineIndex`] - Line/column conversion
//! - Domain constants (workflow field names, cache lifetimes)
//!
//! This module has NO dependencies on other actionsense modules.

pub mod constants;
mod position;

pub use position::{LineIndex, Position};

pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
