//! Action resolution tests
//!
//! Tests for:
//! - Resolving remote actions, reusable workflows and local actions
//! - Metadata cache reuse and expiry across analysis requests

pub mod tests_resolver;
