//! Shared helpers for the integration tests.

pub mod analysis_helpers;
pub mod source_fixtures;
