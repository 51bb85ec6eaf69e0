//! IDE feature tests
//!
//! Tests for:
//! - Completion in `with:` blocks and `needs:`
//! - Expression path completion
//! - Document links

pub mod tests_completion;
pub mod tests_expressions;
pub mod tests_links;
