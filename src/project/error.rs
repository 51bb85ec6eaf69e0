//! Error types for action resolution.
//!
//! None of these reach callers of [`super::ActionResolver::resolve`]; they
//! are logged and turned into empty, short-lived cache entries.

use thiserror::Error;

use crate::syntax::SyntaxError;

/// Failure reported by a content collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No authenticated account is available for remote fetches.
    #[error("No account configured for remote fetches")]
    NoAccount,

    /// The file does not exist at the requested location.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure (connection, status, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// IO error while reading a local file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Create a not-found error.
    pub fn not_found(location: impl Into<String>) -> Self {
        Self::NotFound(location.into())
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

/// Why a `uses:` reference produced no metadata.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The fetched definition is not YAML.
    #[error("Invalid action definition: {0}")]
    Parse(#[from] SyntaxError),

    /// The reference has a shape that carries no metadata.
    #[error("Unsupported reference: {0}")]
    Unsupported(String),
}
