//! Error types for YAML decoding.

use thiserror::Error;

/// Errors that can occur while turning text into a [`super::YamlTree`].
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The text is not well-formed YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document decoded to `null` (empty or comment-only text).
    #[error("Empty document")]
    EmptyDocument,
}
