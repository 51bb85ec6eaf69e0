//! Resolver settings.

use std::time::Duration;

use crate::base::constants::{FAILURE_TTL, SUCCESS_TTL};

/// Cache lifetimes used by [`super::ActionResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Lifetime of a successfully resolved action.
    pub success_ttl: Duration,
    /// Lifetime of a failed resolution, after which it is retried.
    pub failure_ttl: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            success_ttl: SUCCESS_TTL,
            failure_ttl: FAILURE_TTL,
        }
    }
}

impl ResolverConfig {
    pub fn with_success_ttl(mut self, ttl: Duration) -> Self {
        self.success_ttl = ttl;
        self
    }

    pub fn with_failure_ttl(mut self, ttl: Duration) -> Self {
        self.failure_ttl = ttl;
        self
    }
}
