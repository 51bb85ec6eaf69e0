//! Action resolution: the `uses:` grammar, definition fetching and the
//! metadata cache.
//!
//! ## Key Types
//!
//! - [`ActionResolver`]: resolves a `uses:` string to a [`GitHubAction`]
//! - [`ActionCache`]: caller-owned, thread-safe cache of resolved actions
//! - [`ActionRef`]: parsed form of a `uses:` string
//! - [`ContentFetcher`], [`ProjectFiles`], [`AccountProvider`]: the
//!   collaborators that supply file contents
//!
//! ## Cache lifetimes
//!
//! A successful resolution stays valid for a day, a failed one for ten
//! minutes (see [`ResolverConfig`]). Time is read through a [`Clock`].

mod action;
mod cache;
mod clock;
mod config;
mod error;
mod fetch;
mod resolver;
mod uses;

#[cfg(test)]
mod tests;

pub use action::GitHubAction;
pub use cache::ActionCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ResolverConfig;
pub use error::{FetchError, ResolveError};
pub use fetch::{
    AccountProvider, AuthenticatedFetcher, ContentFetcher, ContentRequest, FsProjectFiles,
    NoProjectFiles, OfflineFetcher, ProjectFiles,
};
pub use resolver::ActionResolver;
pub use uses::{ActionRef, is_action};
