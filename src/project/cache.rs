//! Caller-owned action metadata cache.

use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::action::GitHubAction;

/// Resolved actions keyed by their raw `uses:` string.
///
/// Safe to share between threads. Two requests missing the same key at once
/// both resolve it; whichever inserts last wins.
#[derive(Debug, Default)]
pub struct ActionCache {
    entries: RwLock<FxHashMap<String, Arc<GitHubAction>>>,
}

impl ActionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for `uses`, whether or not it has expired.
    pub fn get(&self, uses: &str) -> Option<Arc<GitHubAction>> {
        self.entries.read().get(uses).cloned()
    }

    /// The entry for `uses` if it is still valid at `now`.
    pub fn get_fresh(&self, uses: &str, now: SystemTime) -> Option<Arc<GitHubAction>> {
        self.get(uses).filter(|action| !action.is_expired(now))
    }

    pub fn insert(&self, action: Arc<GitHubAction>) {
        self.entries.write().insert(action.uses.clone(), action);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Drop every entry that has expired at `now`. Returns how many went.
    pub fn evict_expired(&self, now: SystemTime) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, action| !action.is_expired(now));
        before - entries.len()
    }
}
