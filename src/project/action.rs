//! Resolved action metadata.

use std::time::SystemTime;

use indexmap::IndexMap;

use super::uses::{ActionRef, is_action};
use crate::base::constants::DEFAULT_ACTION_FILE;

/// What is known about one `uses:` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubAction {
    /// The raw `uses:` value this entry was resolved from.
    pub uses: String,
    pub reference: ActionRef,
    /// `false` when the reference names a reusable workflow.
    pub is_action: bool,
    /// Declared inputs, name → description.
    pub inputs: IndexMap<String, String>,
    /// Declared outputs, name → description.
    pub outputs: IndexMap<String, String>,
    /// When this entry must be resolved again.
    pub expires_at: SystemTime,
}

impl GitHubAction {
    /// An entry with no inputs or outputs.
    pub fn empty(uses: &str, expires_at: SystemTime) -> Self {
        Self {
            uses: uses.to_string(),
            reference: ActionRef::parse(uses),
            is_action: is_action(uses),
            inputs: IndexMap::new(),
            outputs: IndexMap::new(),
            expires_at,
        }
    }

    pub fn is_expired(&self, now: SystemTime) -> bool {
        self.expires_at <= now
    }

    pub fn is_local(&self) -> bool {
        self.reference.is_local()
    }

    /// File-name-safe identity, used when persisting downloaded definitions.
    ///
    /// `actions/setup-node/dist@v4` becomes `actions_setup-node_dist_v4`.
    pub fn cache_key(&self) -> String {
        let (owner, repo, path, git_ref) = match &self.reference {
            ActionRef::Remote {
                owner,
                repo,
                path,
                git_ref,
            } => (owner.as_str(), repo.as_str(), Some(path.as_str()), Some(git_ref.as_str())),
            ActionRef::Local { path } => ("local", "project", Some(path.as_str()), None),
            ActionRef::Docker { .. } | ActionRef::Unresolved => ("none", self.uses.as_str(), None, None),
        };

        let mut key = format!("{owner}_{repo}");
        if let Some(path) = path {
            let path = path.replace(DEFAULT_ACTION_FILE, "").replace(['/', '.'], "_");
            let path = path.trim_matches('_');
            if !path.is_empty() {
                key.push('_');
                key.push_str(path);
            }
        }
        if let Some(git_ref) = git_ref {
            key.push('_');
            key.push_str(git_ref);
        }
        key
    }
}
