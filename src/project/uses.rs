//! The `uses:` reference grammar.
//!
//! ```text
//! owner/repo@ref                    action, path defaults to action.yml
//! owner/repo/dir@ref                action in a subdirectory: dir/action.yml
//! owner/repo/.github/workflows/x.yml@ref
//!                                   reusable workflow, path kept as is
//! ./relative/dir                    local action: ./relative/dir/action.yml
//! ./.github/workflows/x.yml         local reusable workflow
//! docker://image:tag                recognized, carries no metadata
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::base::constants::{DEFAULT_ACTION_FILE, DOCKER_PREFIX, GITHUB_WEB_URL, WORKFLOWS_SEGMENT};

static REMOTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<owner>.+?)/(?<repo>.+?)(/(?<path>.+))?@(?<ref>.+)$")
        .expect("remote uses pattern is valid")
});

/// What a `uses:` string points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionRef {
    /// An action or reusable workflow in a repository.
    Remote {
        owner: String,
        repo: String,
        /// Definition file inside the repository.
        path: String,
        git_ref: String,
    },
    /// A definition file in the current project, relative to its root.
    Local { path: String },
    /// A container image. Never fetched.
    Docker { image: String },
    /// Anything the grammar does not recognize.
    Unresolved,
}

impl ActionRef {
    pub fn parse(uses: &str) -> Self {
        let uses = uses.trim();
        if let Some(image) = uses.strip_prefix(DOCKER_PREFIX) {
            return ActionRef::Docker {
                image: image.to_string(),
            };
        }

        if uses.starts_with('.') {
            let dir = uses.trim_end_matches('/');
            let path = if is_action(uses) {
                format!("{dir}/{DEFAULT_ACTION_FILE}")
            } else {
                dir.to_string()
            };
            return ActionRef::Local { path };
        }

        let Some(captures) = REMOTE_PATTERN.captures(uses) else {
            return ActionRef::Unresolved;
        };

        let path = match captures.name("path").map(|m| m.as_str()) {
            None => DEFAULT_ACTION_FILE.to_string(),
            Some(path) if path.ends_with(".yml") || path.ends_with(".yaml") => path.to_string(),
            Some(path) => format!("{path}/{DEFAULT_ACTION_FILE}"),
        };
        ActionRef::Remote {
            owner: captures["owner"].to_string(),
            repo: captures["repo"].to_string(),
            path,
            git_ref: captures["ref"].to_string(),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ActionRef::Local { .. })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ActionRef::Remote { .. })
    }

    /// Whether metadata can be fetched for this reference.
    pub fn is_fetchable(&self) -> bool {
        self.is_local() || self.is_remote()
    }

    /// Path of the definition file, for local and remote references.
    pub fn path(&self) -> Option<&str> {
        match self {
            ActionRef::Remote { path, .. } | ActionRef::Local { path } => Some(path),
            ActionRef::Docker { .. } | ActionRef::Unresolved => None,
        }
    }

    /// Repository page of a remote reference, at its ref.
    pub fn web_url(&self) -> Option<String> {
        match self {
            ActionRef::Remote {
                owner,
                repo,
                git_ref,
                ..
            } => {
                let mut url = format!("{GITHUB_WEB_URL}/{owner}/{repo}");
                if !git_ref.trim().is_empty() {
                    url.push_str("/tree/");
                    url.push_str(git_ref);
                }
                Some(url)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ActionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionRef::Remote {
                owner,
                repo,
                path,
                git_ref,
            } => write!(f, "{owner}/{repo}/{path}@{git_ref}"),
            ActionRef::Local { path } => f.write_str(path),
            ActionRef::Docker { image } => write!(f, "{DOCKER_PREFIX}{image}"),
            ActionRef::Unresolved => f.write_str("<unresolved>"),
        }
    }
}

/// `true` for actions, `false` for reusable workflow references.
pub fn is_action(uses: &str) -> bool {
    !uses.contains(WORKFLOWS_SEGMENT)
}
