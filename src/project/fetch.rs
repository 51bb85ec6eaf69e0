//! Collaborators that supply definition file contents.
//!
//! Transport, authentication and the project tree live outside this crate.
//! The resolver only sees these traits.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::FetchError;
use crate::base::constants::{GITHUB_API_URL, RAW_CONTENT_MEDIA_TYPE};

/// Fetches a file from a repository host.
pub trait ContentFetcher: Send + Sync {
    fn fetch_remote_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: &str,
    ) -> Result<String, FetchError>;
}

/// Reads files of the project the document belongs to.
pub trait ProjectFiles: Send + Sync {
    /// Contents of `relative` (e.g. `./.github/actions/x/action.yml`), or
    /// `None` when it does not exist.
    fn read_project_relative_file(&self, relative: &str) -> Option<String>;
}

/// Tells whether an authenticated account is available for remote fetches.
pub trait AccountProvider: Send + Sync {
    fn has_account(&self) -> bool;
}

/// Project files on disk below a root directory.
#[derive(Debug, Clone)]
pub struct FsProjectFiles {
    root: PathBuf,
}

impl FsProjectFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ProjectFiles for FsProjectFiles {
    fn read_project_relative_file(&self, relative: &str) -> Option<String> {
        let relative = relative.trim_start_matches("./");
        let path = self.root.join(relative);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) => {
                tracing::debug!("cannot read {}: {err}", path.display());
                None
            }
        }
    }
}

/// A project with no files.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProjectFiles;

impl ProjectFiles for NoProjectFiles {
    fn read_project_relative_file(&self, _relative: &str) -> Option<String> {
        None
    }
}

/// A fetcher that fails every request, for setups without network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFetcher;

impl ContentFetcher for OfflineFetcher {
    fn fetch_remote_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        _git_ref: &str,
    ) -> Result<String, FetchError> {
        Err(FetchError::network(format!("offline: {owner}/{repo}/{path}")))
    }
}

/// Wraps a fetcher and refuses to fetch without an account.
pub struct AuthenticatedFetcher {
    inner: Arc<dyn ContentFetcher>,
    accounts: Arc<dyn AccountProvider>,
}

impl AuthenticatedFetcher {
    pub fn new(inner: Arc<dyn ContentFetcher>, accounts: Arc<dyn AccountProvider>) -> Self {
        Self { inner, accounts }
    }
}

impl ContentFetcher for AuthenticatedFetcher {
    fn fetch_remote_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: &str,
    ) -> Result<String, FetchError> {
        if !self.accounts.has_account() {
            return Err(FetchError::NoAccount);
        }
        self.inner.fetch_remote_file(owner, repo, path, git_ref)
    }
}

/// A repository contents API request, for transport implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub url: String,
    /// Value for the `Accept` header.
    pub accept: &'static str,
}

impl ContentRequest {
    pub fn new(owner: &str, repo: &str, path: &str, git_ref: &str) -> Self {
        let path = path.trim_start_matches('/');
        let mut url = format!("{GITHUB_API_URL}/repos/{owner}/{repo}/contents/{path}");
        if !git_ref.trim().is_empty() {
            url.push_str("?ref=");
            url.push_str(git_ref);
        }
        Self {
            url,
            accept: RAW_CONTENT_MEDIA_TYPE,
        }
    }
}
