//! Helpers for setting up analysis hosts with canned action metadata.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actionsense::TextSize;
use actionsense::ide::AnalysisHost;
use actionsense::project::{ActionCache, ActionResolver, ContentFetcher, FetchError, ProjectFiles};

/// Serves files keyed by `owner/repo/path@ref` and counts requests.
#[derive(Default)]
pub struct FakeHost {
    files: HashMap<String, &'static str>,
    requests: AtomicUsize,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, key: &str, body: &'static str) -> Self {
        self.files.insert(key.to_string(), body);
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ContentFetcher for FakeHost {
    fn fetch_remote_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: &str,
    ) -> Result<String, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let key = format!("{owner}/{repo}/{path}@{git_ref}");
        self.files
            .get(&key)
            .map(|body| body.to_string())
            .ok_or_else(|| FetchError::not_found(key))
    }
}

/// Project files held in memory, keyed by their `./`-relative path.
#[derive(Default)]
pub struct MemoryProject {
    files: HashMap<String, &'static str>,
}

impl MemoryProject {
    pub fn with_file(mut self, path: &str, body: &'static str) -> Self {
        self.files.insert(path.trim_start_matches("./").to_string(), body);
        self
    }
}

impl ProjectFiles for MemoryProject {
    fn read_project_relative_file(&self, relative: &str) -> Option<String> {
        self.files
            .get(relative.trim_start_matches("./"))
            .map(|body| body.to_string())
    }
}

/// A host backed by `fake` and `project`.
pub fn host_with(fake: Arc<FakeHost>, project: MemoryProject) -> AnalysisHost {
    let resolver = ActionResolver::new(Arc::new(ActionCache::new()), fake)
        .with_project_files(Arc::new(project));
    AnalysisHost::new(Arc::new(resolver))
}

/// Offset just past the last occurrence of `marker`.
pub fn caret_after(text: &str, marker: &str) -> TextSize {
    let at = text
        .rfind(marker)
        .unwrap_or_else(|| panic!("marker {marker:?} not in text"));
    TextSize::new((at + marker.len()) as u32)
}

/// Labels of the completions with the caret after `marker`.
pub fn completion_labels(host: &AnalysisHost, text: &str, path: &str, marker: &str) -> Vec<String> {
    host.analysis(text, Some(Path::new(path)), caret_after(text, marker))
        .completions()
        .iter()
        .map(|item| item.label.to_string())
        .collect()
}
