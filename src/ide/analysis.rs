//! AnalysisHost and Analysis: per-request state for IDE features.
//!
//! The `AnalysisHost` owns what outlives a request: the action resolver and
//! its cache. Each completion request gets an `Analysis` for one document
//! text and caret.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new(resolver);
//! let analysis = host.analysis(text, Some(path), caret);
//! // or, from an editor position
//! let analysis = host.analysis_at(text, Some(path), Position::new(line, column));
//! let items = analysis.completions();
//! ```

use std::path::Path;
use std::sync::Arc;

use once_cell::unsync::OnceCell;
use text_size::TextSize;

use super::completion::{CompletionItem, completions};
use super::document_links::{DocumentLink, document_links};
use super::expression::{PathCompletion, resolve_at_caret};
use crate::base::{LineIndex, Position};
use crate::hir::{ActionLookup, DocumentKind, WorkflowIndex};
use crate::project::{ActionCache, ActionResolver, OfflineFetcher};

/// Owns the state shared by all requests.
pub struct AnalysisHost {
    resolver: Arc<ActionResolver>,
}

impl AnalysisHost {
    pub fn new(resolver: Arc<ActionResolver>) -> Self {
        Self { resolver }
    }

    /// A host that resolves nothing remotely.
    pub fn offline() -> Self {
        let resolver = ActionResolver::new(Arc::new(ActionCache::new()), Arc::new(OfflineFetcher));
        Self::new(Arc::new(resolver))
    }

    pub fn resolver(&self) -> &Arc<ActionResolver> {
        &self.resolver
    }

    /// Start a request for `text` with the caret at `caret`.
    ///
    /// `path` classifies the document; without one the kind is inferred from
    /// the content.
    pub fn analysis<'a>(
        &'a self,
        text: &'a str,
        path: Option<&Path>,
        caret: TextSize,
    ) -> Analysis<'a> {
        let kind = path.map(DocumentKind::from_path).unwrap_or_default();
        Analysis::new(text, kind, caret, self.resolver.as_ref())
    }

    /// Like [`analysis`](Self::analysis), with the caret given as an editor
    /// line and column. A line past the end of the text puts the caret at
    /// the end.
    pub fn analysis_at<'a>(
        &'a self,
        text: &'a str,
        path: Option<&Path>,
        position: Position,
    ) -> Analysis<'a> {
        let caret = LineIndex::new(text)
            .offset(text, position)
            .unwrap_or_else(|| TextSize::of(text));
        self.analysis(text, path, caret)
    }
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::offline()
    }
}

/// One request over one document.
///
/// The partial index (text up to the end of the caret line) is built up
/// front. The full index is built on first use, at most once, and falls back
/// to the partial index when the whole text does not decode.
pub struct Analysis<'a> {
    text: &'a str,
    kind: DocumentKind,
    caret: TextSize,
    partial: WorkflowIndex,
    full: OnceCell<WorkflowIndex>,
    actions: &'a dyn ActionLookup,
}

impl<'a> Analysis<'a> {
    pub fn new(
        text: &'a str,
        kind: DocumentKind,
        caret: TextSize,
        actions: &'a dyn ActionLookup,
    ) -> Self {
        let caret = caret.min(TextSize::of(text));
        let partial = WorkflowIndex::parse_partial(text, kind, caret);
        Self {
            text,
            kind,
            caret,
            partial,
            full: OnceCell::new(),
            actions,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn caret(&self) -> TextSize {
        self.caret
    }

    pub(crate) fn caret_offset(&self) -> usize {
        usize::from(self.caret)
    }

    pub fn kind(&self) -> DocumentKind {
        self.partial.kind()
    }

    pub fn actions(&self) -> &'a dyn ActionLookup {
        self.actions
    }

    /// Index over the text up to the end of the caret line.
    pub fn partial(&self) -> &WorkflowIndex {
        &self.partial
    }

    /// Index over the whole text.
    pub fn full(&self) -> &WorkflowIndex {
        self.full.get_or_init(|| {
            let full = WorkflowIndex::parse(self.text, self.kind, self.caret);
            if full.is_parsed() {
                full
            } else {
                tracing::debug!("full text does not decode, using partial index");
                self.partial.clone()
            }
        })
    }

    pub fn completions(&self) -> Vec<CompletionItem> {
        completions(self)
    }

    /// Expression path resolution at the caret, with its end state.
    pub fn expression(&self) -> PathCompletion {
        resolve_at_caret(self)
    }

    pub fn document_links(&self) -> Vec<DocumentLink> {
        document_links(self.text, self.full())
    }
}
