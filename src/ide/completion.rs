//! Completion items and the completion entry point.

use std::sync::Arc;

use indexmap::IndexMap;

use super::analysis::Analysis;
use super::expression::resolve_path;
use crate::base::constants::FIELD_NEEDS;
use crate::core::text_utils::{extract_word_before_cursor, fuzzy_matches};
use crate::parser::BracketExpression;

/// Icon category of a completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Job,
    Step,
    Env,
    Input,
    Output,
    Secret,
    /// A context root or other structural name.
    Node,
    Needs,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Job => 7,     // Class
            CompletionKind::Step => 3,    // Function
            CompletionKind::Env => 6,     // Variable
            CompletionKind::Input => 5,   // Field
            CompletionKind::Output => 10, // Property
            CompletionKind::Secret => 21, // Constant
            CompletionKind::Node => 9,    // Module
            CompletionKind::Needs => 18,  // Reference
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The name being completed.
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Rendered value or description, shown after the label.
    pub detail: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            insert_text: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text. Empty text leaves it unset.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        let detail = detail.into();
        self.detail = (!detail.is_empty()).then_some(detail);
        self
    }

    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Text that ends up in the document when the item is accepted.
    pub fn text_to_insert(&self) -> &str {
        self.insert_text.as_deref().unwrap_or(&self.label)
    }
}

/// Items for `name → detail` pairs, ranked in map order.
pub(crate) fn items_of<'a, I>(pairs: I, kind: CompletionKind) -> Vec<CompletionItem>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (name, detail))| {
            CompletionItem::new(name, kind)
                .with_detail(detail)
                .with_priority(i as u32)
        })
        .collect()
}

pub(crate) fn items_of_map(map: &IndexMap<String, String>, kind: CompletionKind) -> Vec<CompletionItem> {
    items_of(map.iter().map(|(k, v)| (k.as_str(), v.as_str())), kind)
}

/// Keep the items whose label matches `prefix`.
pub(crate) fn filter_by_prefix(items: Vec<CompletionItem>, prefix: &str) -> Vec<CompletionItem> {
    items
        .into_iter()
        .filter(|item| fuzzy_matches(prefix, &item.label))
        .collect()
}

/// Completion suggestions at the analysis caret.
///
/// Inside `${{ … }}` the dotted path is resolved; otherwise `needs:` gets job
/// ids and a `with:` block gets the inputs of the step's action.
pub fn completions(analysis: &Analysis<'_>) -> Vec<CompletionItem> {
    if let Some(expr) = BracketExpression::at_caret(analysis.text(), analysis.caret_offset()) {
        return resolve_path(analysis, &expr).items;
    }

    let prefix = extract_word_before_cursor(analysis.text(), analysis.caret_offset());
    let items = if in_needs(analysis) {
        needs_items(analysis)
    } else {
        with_items(analysis)
    };
    filter_by_prefix(items, prefix)
}

/// The caret is on `needs:` or on one of its list items.
fn in_needs(analysis: &Analysis<'_>) -> bool {
    analysis.partial().current_node().is_some_and(|node| {
        node.has_name(FIELD_NEEDS) || (node.name().is_none() && node.has_parent(FIELD_NEEDS))
    })
}

/// Every job except the one being edited.
fn needs_items(analysis: &Analysis<'_>) -> Vec<CompletionItem> {
    let scope = analysis.partial().current_scope();
    let mut jobs = analysis.full().jobs();
    if let Some(current) = scope.job() {
        jobs.shift_remove(current);
    }
    items_of_map(&jobs, CompletionKind::Needs)
}

/// Inputs of the action used by the step whose `with:` block holds the caret.
fn with_items(analysis: &Analysis<'_>) -> Vec<CompletionItem> {
    let Some(node) = analysis.partial().current_node() else {
        return Vec::new();
    };
    let full = analysis.full();
    let inputs = full
        .counterpart(node)
        .and_then(|anchor| full.action_inputs_at(anchor, analysis.actions()))
        .or_else(|| analysis.partial().action_inputs_at(node, analysis.actions()))
        .unwrap_or_default();

    items_of_map(&inputs, CompletionKind::Input)
        .into_iter()
        .map(|item| {
            let insert = format!("{}: ", item.label);
            item.with_insert_text(insert)
        })
        .collect()
}
