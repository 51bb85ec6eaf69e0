//! Document links: `uses:` values linked to their repositories.

use std::borrow::Cow;

use text_size::{TextRange, TextSize};

use crate::base::constants::FIELD_USES;
use crate::hir::WorkflowIndex;
use crate::project::ActionRef;

/// A link from a span of the document to a web page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    /// The `uses:` value.
    pub range: TextRange,
    pub target: String,
    /// Tooltip text for the link.
    pub tooltip: Cow<'static, str>,
}

/// Repository page for a `uses:` value. Local, docker and unrecognized
/// references have none.
pub fn uses_link(uses: &str) -> Option<String> {
    ActionRef::parse(uses).web_url()
}

/// Links for every single-line `uses:` value in the document.
pub fn document_links(text: &str, index: &WorkflowIndex) -> Vec<DocumentLink> {
    let Some(root) = index.root() else {
        return Vec::new();
    };

    root.collect_where(|node| node.has_name(FIELD_USES))
        .into_iter()
        .filter_map(|node| {
            let value = node.value().filter(|value| !value.contains('\n'))?;
            let target = uses_link(value)?;

            let span = node.range();
            let source = text.get(usize::from(span.start())..usize::from(span.end()))?;
            let key_end = source.find(':')? + 1;
            let offset = source[key_end..].find(value)? + key_end;
            let start = span.start() + TextSize::new(offset as u32);
            Some(DocumentLink {
                range: TextRange::at(start, TextSize::of(value)),
                target,
                tooltip: Cow::Borrowed("Open repository"),
            })
        })
        .collect()
}
