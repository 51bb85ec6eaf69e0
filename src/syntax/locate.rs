//! Source span assignment.
//!
//! serde_yaml does not report positions, so spans are recovered by walking
//! the tree in pre-order alongside the text. Each node is anchored at its key
//! (`name:`), at its item marker (`-`, `[` or `{`), or at its scalar text,
//! searching forward from the previous anchor. A node whose anchor cannot be
//! found starts where the previous one ended. Anchors are therefore
//! monotonic, which is what [`YamlTree::node_at_offset`] relies on.

use text_size::{TextRange, TextSize};

use super::tree::{NodeId, NodeShape, YamlNode, YamlTree};

pub(super) fn assign_spans(tree: &mut YamlTree, text: &str) {
    let mut starts = Vec::with_capacity(tree.len());
    let mut cursor = 0;
    for node in tree.nodes() {
        if node.is_root() {
            starts.push(0);
            continue;
        }
        match anchor(node, text, cursor) {
            Some((start, next)) => {
                starts.push(start);
                cursor = next;
            }
            None => starts.push(cursor),
        }
    }

    let ranges: Vec<TextRange> = (0..tree.len())
        .map(|i| {
            let end = starts
                .get(tree.subtree_end(NodeId::new(i)))
                .copied()
                .unwrap_or(text.len());
            let start = starts[i];
            TextRange::new(offset(start), offset(end.max(start)))
        })
        .collect();

    for (i, range) in ranges.into_iter().enumerate() {
        tree.set_range(NodeId::new(i), range);
    }
}

fn offset(pos: usize) -> TextSize {
    TextSize::new(pos as u32)
}

/// Start of the node and the cursor position after its anchor.
fn anchor(node: YamlNode<'_>, text: &str, cursor: usize) -> Option<(usize, usize)> {
    if let Some(name) = node.name() {
        return find_key(text, cursor, name);
    }
    match (node.shape(), node.value()) {
        (NodeShape::Scalar, Some(value)) => find_scalar(text, cursor, value),
        (NodeShape::Mapping, _) => find_item_marker(text, cursor, '{'),
        (NodeShape::Sequence, _) => find_item_marker(text, cursor, '['),
        (NodeShape::Scalar, None) => None,
    }
}

/// Find `name:` (optionally quoted) at or after `cursor`, skipping comments.
fn find_key(text: &str, cursor: usize, name: &str) -> Option<(usize, usize)> {
    if name.is_empty() {
        return None;
    }
    let haystack = &text[cursor..];
    for (pos, _) in haystack.match_indices(name) {
        let start = cursor + pos;
        let before = text[..start].chars().next_back();
        let quote = before.filter(|c| matches!(c, '"' | '\''));
        let boundary = match before {
            None => true,
            Some(c) => c.is_whitespace() || matches!(c, '{' | ',' | '?' | '"' | '\''),
        };
        if !boundary || in_comment(text, start) {
            continue;
        }

        let mut rest = &text[start + name.len()..];
        if let Some(q) = quote {
            match rest.strip_prefix(q) {
                Some(stripped) => rest = stripped,
                None => continue,
            }
        }
        let trimmed = rest.trim_start_matches([' ', '\t']);
        if trimmed.starts_with(':') {
            let colon = text.len() - trimmed.len();
            let anchor = if quote.is_some() { start - 1 } else { start };
            return Some((anchor, colon + 1));
        }
    }
    None
}

/// Find an unnamed scalar item by the first line of its text.
fn find_scalar(text: &str, cursor: usize, value: &str) -> Option<(usize, usize)> {
    let first_line = value.lines().next().unwrap_or_default().trim();
    if first_line.is_empty() {
        return None;
    }
    text[cursor..].find(first_line).map(|pos| {
        let start = cursor + pos;
        (start, start + first_line.len())
    })
}

/// Find the marker that opens an unnamed container item: a block `-` or the
/// given flow opener.
fn find_item_marker(text: &str, cursor: usize, opener: char) -> Option<(usize, usize)> {
    let mut prev = text[..cursor].chars().next_back();
    let mut chars = text[cursor..].char_indices().peekable();
    while let Some((pos, c)) = chars.next() {
        let next = chars.peek().map(|(_, c)| *c);
        let block_dash = c == '-'
            && prev.is_none_or(char::is_whitespace)
            && next.is_none_or(char::is_whitespace);
        if block_dash || c == opener {
            let start = cursor + pos;
            return Some((start, start + c.len_utf8()));
        }
        prev = Some(c);
    }
    None
}

/// Whether `pos` is inside a comment: after a `#` that starts the line or
/// follows whitespace, outside quotes.
fn in_comment(text: &str, pos: usize) -> bool {
    let line_start = text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let mut quote = None;
    let mut prev = None;
    for c in text[line_start..pos].chars() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), _) if c == open => quote = None,
            (None, '#') if prev.is_none_or(char::is_whitespace) => return true,
            _ => {}
        }
        prev = Some(c);
    }
    false
}
