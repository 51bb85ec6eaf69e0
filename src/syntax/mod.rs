//! Syntax layer: YAML text → ordered node tree.
//!
//! The tree is deliberately schema-free. It knows mappings, sequences and
//! scalars, keeps mapping order as written, and records a source span per
//! node so callers can ask "which node is the caret on". Workflow meaning
//! lives in [`crate::hir`].
//!
//! ## Parsing entry points
//!
//! - [`parse`] decodes complete text; failures yield `None`
//! - [`try_parse`] does the same but keeps the error
//! - [`parse_partial`] decodes text that was cut at the caret line and
//!   repairs the common shapes of a half-typed last line first

mod decode;
mod error;
mod locate;
mod tree;


pub use error::SyntaxError;
pub use tree::{NodeId, NodeShape, YamlNode, YamlTree};

/// Decode YAML text into a tree, or `None` when the text is not YAML.
pub fn parse(text: &str) -> Option<YamlTree> {
    match try_parse(text) {
        Ok(tree) => Some(tree),
        Err(err) => {
            tracing::trace!("yaml decode failed: {err}");
            None
        }
    }
}

/// Decode YAML text into a tree, keeping the decoding error.
pub fn try_parse(text: &str) -> Result<YamlTree, SyntaxError> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    let mut tree = decode::build(value).ok_or(SyntaxError::EmptyDocument)?;
    locate::assign_spans(&mut tree, text);
    Ok(tree)
}

/// Decode text that ends on a line the user is still typing.
///
/// Tries the text as is first. If that fails, the last line is repaired by
/// closing unbalanced flow collections and quotes, or by turning a bare word
/// into a key, and decoding is retried.
pub fn parse_partial(text: &str) -> Option<YamlTree> {
    let err = match try_parse(text) {
        Ok(tree) => return Some(tree),
        Err(err) => err,
    };
    tracing::trace!("partial yaml decode failed, repairing last line: {err}");

    let line_start = text.rfind('\n').map(|pos| pos + 1).unwrap_or(0);
    let (head, last_line) = text.split_at(line_start);
    repairs(last_line)
        .into_iter()
        .find_map(|repaired| try_parse(&format!("{head}{repaired}")).ok())
}

/// Candidate rewrites of a half-typed line, most specific first.
fn repairs(line: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    let mut closers = String::new();
    let mut stack = Vec::new();
    let mut quote = None;
    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '[') => stack.push(']'),
            (None, '{') => stack.push('}'),
            (None, ']' | '}') => {
                stack.pop();
            }
            _ => {}
        }
    }
    if let Some(q) = quote {
        closers.push(q);
    }
    closers.extend(stack.iter().rev());
    if !closers.is_empty() {
        candidates.push(format!("{line}{closers}"));
    }

    let trimmed = line.trim_end();
    let word = trimmed.trim_start().trim_start_matches("- ");
    if !word.is_empty() && !word.contains(':') && !word.starts_with(['[', '{', '#']) {
        candidates.push(format!("{trimmed}:"));
    }

    candidates
}
