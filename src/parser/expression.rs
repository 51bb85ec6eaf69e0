//! Extraction of the dotted path being typed inside `${{ … }}`.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::lexer::{TokenKind, tokenize};
use crate::core::text_utils::caret_line_start;

const OPEN: &str = "${{";
const CLOSE: &str = "}}";

/// The dotted path under the caret inside an open bracket expression.
///
/// For `${{ jobs.build.outputs.ver` the segments are `["jobs", "build",
/// "outputs"]` and the prefix is `ver`. When the caret is still on the root
/// word (`${{ jo`) the segment list is empty and the prefix holds the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketExpression {
    segments: Vec<SmolStr>,
    prefix: SmolStr,
    /// Range of the prefix in the document, for replacing it on accept.
    prefix_range: TextRange,
}

impl BracketExpression {
    /// Find the open bracket expression that contains `caret`.
    ///
    /// Only the caret line is inspected: the innermost `${{` before the caret
    /// must not be closed by `}}` before the caret. Returns `None` when the
    /// caret is not inside an expression, or when the text before the caret is
    /// a member access on something other than a plain path (`fn(x).y`).
    pub fn at_caret(text: &str, caret: usize) -> Option<Self> {
        let caret = caret.min(text.len());
        if !text.is_char_boundary(caret) {
            return None;
        }
        let line_start = caret_line_start(text, caret);
        let before = &text[line_start..caret];

        let open = before.rfind(OPEN)?;
        let inner = &before[open + OPEN.len()..];
        if inner.contains(CLOSE) {
            return None;
        }

        let base = TextSize::new((line_start + open + OPEN.len()) as u32);
        Self::parse_path(inner).map(|mut expr| {
            expr.prefix_range = expr.prefix_range + base;
            expr
        })
    }

    /// Parse the trailing path of an expression body that ends at the caret.
    pub fn parse_path(body: &str) -> Option<Self> {
        let tokens = tokenize(body);
        let mut i = tokens.len();

        let mut prefix = SmolStr::default();
        let mut prefix_range = TextRange::empty(TextSize::of(body));
        match tokens.last() {
            Some(last) if last.kind == TokenKind::Ident => {
                prefix = SmolStr::new(last.text);
                prefix_range = TextRange::at(last.offset, TextSize::of(last.text));
                i -= 1;
            }
            Some(last) if last.kind == TokenKind::Dot => {}
            Some(last) if !last.kind.starts_operand() => return None,
            _ => {}
        }

        let mut segments = Vec::new();
        while i > 0 && tokens[i - 1].kind == TokenKind::Dot {
            if i < 2 || tokens[i - 2].kind != TokenKind::Ident {
                return None;
            }
            segments.push(SmolStr::new(tokens[i - 2].text));
            i -= 2;
        }
        segments.reverse();

        Some(Self {
            segments,
            prefix,
            prefix_range,
        })
    }

    /// Path segments typed before the last dot.
    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    /// Partial text after the last dot, used for fuzzy matching.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn prefix_range(&self) -> TextRange {
        self.prefix_range
    }

    /// The context root (`jobs`, `steps`, …), if one has been typed.
    pub fn root(&self) -> Option<&str> {
        self.segments.first().map(SmolStr::as_str)
    }
}
