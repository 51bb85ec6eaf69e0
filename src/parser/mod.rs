//! Bracket expression parsing.
//!
//! Workflow values embed `${{ … }}` expressions. Completion only needs the
//! dotted path under the caret, so this module lexes the open expression on
//! the caret line and extracts that path; it does not build a full
//! expression tree.

mod expression;
mod lexer;

pub use expression::BracketExpression;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
