//! Logos-based lexer for GitHub Actions expressions
//!
//! Tokenizes the text inside (and including the delimiters of) `${{ … }}`.

use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };
        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // DELIMITERS
    // =========================================================================
    #[token("${{")]
    Open,

    #[token("}}")]
    Close,

    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Context names, job ids, step ids. GitHub allows `-` after the first char.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"'([^']|'')*'")]
    String,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("&&")]
    AndAnd,

    #[token("||")]
    OrOr,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("!")]
    Bang,
}

/// Expression token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Open,
    Close,
    Whitespace,
    Ident,
    Number,
    String,
    Dot,
    Star,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Comma,
    EqEq,
    BangEq,
    AndAnd,
    OrOr,
    LtEq,
    GtEq,
    Lt,
    Gt,
    Bang,
    /// Anything the expression grammar does not know.
    Error,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Open => TokenKind::Open,
            LogosToken::Close => TokenKind::Close,
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Number => TokenKind::Number,
            LogosToken::String => TokenKind::String,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::Star => TokenKind::Star,
            LogosToken::LBracket => TokenKind::LBracket,
            LogosToken::RBracket => TokenKind::RBracket,
            LogosToken::LParen => TokenKind::LParen,
            LogosToken::RParen => TokenKind::RParen,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::EqEq => TokenKind::EqEq,
            LogosToken::BangEq => TokenKind::BangEq,
            LogosToken::AndAnd => TokenKind::AndAnd,
            LogosToken::OrOr => TokenKind::OrOr,
            LogosToken::LtEq => TokenKind::LtEq,
            LogosToken::GtEq => TokenKind::GtEq,
            LogosToken::Lt => TokenKind::Lt,
            LogosToken::Gt => TokenKind::Gt,
            LogosToken::Bang => TokenKind::Bang,
        }
    }
}

impl TokenKind {
    /// Tokens after which a fresh context root may start.
    pub fn starts_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Open
                | TokenKind::Whitespace
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::Comma
                | TokenKind::EqEq
                | TokenKind::BangEq
                | TokenKind::AndAnd
                | TokenKind::OrOr
                | TokenKind::LtEq
                | TokenKind::GtEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Bang
        )
    }
}
