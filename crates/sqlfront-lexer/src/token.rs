//! Token types produced by the lexer.

use std::borrow::Cow;
use std::fmt;

use sqlfront_ast::Span;
use sqlfront_error::SqlFrontError;

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token discriminant.
    pub kind: TokenKind,
    /// Decoded value of the token.
    pub value: TokenValue,
    /// Whitespace and comments consumed right before this token.
    pub skipped: String,
    /// Byte-offset span into the original source.
    pub span: Span,
    /// Line number (1-based) at the start of the token.
    pub line: u32,
    /// Column number (1-based, in bytes) at the start of the token.
    pub col: u32,
}

impl Token {
    /// The error this token stands for, if it is `Invalid`.
    #[must_use]
    pub fn error(&self) -> Option<SqlFrontError> {
        let TokenKind::Invalid(reason) = self.kind else {
            return None;
        };
        let offset = self.span.start as usize;
        Some(match reason {
            InvalidReason::UnterminatedLiteral => SqlFrontError::UnterminatedLiteral { offset },
            InvalidReason::MalformedNumber => {
                SqlFrontError::malformed_number(offset, self.value.as_str().unwrap_or_default())
            }
        })
    }

    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}

/// Why a token was classified `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// A quoted string or escape ran off the end of the input.
    UnterminatedLiteral,
    /// Bad exponent, trailing letters, or out-of-range integer.
    MalformedNumber,
}

/// Token discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare word that is not a dialect symbol.
    Identifier,
    IntLiteral,
    RealLiteral,
    /// Quoted string; the value holds the dequoted content.
    TextLiteral,
    /// Bound-parameter marker (`%s`, `%d`, `'%s'`).
    Placeholder,
    /// `_`-prefixed word.
    SystemVariable,
    /// Dialect symbol, lowercased.
    Keyword(String),
    /// Comparison operator (`=`, `!=`, `<>`, `<`, `<=`, `>`, `>=`).
    Operator(String),
    /// Any single character with no rule of its own.
    Punctuation(char),
    /// `...`
    Ellipsis,
    EndOfInput,
    Invalid(InvalidReason),
}

impl TokenKind {
    /// The token vocabulary name seen by a parse driver.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Identifier => Cow::Borrowed("identifier"),
            Self::IntLiteral => Cow::Borrowed("int_val"),
            Self::RealLiteral => Cow::Borrowed("real_val"),
            Self::TextLiteral => Cow::Borrowed("text_val"),
            Self::Placeholder => Cow::Borrowed("placeholder"),
            Self::SystemVariable => Cow::Borrowed("sys_var"),
            Self::Keyword(word) | Self::Operator(word) => Cow::Borrowed(word),
            Self::Punctuation(ch) => Cow::Owned(ch.to_string()),
            Self::Ellipsis => Cow::Borrowed("..."),
            Self::EndOfInput => Cow::Borrowed("*end of input*"),
            Self::Invalid(_) => Cow::Borrowed("*invalid*"),
        }
    }

    /// Whether this is the keyword `word` (lowercase).
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Self::Keyword(w) if w == word)
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Decoded token value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Real(f64),
    Text(String),
}

impl TokenValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Int(_) | Self::Real(_) => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
