use thiserror::Error;

/// Primary error type for sqlfront operations.
///
/// The lexer itself never returns these directly: malformed input is
/// surfaced as `Invalid` tokens, which convert into the matching variant
/// when a caller wants to bail out with `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlFrontError {
    // === Lexical Errors ===
    /// A quoted string or escape ran off the end of the input.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedLiteral { offset: usize },

    /// A numeric literal with a bad exponent or trailing letters.
    #[error("malformed number at byte {offset}: {text}")]
    MalformedNumber { offset: usize, text: String },

    // === Dialect Errors ===
    /// `canonicalize` was called on a word with no synonym entry.
    #[error("no canonical spelling for '{word}'")]
    UnknownSynonym { word: String },

    // === Token Stream Errors ===
    /// Rewind requested past the buffered token history.
    #[error("cannot push back: no buffered token to rewind to")]
    InvalidPushBack,
}

/// Coarse classification of [`SqlFrontError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// Malformed SQL text.
    Lexical = 1,
    /// Dialect table lookup failed.
    Dialect = 2,
    /// Caller misused the token stream API.
    Misuse = 21,
}

impl SqlFrontError {
    /// Map this error to its coarse error code.
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnterminatedLiteral { .. } | Self::MalformedNumber { .. } => ErrorCode::Lexical,
            Self::UnknownSynonym { .. } => ErrorCode::Dialect,
            Self::InvalidPushBack => ErrorCode::Misuse,
        }
    }

    /// Whether the error stems from the SQL text rather than from API misuse.
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::UnterminatedLiteral { .. } | Self::MalformedNumber { .. })
    }

    /// Byte offset in the source text, when the error points at one.
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnterminatedLiteral { offset } | Self::MalformedNumber { offset, .. } => {
                Some(*offset)
            }
            Self::UnknownSynonym { .. } | Self::InvalidPushBack => None,
        }
    }

    /// Human-friendly suggestion for fixing this error.
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnterminatedLiteral { .. } => Some("Close the string with a matching quote"),
            Self::MalformedNumber { .. } => {
                Some("Exponents need a sign and at least one digit, e.g. 1.5e-10")
            }
            Self::UnknownSynonym { .. } => Some("Check is_synonym before canonicalizing"),
            Self::InvalidPushBack => None,
        }
    }

    /// Create a malformed-number error.
    pub fn malformed_number(offset: usize, text: impl Into<String>) -> Self {
        Self::MalformedNumber {
            offset,
            text: text.into(),
        }
    }

    /// Create an unknown-synonym error.
    pub fn unknown_synonym(word: impl Into<String>) -> Self {
        Self::UnknownSynonym { word: word.into() }
    }
}

/// Result type alias using `SqlFrontError`.
pub type Result<T> = std::result::Result<T, SqlFrontError>;
