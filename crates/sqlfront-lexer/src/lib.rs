//! SQL lexer and dialect tables.
//!
//! Finite-state scanner over SQL text with an optional lookahead ring
//! buffer, plus the fixed word lists that decide which words are keywords.

pub mod dialect;
pub mod lexer;
pub mod token;

pub use dialect::Dialect;
pub use lexer::{Lexer, LexerConfig};
pub use token::{InvalidReason, Token, TokenKind, TokenValue};
