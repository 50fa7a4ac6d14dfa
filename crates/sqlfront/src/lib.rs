//! Public API facade for sqlfront.
//!
//! Re-exports the lexer, dialect tables, statement model and error types so
//! callers depend on a single crate.

pub use sqlfront_ast as ast;
pub use sqlfront_ast::{
    Column, Command, Conditional, Delete, Direction, Expr, Field, FieldItem, Function,
    GroupByClause, Insert, JoinConditional, JoinKind, Limit, Literal, OrderBy, Placeholder,
    Select, SetIdentifier, Span, Statement, StatementNode, Table, Update, ValueKind,
};
pub use sqlfront_error::{ErrorCode, Result, SqlFrontError};
pub use sqlfront_lexer::{
    Dialect, InvalidReason, Lexer, LexerConfig, Token, TokenKind, TokenValue, dialect,
};

/// Lex `sql` and return the first lexical error, if any.
///
/// # Errors
///
/// Returns the error carried by the first `Invalid` token.
pub fn check_lexical(sql: &str) -> Result<()> {
    Lexer::new(sql)
        .find_map(|token| token.error())
        .map_or(Ok(()), Err)
}
