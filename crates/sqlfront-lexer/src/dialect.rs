//! Dialect symbol tables.
//!
//! Fixed word lists for a broad ANSI-SQL-like superset. All lookups expect
//! the caller to have lowercased the word already.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use sqlfront_error::{Result, SqlFrontError};
use tracing::debug;

use crate::token::TokenKind;

/// Words that can lead a statement.
pub const COMMANDS: &[&str] = &["alter", "create", "drop", "select", "delete", "insert", "update"];

/// Comparison and logical operators.
pub const OPERATORS: &[&str] = &[
    "=", "!=", "<>", "<", "<=", ">", ">=", "like", "clike", "slike", "not", "is", "in", "between",
    "and", "or",
];

/// Column data types.
pub const TYPES: &[&str] = &[
    "character",
    "char",
    "varchar",
    "nchar",
    "bit",
    "numeric",
    "decimal",
    "dec",
    "integer",
    "int",
    "smallint",
    "float",
    "real",
    "double",
    "date",
    "time",
    "timestamp",
    "interval",
    "bool",
    "boolean",
    "set",
    "enum",
    "text",
];

/// Words introducing a clause or a sub-part of one.
pub const CONJUNCTIONS: &[&str] = &["by", "as", "on", "into", "from", "where", "with"];

/// Aggregate and sequence functions.
pub const FUNCTIONS: &[&str] = &["avg", "count", "max", "min", "sum", "nextval", "currval"];

/// Reserved words.
pub const RESERVED: &[&str] = &[
    "absolute",
    "action",
    "add",
    "all",
    "allocate",
    "and",
    "any",
    "are",
    "asc",
    "ascending",
    "assertion",
    "at",
    "authorization",
    "begin",
    "bit_length",
    "both",
    "cascade",
    "cascaded",
    "case",
    "cast",
    "catalog",
    "char_length",
    "character_length",
    "check",
    "close",
    "coalesce",
    "collate",
    "collation",
    "column",
    "commit",
    "connect",
    "connection",
    "constraint",
    "constraints",
    "continue",
    "convert",
    "corresponding",
    "cross",
    "current",
    "current_date",
    "current_time",
    "current_timestamp",
    "current_user",
    "cursor",
    "day",
    "deallocate",
    "declare",
    "default",
    "deferrable",
    "deferred",
    "desc",
    "descending",
    "describe",
    "descriptor",
    "diagnostics",
    "disconnect",
    "distinct",
    "domain",
    "else",
    "end",
    "end-exec",
    "escape",
    "except",
    "exception",
    "exec",
    "execute",
    "exists",
    "external",
    "extract",
    "false",
    "fetch",
    "first",
    "for",
    "foreign",
    "found",
    "full",
    "get",
    "global",
    "go",
    "goto",
    "grant",
    "group",
    "having",
    "hour",
    "identity",
    "immediate",
    "indicator",
    "initially",
    "inner",
    "input",
    "insensitive",
    "intersect",
    "isolation",
    "join",
    "key",
    "language",
    "last",
    "leading",
    "left",
    "level",
    "limit",
    "local",
    "lower",
    "match",
    "minute",
    "module",
    "month",
    "names",
    "national",
    "natural",
    "next",
    "no",
    "null",
    "nullif",
    "octet_length",
    "of",
    "offset",
    "only",
    "open",
    "option",
    "or",
    "order",
    "outer",
    "output",
    "overlaps",
    "pad",
    "partial",
    "position",
    "precision",
    "prepare",
    "preserve",
    "primary",
    "prior",
    "privileges",
    "procedure",
    "public",
    "read",
    "references",
    "relative",
    "restrict",
    "revoke",
    "right",
    "rollback",
    "rows",
    "schema",
    "scroll",
    "second",
    "section",
    "session",
    "session_user",
    "size",
    "some",
    "space",
    "sql",
    "sqlcode",
    "sqlerror",
    "sqlstate",
    "substring",
    "system_user",
    "table",
    "temporary",
    "then",
    "timezone_hour",
    "timezone_minute",
    "to",
    "trailing",
    "transaction",
    "translate",
    "translation",
    "trim",
    "true",
    "union",
    "unique",
    "unknown",
    "upper",
    "usage",
    "user",
    "using",
    "value",
    "values",
    "varying",
    "view",
    "when",
    "whenever",
    "work",
    "write",
    "year",
    "zone",
    "eoc",
];

/// Spelling variants and their canonical form.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("decimal", "numeric"),
    ("dec", "numeric"),
    ("numeric", "numeric"),
    ("float", "float"),
    ("real", "real"),
    ("double", "real"),
    ("int", "int"),
    ("integer", "int"),
    ("interval", "interval"),
    ("smallint", "smallint"),
    ("timestamp", "timestamp"),
    ("bool", "bool"),
    ("boolean", "bool"),
    ("set", "set"),
    ("enum", "enum"),
    ("text", "text"),
    ("char", "char"),
    ("character", "char"),
    ("varchar", "varchar"),
    ("ascending", "asc"),
    ("asc", "asc"),
    ("descending", "desc"),
    ("desc", "desc"),
    ("date", "date"),
    ("time", "time"),
];

static SYMBOLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    TYPES
        .iter()
        .chain(FUNCTIONS)
        .chain(OPERATORS)
        .chain(COMMANDS)
        .chain(RESERVED)
        .chain(CONJUNCTIONS)
        .copied()
        .collect()
});

static SYNONYM_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SYNONYMS.iter().copied().collect());

/// Handle onto the process-wide dialect tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dialect;

impl Dialect {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Whether `word` has any special meaning in the dialect.
    #[must_use]
    pub fn is_symbol(self, word: &str) -> bool {
        SYMBOLS.contains(word)
    }

    /// Same check as [`Dialect::is_symbol`].
    #[must_use]
    pub fn is_reserved(self, word: &str) -> bool {
        SYMBOLS.contains(word)
    }

    #[must_use]
    pub fn is_type(self, word: &str) -> bool {
        TYPES.contains(&word)
    }

    #[must_use]
    pub fn is_function(self, word: &str) -> bool {
        FUNCTIONS.contains(&word)
    }

    #[must_use]
    pub fn is_command(self, word: &str) -> bool {
        COMMANDS.contains(&word)
    }

    #[must_use]
    pub fn is_operator(self, word: &str) -> bool {
        OPERATORS.contains(&word)
    }

    #[must_use]
    pub fn is_conjunction(self, word: &str) -> bool {
        CONJUNCTIONS.contains(&word)
    }

    /// Whether a token of this kind stands for a value: a numeric, text or
    /// placeholder literal, or the `null` keyword.
    #[must_use]
    pub fn is_value_kind(self, kind: &TokenKind) -> bool {
        match kind {
            TokenKind::RealLiteral
            | TokenKind::IntLiteral
            | TokenKind::TextLiteral
            | TokenKind::Placeholder => true,
            TokenKind::Keyword(word) => word == "null",
            _ => false,
        }
    }

    /// String form of [`Dialect::is_value_kind`] over the token vocabulary
    /// names.
    #[must_use]
    pub fn is_value_name(self, name: &str) -> bool {
        matches!(
            name,
            "real_val" | "int_val" | "text_val" | "placeholder" | "NULL"
        )
    }

    #[must_use]
    pub fn is_synonym(self, word: &str) -> bool {
        SYNONYM_MAP.contains_key(word)
    }

    /// Map a spelling variant to its canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`SqlFrontError::UnknownSynonym`] if `word` has no entry;
    /// callers are expected to check [`Dialect::is_synonym`] first.
    pub fn canonicalize(self, word: &str) -> Result<&'static str> {
        SYNONYM_MAP.get(word).copied().ok_or_else(|| {
            debug!(word, "synonym lookup miss");
            SqlFrontError::unknown_synonym(word)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_membership() {
        let d = Dialect::new();
        assert!(d.is_symbol("join"));
        assert!(d.is_symbol("select"));
        assert!(d.is_symbol("varchar"));
        assert!(d.is_symbol("count"));
        assert!(d.is_symbol("<>"));
        assert!(d.is_symbol("where"));
        assert!(d.is_symbol("end-exec"));
        assert!(!d.is_symbol("foo123"));
        assert!(!d.is_symbol("JOIN"), "lookups are case-sensitive");
        assert_eq!(d.is_reserved("join"), d.is_symbol("join"));
    }

    #[test]
    fn test_category_predicates() {
        let d = Dialect::default();
        assert!(d.is_type("int"));
        assert!(!d.is_type("count"));
        assert!(d.is_function("nextval"));
        assert!(!d.is_function("select"));
        assert!(d.is_command("alter"));
        assert!(!d.is_command("from"));
        assert!(d.is_operator("between"));
        assert!(d.is_operator(">="));
        assert!(!d.is_operator("join"));
        assert!(d.is_conjunction("into"));
        assert!(!d.is_conjunction("join"));
    }

    #[test]
    fn test_value_kinds() {
        let d = Dialect::new();
        assert!(d.is_value_kind(&TokenKind::IntLiteral));
        assert!(d.is_value_kind(&TokenKind::RealLiteral));
        assert!(d.is_value_kind(&TokenKind::TextLiteral));
        assert!(d.is_value_kind(&TokenKind::Placeholder));
        assert!(d.is_value_kind(&TokenKind::Keyword("null".to_owned())));
        assert!(!d.is_value_kind(&TokenKind::Keyword("select".to_owned())));
        assert!(!d.is_value_kind(&TokenKind::Identifier));
        assert!(!d.is_value_kind(&TokenKind::SystemVariable));

        assert!(d.is_value_name("int_val"));
        assert!(d.is_value_name("NULL"));
        assert!(!d.is_value_name("identifier"));
    }

    #[test]
    fn test_canonicalize() {
        let d = Dialect::new();
        assert_eq!(d.canonicalize("dec"), Ok("numeric"));
        assert_eq!(d.canonicalize("boolean"), Ok("bool"));
        assert_eq!(d.canonicalize("descending"), Ok("desc"));
        assert!(d.is_synonym("character"));
        assert!(!d.is_synonym("nchar"));
        assert_eq!(
            d.canonicalize("nchar"),
            Err(SqlFrontError::UnknownSynonym {
                word: "nchar".to_owned()
            })
        );
    }

    #[test]
    fn test_every_synonym_target_is_canonical() {
        let d = Dialect::new();
        for &(_, canonical) in SYNONYMS {
            assert_eq!(d.canonicalize(canonical), Ok(canonical));
        }
    }
}
