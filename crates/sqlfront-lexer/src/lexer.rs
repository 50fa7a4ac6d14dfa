//! SQL lexer.
//!
//! Converts SQL text into a stream of tokens, one per call. Scanning works on
//! bytes with ASCII character classes; non-ASCII text is never split, so
//! quoted strings and comments carry it through intact and a stray non-ASCII
//! character becomes a single punctuation token. Uses memchr to jump through
//! string bodies and comments.
//!
//! An optional lookahead buffer remembers the last few tokens so a parse
//! driver can [`Lexer::push_back`] and re-read them.

use std::collections::VecDeque;

use memchr::{memchr2, memchr3};
use serde::{Deserialize, Serialize};
use sqlfront_ast::Span;
use sqlfront_error::{Result, SqlFrontError};
use tracing::{debug, trace};

use crate::dialect::Dialect;
use crate::token::{InvalidReason, Token, TokenKind, TokenValue};

/// Comparison operators a run of `<`, `>`, `=`, `!` must match exactly.
const COMPARISON_OPERATORS: &[&str] = &["=", "!=", "<>", "<", "<=", ">", ">="];

/// Lexer construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Number of recent tokens kept for [`Lexer::push_back`]; 0 disables
    /// buffering.
    pub lookahead: usize,
}

/// SQL lexer that produces a stream of tokens from source text.
pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    /// Current byte offset into src.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Byte offset where the current line begins.
    line_start: usize,
    /// Set once the end-of-input token has been produced.
    finished: bool,
    dialect: Dialect,
    lookahead: usize,
    /// Most recent tokens, oldest first; `None` records an exhausted stream.
    buffer: VecDeque<Option<Token>>,
    /// Index into `buffer` of the next token `lex` hands out.
    cursor: usize,
}

type Scanned = (TokenKind, TokenValue);

const fn is_word_byte(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, b'_' | b'.' | b'{' | b'}' | b'`' | b'*')
}

const fn is_comparison_byte(ch: u8) -> bool {
    matches!(ch, b'<' | b'>' | b'=' | b'!')
}

fn text(s: &str) -> TokenValue {
    TokenValue::Text(s.to_owned())
}

/// Narrow a byte offset to the `u32` used by spans and columns, saturating
/// past 4 GiB.
fn offset_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

impl<'a> Lexer<'a> {
    /// Create a lexer without lookahead.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Create a lexer that keeps the last `lookahead` tokens for push-back.
    #[must_use]
    pub fn with_lookahead(source: &'a str, lookahead: usize) -> Self {
        Self::with_config(source, LexerConfig { lookahead })
    }

    #[must_use]
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            src: source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            line_start: 0,
            finished: false,
            dialect: Dialect::new(),
            lookahead: config.lookahead,
            buffer: VecDeque::with_capacity(config.lookahead),
            cursor: 0,
        }
    }

    /// Tokenize the entire input, including the end-of-input token.
    #[must_use]
    pub fn tokenize(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    /// Current line number (1-based).
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Current byte offset of the scanner.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub const fn lookahead(&self) -> usize {
        self.lookahead
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.src
    }

    // -----------------------------------------------------------------------
    // Token stream with lookahead
    // -----------------------------------------------------------------------

    /// Return the next token, replaying a pushed-back one if available.
    ///
    /// Yields the end-of-input token once, then `None`.
    pub fn lex(&mut self) -> Option<Token> {
        if self.lookahead == 0 {
            return self.next_token();
        }

        if self.cursor < self.buffer.len() {
            let token = self.buffer[self.cursor].clone();
            self.cursor += 1;
            return token;
        }

        if self.buffer.len() == self.lookahead {
            self.buffer.pop_front();
            self.cursor -= 1;
        }

        let token = self.next_token();
        self.buffer.push_back(token.clone());
        self.cursor += 1;
        token
    }

    /// Rewind one token so the next [`Lexer::lex`] replays it.
    ///
    /// Silently ignored without lookahead or when the buffered history is
    /// exhausted.
    pub fn push_back(&mut self) {
        if self.try_push_back().is_err() {
            debug!(
                lookahead = self.lookahead,
                buffered = self.buffer.len(),
                "push_back ignored"
            );
        }
    }

    /// Like [`Lexer::push_back`], but reports when no rewind was possible.
    ///
    /// # Errors
    ///
    /// Returns [`SqlFrontError::InvalidPushBack`] if lookahead is disabled or
    /// the cursor is already at the oldest buffered token.
    pub fn try_push_back(&mut self) -> Result<()> {
        if self.lookahead > 0 && !self.buffer.is_empty() && self.cursor > 0 {
            self.cursor -= 1;
            trace!(cursor = self.cursor, "push_back");
            Ok(())
        } else {
            Err(SqlFrontError::InvalidPushBack)
        }
    }

    // -----------------------------------------------------------------------
    // Scanner
    // -----------------------------------------------------------------------

    /// Scan a fresh token from the source, bypassing the lookahead buffer.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let skip_start = self.pos;
        self.skip_whitespace_and_comments();
        let skipped = self.src[skip_start..self.pos].to_owned();

        let start = self.pos;
        let line = self.line;
        let col = offset_u32(start - self.line_start + 1);

        let (kind, value) = if start >= self.bytes.len() {
            self.finished = true;
            (TokenKind::EndOfInput, text(""))
        } else {
            self.scan()
        };

        if let TokenKind::Invalid(reason) = kind {
            debug!(?reason, offset = start, line, "invalid token");
        }
        trace!(kind = %kind, line, col, "token");

        Some(Token {
            kind,
            value,
            skipped,
            span: Span::new(offset_u32(start), offset_u32(self.pos)),
            line,
            col,
        })
    }

    fn scan(&mut self) -> Scanned {
        match self.bytes[self.pos] {
            b'\\' => self.lex_escape(),
            quote @ (b'\'' | b'"') => self.lex_string(quote),
            b'_' => self.lex_system_variable(),
            b'a'..=b'z' | b'A'..=b'Z' | b'{' | b'`' => self.lex_word(),
            b'0'..=b'9' => self.lex_number(),
            b'.' => self.lex_dot(),
            b'-' if self.starts_number_at(1) => self.lex_number(),
            b'%' => self.lex_placeholder(),
            ch if is_comparison_byte(ch) => self.lex_comparison(),
            _ => self.single_char(),
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Consume one byte, counting `\n`, lone `\r` and `\r\n` as one newline.
    fn advance(&mut self) {
        let ch = self.bytes[self.pos];
        self.pos += 1;
        match ch {
            b'\n' => self.new_line(),
            b'\r' if self.peek() != Some(b'\n') => self.new_line(),
            _ => {}
        }
    }

    fn advance_to(&mut self, target: usize) {
        while self.pos < target {
            self.advance();
        }
    }

    const fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.pos;
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn peek_is_digit_at(&self, offset: usize) -> bool {
        self.peek_at(offset).is_some_and(|c| c.is_ascii_digit())
    }

    /// Whether a number (`5`, `.5`) begins `offset` bytes ahead.
    fn starts_number_at(&self, offset: usize) -> bool {
        self.peek_is_digit_at(offset)
            || (self.peek_at(offset) == Some(b'.') && self.peek_is_digit_at(offset + 1))
    }

    fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn slice_from(&self, start: usize) -> &'a str {
        let src: &'a str = self.src;
        &src[start..self.pos]
    }

    /// Skip whitespace and line comments (`-- ...`, `# ...`).
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n') => self.advance(),
                Some(b'#') => self.skip_line_comment(),
                Some(b'-') if self.peek_at(1) == Some(b'-') => self.skip_line_comment(),
                _ => break,
            }
        }
    }

    /// Skip a comment through its line break, or to end of input.
    fn skip_line_comment(&mut self) {
        match memchr2(b'\n', b'\r', &self.bytes[self.pos..]) {
            Some(offset) => {
                // No line breaks before `offset`, so no line bookkeeping.
                self.pos += offset;
                if self.bytes[self.pos] == b'\r' && self.peek_at(1) == Some(b'\n') {
                    self.advance();
                }
                self.advance();
            }
            None => self.pos = self.bytes.len(),
        }
    }

    /// Emit the character at the cursor as its own token.
    fn single_char(&mut self) -> Scanned {
        let ch = self.src[self.pos..].chars().next().unwrap_or_default();
        for _ in 0..ch.len_utf8() {
            self.advance();
        }
        let kind = match ch {
            '=' | '<' | '>' => TokenKind::Operator(ch.to_string()),
            _ => TokenKind::Punctuation(ch),
        };
        (kind, TokenValue::Text(ch.to_string()))
    }

    // -----------------------------------------------------------------------
    // Token scanners
    // -----------------------------------------------------------------------

    /// `\'`, `\\` or `\"` outside a string.
    fn lex_escape(&mut self) -> Scanned {
        match self.peek_at(1) {
            Some(ch @ (b'\'' | b'\\' | b'"')) => {
                self.pos += 2;
                let ch = char::from(ch);
                (TokenKind::Punctuation(ch), TokenValue::Text(ch.to_string()))
            }
            _ => self.single_char(),
        }
    }

    /// Quoted string. A `%s` directly before the closing quote makes the
    /// whole literal a placeholder.
    fn lex_string(&mut self, quote: u8) -> Scanned {
        let start = self.pos;
        self.advance(); // opening quote

        let mut value = String::new();
        loop {
            let Some(offset) = memchr3(quote, b'\\', b'%', &self.bytes[self.pos..]) else {
                self.advance_to(self.bytes.len());
                return self.unterminated(start);
            };
            let at = self.pos + offset;
            value.push_str(&self.src[self.pos..at]);
            self.advance_to(at);

            match self.bytes[at] {
                b'\\' => {
                    self.advance();
                    let Some(escaped) = self.src[self.pos..].chars().next() else {
                        return self.unterminated(start);
                    };
                    value.push(escaped);
                    for _ in 0..escaped.len_utf8() {
                        self.advance();
                    }
                }
                b'%' => {
                    self.advance();
                    if self.peek() == Some(b's') && self.peek_at(1) == Some(quote) {
                        self.pos += 2;
                        return (TokenKind::Placeholder, text(self.slice_from(start)));
                    }
                    value.push('%');
                }
                _ => {
                    self.advance(); // closing quote
                    return (TokenKind::TextLiteral, TokenValue::Text(value));
                }
            }
        }
    }

    fn unterminated(&self, start: usize) -> Scanned {
        (
            TokenKind::Invalid(InvalidReason::UnterminatedLiteral),
            text(self.slice_from(start)),
        )
    }

    /// `_name`
    fn lex_system_variable(&mut self) -> Scanned {
        let start = self.pos;
        self.pos += 1;
        self.skip_while(|c| c.is_ascii_alphanumeric() || c == b'_');
        (TokenKind::SystemVariable, text(self.slice_from(start)))
    }

    /// Keyword or identifier.
    fn lex_word(&mut self) -> Scanned {
        let start = self.pos;
        self.pos += 1;
        self.skip_while(is_word_byte);

        let word = self.slice_from(start);
        let lowered = word.to_ascii_lowercase();
        if self.dialect.is_symbol(&lowered) {
            (TokenKind::Keyword(lowered.clone()), TokenValue::Text(lowered))
        } else {
            (TokenKind::Identifier, text(word))
        }
    }

    /// Integer or real, optionally negative. Reals may carry an exponent
    /// with a mandatory sign: `1.5e-10`.
    fn lex_number(&mut self) -> Scanned {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        self.skip_while(|c| c.is_ascii_digit());

        let mut is_real = false;
        // `1...` leaves the dots for the ellipsis.
        if self.peek() == Some(b'.') && self.peek_at(1) != Some(b'.') {
            is_real = true;
            self.pos += 1;
            self.skip_while(|c| c.is_ascii_digit());
        }

        if is_real && matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) && self.peek_is_digit_at(1) {
                self.pos += 1;
                self.skip_while(|c| c.is_ascii_digit());
            } else {
                return self.malformed_number(start);
            }
        }

        // A number must not run straight into a word.
        if self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_') {
            return self.malformed_number(start);
        }

        let literal = self.slice_from(start);
        if is_real {
            // An exponent past the f64 range parses as infinity.
            match literal.parse::<f64>() {
                Ok(v) if v.is_finite() => (TokenKind::RealLiteral, TokenValue::Real(v)),
                _ => self.malformed_number(start),
            }
        } else {
            match literal.parse::<i64>() {
                Ok(v) => (TokenKind::IntLiteral, TokenValue::Int(v)),
                Err(_) => self.malformed_number(start),
            }
        }
    }

    /// Consume the rest of a broken number so scanning resumes after it.
    fn malformed_number(&mut self, start: usize) -> Scanned {
        self.skip_while(|c| c.is_ascii_alphanumeric() || matches!(c, b'_' | b'+' | b'-'));
        (
            TokenKind::Invalid(InvalidReason::MalformedNumber),
            text(self.slice_from(start)),
        )
    }

    /// `...`, a real such as `.5`, or a lone `.`.
    fn lex_dot(&mut self) -> Scanned {
        if self.peek_at(1) == Some(b'.') && self.peek_at(2) == Some(b'.') {
            self.pos += 3;
            return (TokenKind::Ellipsis, text("..."));
        }
        if self.peek_is_digit_at(1) {
            return self.lex_number();
        }
        self.single_char()
    }

    /// `%` followed by a letter or digit (`%s`, `%d`, `%b`), or a lone `%`
    /// ending the input. `%%` and `%` before any other character are
    /// punctuation.
    fn lex_placeholder(&mut self) -> Scanned {
        let start = self.pos;
        match self.peek_at(1) {
            Some(c) if c.is_ascii_alphanumeric() => self.pos += 2,
            None => self.pos += 1,
            Some(_) => return self.single_char(),
        }
        (TokenKind::Placeholder, text(self.slice_from(start)))
    }

    /// Greedy run of `<`, `>`, `=`, `!` that must spell a known operator.
    fn lex_comparison(&mut self) -> Scanned {
        let start = self.pos;
        let run = self.bytes[start..]
            .iter()
            .take_while(|&&c| is_comparison_byte(c))
            .count();
        let src: &'a str = self.src;
        let op = &src[start..start + run];
        if COMPARISON_OPERATORS.contains(&op) {
            self.pos += run;
            return (TokenKind::Operator(op.to_owned()), text(op));
        }
        self.single_char()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.lex()
    }
}
