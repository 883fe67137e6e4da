//! Token types for the query syntax.
//!
//! A [`Token`] is an immutable, classified, position-annotated span of the
//! query string. The serialized shape of a token is an external contract
//! consumed by tooling (display, diffing) and must not change:
//!
//! ```text
//! { "type": "field", "text": "title",
//!   "start": { "offset": 0, "line": 1, "column": 1 },
//!   "end":   { "offset": 5, "line": 1, "column": 6 } }
//! ```

use crate::query::location::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of token classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// The identifier before a `:` separator, naming the queried attribute.
    Field,
    /// Structural punctuation, currently only the `:` field separator.
    Operator,
    /// A bare term or a quoted phrase (delimiting quotes included).
    Value,
    /// A maximal run of whitespace characters.
    Whitespace,
    /// A reserved boolean keyword joining two clauses.
    Conjunction,
    /// The end-of-input sentinel; always last, always empty.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Field => "field",
            TokenKind::Operator => "operator",
            TokenKind::Value => "value",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Conjunction => "conjunction",
            TokenKind::Eof => "eof",
        };
        write!(f, "{}", name)
    }
}

/// A classified span of the query string.
///
/// `text` is the exact substring covered by the token; `start` and `end`
/// follow half-open interval semantics, so `end.offset - start.offset`
/// equals the byte length of `text`. Only the `eof` sentinel has empty text
/// and `start == end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub text: String,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, start: Position, end: Position) -> Self {
        Self {
            kind,
            text: text.to_string(),
            start,
            end,
        }
    }

    /// The end-of-input sentinel anchored at the given position.
    pub fn eof(at: Position) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            start: at,
            end: at,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }

    pub fn is_conjunction(&self) -> bool {
        matches!(self.kind, TokenKind::Conjunction)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}..{}", self.kind, self.text, self.start, self.end)
    }
}
