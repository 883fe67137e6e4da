//! # querylex
//!
//! A lexer for Lucene-style search query strings.
//!
//! querylex turns a raw query such as `title:"foo bar" AND body:"quick fox"`
//! into a flat, ordered stream of classified tokens, each annotated with its
//! exact source location (byte offset, 1-based line and column). The token
//! stream is lossless: concatenating the text of every token reproduces the
//! input byte-for-byte, which makes the output suitable for syntax
//! highlighting, error reporting, and downstream query analysis.
//!
//! The main entry point is [`query::parse`]:
//!
//! ```text
//! query:  title:"foo bar" AND body:"quick fox"
//! tokens: field(title) operator(:) value("foo bar") whitespace
//!         conjunction(AND) whitespace field(body) operator(:)
//!         value("quick fox") eof
//! ```

pub mod query;

pub use query::{parse, parse_with_options};
