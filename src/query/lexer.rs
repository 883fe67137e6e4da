//! Lexer module for the query syntax.
//!
//! This module orchestrates the tokenization pipeline that turns a query
//! string into a flat stream of classified tokens:
//!
//! 1. Raw tokenization using the logos lexer: the input is split into
//!    quoted literals, `:` separators, whitespace runs, and bare words.
//!    The raw token set is total over the input alphabet, so every byte of
//!    the input lands in exactly one raw token.
//! 2. Classification: raw tokens are relabeled into the public token kinds.
//!    A word immediately followed by `:` becomes a `field`; a word matching
//!    a reserved conjunction keyword (and not followed by `:`) becomes a
//!    `conjunction`; everything else that isn't whitespace or punctuation
//!    is a `value`. The classifier only relabels scanner spans, it never
//!    splits, merges, or edits them, so coverage of the input cannot be
//!    lost in this step.
//! 3. Sentinel production: a single `eof` token is appended.
//!
//! There is no error path: malformed input (unterminated quotes, stray
//! punctuation) is still classified best-effort, because syntactic
//! diagnostics belong to a higher layer.

pub mod classify;
pub mod scanner;
pub mod tokens;

pub use classify::classify;
pub use scanner::scan;
pub use tokens::RawToken;

use crate::query::token::Token;

/// Case policy for the reserved conjunction keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordCase {
    /// Only the canonical uppercase forms (`AND`, `OR`, `NOT`) are
    /// recognized as conjunctions. This is the Lucene convention.
    #[default]
    Sensitive,
    /// Any capitalization of the reserved words is recognized.
    Insensitive,
}

/// Configuration for the tokenization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerOptions {
    pub keyword_case: KeywordCase,
}

impl LexerOptions {
    /// Options with case-insensitive conjunction keywords.
    pub fn ignore_keyword_case() -> Self {
        Self {
            keyword_case: KeywordCase::Insensitive,
        }
    }
}

/// Tokenize a query string into a flat, classified token stream.
///
/// The returned stream covers the entire input in order, with the `eof`
/// sentinel appended last.
pub fn lex(source: &str) -> Vec<Token> {
    lex_with_options(source, &LexerOptions::default())
}

/// Tokenize a query string using an explicit configuration.
pub fn lex_with_options(source: &str, options: &LexerOptions) -> Vec<Token> {
    let raw = scan(source);
    classify(source, &raw, options)
}
