//! Raw tokenization for the query lexer.
//!
//! This module performs the base tokenization using the logos lexer,
//! returning raw tokens paired with their byte spans. This is the source
//! that creates the initial token stream from a string; classification
//! operates on the stream produced here and never re-scans the input.

use crate::query::lexer::tokens::RawToken;
use logos::Logos;

/// Tokenize a query string into raw tokens with byte spans.
///
/// The returned spans are contiguous and cover the entire input. The raw
/// token set is total over the input alphabet; should the scanner ever
/// report an unrecognized span anyway, that span is recovered as a bare
/// word so no input bytes are dropped.
pub fn scan(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(_) => tokens.push((RawToken::Word, lexer.span())),
        }
    }

    tokens
}
