//! Detokenizer for the query syntax.
//!
//! Converts a token stream back into the query string. Because every token
//! carries its exact source text and the stream covers the input with no
//! gaps, detokenization is plain concatenation and reproduces the original
//! input byte-for-byte.

use crate::query::token::Token;

/// Reconstruct the query string from a token stream.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}
