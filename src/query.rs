//! Query tokenization pipeline for the Lucene-style query syntax.
//!
//! This module orchestrates the complete pipeline for turning a query string
//! into a flat token stream:
//!
//! 1. Raw tokenization using the logos lexer (the `lexer::scanner` module)
//! 2. Classification into field/operator/value/whitespace/conjunction tokens
//!    with exact source positions (the `lexer::classify` module)
//! 3. Grouping into a production tree mirroring grammar-rule composition
//!    (the `grammar` module)
//! 4. Normalization of the production tree back into a flat, ordered token
//!    sequence (the `normalize` module)
//!
//! Consumers that want the flat token stream (the common case) call
//! [`parse`]. Consumers that want the grouped production tree (for example
//! to inspect clause structure) call [`grammar::tokenize`] and flatten it
//! later with [`normalize::normalize`].

pub mod detokenizer;
pub mod grammar;
pub mod lexer;
pub mod location;
pub mod normalize;
pub mod processor;
pub mod token;

pub use detokenizer::detokenize;
pub use grammar::{tokenize, tokenize_with_options, Production, RuleKind};
pub use lexer::{lex, lex_with_options, KeywordCase, LexerOptions};
pub use location::Position;
pub use normalize::normalize;
pub use token::{Token, TokenKind};

/// Tokenize a query string into a flat, ordered token stream.
///
/// This is the main entry point of the crate. The returned stream covers the
/// entire input with no gaps, ends with a single `eof` sentinel, and is
/// lossless: concatenating every token's text reproduces the input exactly.
pub fn parse(input: &str) -> Vec<Token> {
    parse_with_options(input, &LexerOptions::default())
}

/// Tokenize a query string using an explicit lexer configuration.
pub fn parse_with_options(input: &str, options: &LexerOptions) -> Vec<Token> {
    normalize(&tokenize_with_options(input, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_clause() {
        let tokens = parse("title:foo");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Field,
                TokenKind::Operator,
                TokenKind::Value,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_parse_is_lossless() {
        let input = "title:\"foo bar\" AND body:\"quick fox\"";
        let tokens = parse(input);
        let reconstructed: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(reconstructed, input);
    }

    #[test]
    fn test_parse_same_input_twice_is_equal() {
        let input = "a:b OR c:d";
        assert_eq!(parse(input), parse(input));
    }
}
