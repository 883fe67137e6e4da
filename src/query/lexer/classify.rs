//! Classification of raw tokens into the public token kinds.
//!
//! The raw scanner decides span boundaries; this pass decides what each
//! span means. Classification is context-sensitive in exactly one place:
//! whether a word is a `field` depends on the token that follows it. The
//! rules, in priority order at each raw token:
//!
//! 1. A quoted literal is a `value`.
//! 2. A `:` is an `operator`.
//! 3. A word immediately followed by a `:` is a `field`. The word and the
//!    separator are never merged into one token, since downstream
//!    consumers key on the separator location.
//! 4. A word exactly matching a reserved conjunction keyword (and not
//!    immediately followed by `:`) is a `conjunction`.
//! 5. Any other word is a `value`.
//! 6. A whitespace run is a `whitespace` token.
//!
//! After the last raw token, the single `eof` sentinel is appended. It
//! carries empty text and is anchored one column past the end of the final
//! token, matching the serialized positions the upstream tooling pins; for
//! empty input it sits at the origin.

use crate::query::lexer::tokens::RawToken;
use crate::query::lexer::{KeywordCase, LexerOptions};
use crate::query::location::{Position, SourceMap};
use crate::query::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The reserved boolean keywords, in their canonical uppercase form.
static CONJUNCTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["AND", "OR", "NOT"].into_iter().collect());

fn is_conjunction(text: &str, case: KeywordCase) -> bool {
    match case {
        KeywordCase::Sensitive => CONJUNCTIONS.contains(text),
        KeywordCase::Insensitive => CONJUNCTIONS.contains(text.to_ascii_uppercase().as_str()),
    }
}

/// Classify a raw token stream into position-annotated tokens.
///
/// `raw` must be the scan of `source`; token texts are sliced straight from
/// `source` over the scanner's spans, which keeps the stream lossless by
/// construction. The `eof` sentinel is appended last.
pub fn classify(
    source: &str,
    raw: &[(RawToken, logos::Span)],
    options: &LexerOptions,
) -> Vec<Token> {
    let map = SourceMap::new(source);
    let mut tokens = Vec::with_capacity(raw.len() + 1);

    for (i, (raw_token, span)) in raw.iter().enumerate() {
        let text = &source[span.clone()];
        let kind = match raw_token {
            RawToken::Quoted => TokenKind::Value,
            RawToken::Colon => TokenKind::Operator,
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Word => {
                let followed_by_colon = matches!(raw.get(i + 1), Some((RawToken::Colon, _)));
                if followed_by_colon {
                    TokenKind::Field
                } else if is_conjunction(text, options.keyword_case) {
                    TokenKind::Conjunction
                } else {
                    TokenKind::Value
                }
            }
        };
        tokens.push(Token::new(
            kind,
            text,
            map.position(span.start),
            map.position(span.end),
        ));
    }

    tokens.push(Token::eof(eof_anchor(&tokens)));
    tokens
}

/// Where the `eof` sentinel sits: one column past the end of the final
/// token, or the origin when no input was consumed.
fn eof_anchor(tokens: &[Token]) -> Position {
    match tokens.last() {
        Some(last) => Position::new(last.end.offset + 1, last.end.line, last.end.column + 1),
        None => Position::origin(),
    }
}
