//! Raw token definitions for the query syntax.
//!
//! The raw tokens are defined using the logos derive macro. Together the
//! four patterns cover every possible input character: a character is
//! whitespace, a quote (which opens a quoted literal), a colon, or part of
//! a bare word. Classification into the public token kinds happens in a
//! separate pass; the raw scan only decides span boundaries.
use logos::Logos;

/// Raw lexical classes produced by the scanner.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    /// A quoted literal, delimiters included. Backslash escapes the next
    /// character, so an escaped quote does not terminate the literal. A
    /// literal whose closing quote never appears runs to end of input and
    /// is still one token.
    #[regex(r#""([^"\\]|\\.)*"?"#)]
    Quoted,

    /// The field separator.
    #[token(":")]
    Colon,

    /// A maximal run of whitespace characters, newlines included.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// A maximal run of anything else: bare terms, identifiers, stray
    /// punctuation.
    #[regex(r#"[^ \t\r\n\f":]+"#)]
    Word,
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    fn raw(source: &str) -> Vec<RawToken> {
        RawToken::lexer(source)
            .filter_map(|result| result.ok())
            .collect()
    }

    #[test]
    fn test_word_and_whitespace() {
        assert_eq!(
            raw("quick fox"),
            vec![RawToken::Word, RawToken::Whitespace, RawToken::Word]
        );
    }

    #[test]
    fn test_colon_splits_words() {
        assert_eq!(
            raw("title:foo"),
            vec![RawToken::Word, RawToken::Colon, RawToken::Word]
        );
    }

    #[test]
    fn test_quoted_literal_is_one_token() {
        assert_eq!(raw(r#""foo bar""#), vec![RawToken::Quoted]);
    }

    #[test]
    fn test_quoted_literal_swallows_colon_and_whitespace() {
        assert_eq!(raw(r#""a : b""#), vec![RawToken::Quoted]);
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        assert_eq!(raw(r#""a\"b""#), vec![RawToken::Quoted]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(raw(r#""no end"#), vec![RawToken::Quoted]);
    }

    #[test]
    fn test_lone_quote() {
        assert_eq!(raw(r#"""#), vec![RawToken::Quoted]);
    }

    #[test]
    fn test_newline_is_whitespace() {
        assert_eq!(
            raw("a\nb"),
            vec![RawToken::Word, RawToken::Whitespace, RawToken::Word]
        );
    }

    #[test]
    fn test_mixed_whitespace_is_one_run() {
        assert_eq!(raw(" \t\n "), vec![RawToken::Whitespace]);
    }
}
