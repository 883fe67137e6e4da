//! Property-based tests for the tokenizer's coverage invariants.
//!
//! For every input, the token stream must cover the input exactly: no
//! gaps, no overlaps, no dropped or invented characters, positions
//! consistent with a left-to-right scan, and a single trailing `eof`.

use proptest::prelude::*;
use querylex::query::detokenizer::detokenize;
use querylex::query::location::Position;
use querylex::query::token::Token;
use querylex::query::parse;

/// Check every coverage invariant of the stream against the input.
fn assert_stream_invariants(input: &str, tokens: &[Token]) {
    // Exactly one eof, always last, empty, zero-width
    let eof_count = tokens.iter().filter(|t| t.is_eof()).count();
    assert_eq!(eof_count, 1, "input {:?}: expected exactly one eof", input);
    let eof = tokens.last().expect("stream is never empty");
    assert!(eof.is_eof(), "input {:?}: eof must be last", input);
    assert_eq!(eof.text, "");
    assert_eq!(eof.start, eof.end);

    // Losslessness: concatenated texts reproduce the input
    assert_eq!(detokenize(tokens), input, "input {:?}", input);

    // Contiguity between adjacent non-sentinel tokens
    let covering = &tokens[..tokens.len() - 1];
    for pair in covering.windows(2) {
        assert_eq!(
            pair[0].end.offset, pair[1].start.offset,
            "input {:?}: gap or overlap between {} and {}",
            input, pair[0], pair[1]
        );
    }

    // Position correctness: replay the scan and compare every boundary
    let mut current = Position::origin();
    for token in covering {
        assert_eq!(token.start, current, "input {:?}: start of {}", input, token);
        for ch in token.text.chars() {
            current.offset += ch.len_utf8();
            if ch == '\n' {
                current.line += 1;
                current.column = 1;
            } else {
                current.column += 1;
            }
        }
        assert_eq!(token.end, current, "input {:?}: end of {}", input, token);
    }

    // The sentinel anchor: one column past the end of the final token, or
    // the origin for empty input
    let expected_anchor = if covering.is_empty() {
        Position::origin()
    } else {
        Position::new(current.offset + 1, current.line, current.column + 1)
    };
    assert_eq!(eof.start, expected_anchor, "input {:?}", input);
}

/// Fragments that concatenate into realistic and pathological queries.
fn query_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        // Bare terms and field names
        "[a-zA-Z0-9_.*?-]{1,8}",
        // Reserved keywords, both cases
        prop_oneof![
            Just("AND".to_string()),
            Just("OR".to_string()),
            Just("NOT".to_string()),
            Just("and".to_string()),
            Just("or".to_string()),
        ],
        // Separators and whitespace
        Just(":".to_string()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just(" \t ".to_string()),
        // Quoted phrases, terminated and not
        "\"[a-z :]{0,10}\"",
        Just("\"".to_string()),
        Just("\"broken".to_string()),
        Just("\"esc \\\" aped\"".to_string()),
    ]
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(query_fragment(), 0..12).prop_map(|fragments| fragments.concat())
}

proptest! {
    #[test]
    fn test_invariants_on_query_like_input(input in query_strategy()) {
        let tokens = parse(&input);
        assert_stream_invariants(&input, &tokens);
    }

    #[test]
    fn test_invariants_on_arbitrary_input(input in any::<String>()) {
        // The lexer has no error state: any string at all must tokenize
        // into a covering stream
        let tokens = parse(&input);
        assert_stream_invariants(&input, &tokens);
    }

    #[test]
    fn test_tokenize_is_referentially_transparent(input in query_strategy()) {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn test_whitespace_runs_are_never_split(input in "[ \t\n]{1,20}") {
        // A whitespace-only input is exactly one whitespace token plus eof
        let tokens = parse(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(tokens[0].is_whitespace());
        prop_assert_eq!(tokens[0].text.as_str(), input.as_str());
    }

    #[test]
    fn test_start_offsets_strictly_increase(input in query_strategy()) {
        let tokens = parse(&input);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].start.offset < pair[1].start.offset);
        }
    }
}
