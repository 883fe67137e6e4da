//! Grammar engine for the query syntax.
//!
//! [`tokenize`] produces a [`Production`]: a possibly nested tree that
//! mirrors how the grammar rules composed to recognize the input. A
//! field/operator/value triple is grouped as one clause, a standalone term
//! is wrapped as a term group, and each group is tagged with a rule marker.
//! The nesting is an artifact of rule composition, not a semantic promise;
//! consumers that want a flat token list run the tree through
//! [`crate::query::normalize::normalize`], which drops the markers.
//!
//! The engine is a pure function of the input: it owns and returns a fresh
//! production per call and holds no state across calls.

use crate::query::lexer::{lex_with_options, LexerOptions};
use crate::query::token::{Token, TokenKind};

/// Tags naming the grammar rule that produced a group.
///
/// Markers are structural artifacts: they let tooling see rule boundaries
/// in the production tree, and normalization discards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// The root rule covering the whole input.
    Query,
    /// A field/operator/value composition such as `title:"foo bar"`.
    Clause,
    /// A standalone term or phrase value.
    Term,
}

/// The grammar engine's raw output: a tree mixing tokens, rule markers,
/// and nested productions.
#[derive(Debug, Clone, PartialEq)]
pub enum Production {
    /// A terminal token leaf.
    Token(Token),
    /// A non-token structural marker naming the rule that produced the
    /// enclosing group.
    Rule(RuleKind),
    /// A nested production from a composed grammar rule.
    Group(Vec<Production>),
}

/// Tokenize a query string into a production tree.
///
/// Never fails: every input character is classified as belonging to some
/// token, and malformed input is represented best-effort rather than
/// rejected.
pub fn tokenize(input: &str) -> Production {
    tokenize_with_options(input, &LexerOptions::default())
}

/// Tokenize a query string using an explicit lexer configuration.
pub fn tokenize_with_options(input: &str, options: &LexerOptions) -> Production {
    let tokens = lex_with_options(input, options);
    let mut children = vec![Production::Rule(RuleKind::Query)];
    let mut stream = tokens.into_iter().peekable();

    while let Some(token) = stream.next() {
        match token.kind {
            TokenKind::Field => {
                let mut clause = vec![Production::Rule(RuleKind::Clause), Production::Token(token)];
                if let Some(operator) = stream.next_if(|t| t.kind == TokenKind::Operator) {
                    clause.push(Production::Token(operator));
                    if let Some(value) = stream.next_if(|t| t.kind == TokenKind::Value) {
                        clause.push(term(value));
                    }
                }
                children.push(Production::Group(clause));
            }
            TokenKind::Value => children.push(term(token)),
            _ => children.push(Production::Token(token)),
        }
    }

    Production::Group(children)
}

fn term(token: Token) -> Production {
    Production::Group(vec![Production::Rule(RuleKind::Term), Production::Token(token)])
}
