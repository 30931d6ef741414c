//! Lexer tests for bfgo.
//!
//! Covers: the eight operators, commentary classification, the whitespace
//! rule inside and outside comment runs, span tracking, and determinism.

use bfgo_lexer::{Lexer, Operator, TokenKind, ALL_OPERATORS};
use bfgo_types::SourceFile;
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex source text and return just the token kinds.
fn kinds(source: &str) -> Vec<TokenKind> {
    let sf = SourceFile::new("test.bf", source);
    Lexer::new(&sf).lex().tokens.into_iter().map(|t| t.kind).collect()
}

/// Lex source text and return the commentary characters as one string.
fn commentary(source: &str) -> String {
    kinds(source)
        .into_iter()
        .filter_map(|k| match k {
            TokenKind::Commentary(ch) => Some(ch),
            TokenKind::Operator(_) => None,
        })
        .collect()
}

fn op(op: Operator) -> TokenKind {
    TokenKind::Operator(op)
}

fn c(ch: char) -> TokenKind {
    TokenKind::Commentary(ch)
}

// ─────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_all_operators() {
    let k = kinds("><+-[],.");
    let expected: Vec<TokenKind> = ALL_OPERATORS.iter().copied().map(op).collect();
    assert_eq!(k, expected);
}

#[test]
fn test_single_increment() {
    assert_eq!(kinds("+"), vec![op(Operator::Increment)]);
}

#[test]
fn test_empty_input() {
    assert!(kinds("").is_empty());
}

#[test]
fn test_whitespace_only_input() {
    assert!(kinds(" \t\r\n  \n").is_empty());
}

#[test]
fn test_whitespace_between_operators_dropped() {
    assert_eq!(
        kinds("[ -\n\t]"),
        vec![
            op(Operator::LoopOpen),
            op(Operator::Decrement),
            op(Operator::LoopClose)
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Commentary
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_comment_then_operator() {
    let k = kinds("this is a comment+");
    assert_eq!(k.last(), Some(&op(Operator::Increment)));
    assert_eq!(commentary("this is a comment+"), "this is a comment");
}

#[test]
fn test_spaces_inside_comment_preserved() {
    assert_eq!(commentary("+hi there-"), "hi there");
}

#[test]
fn test_leading_space_before_comment_dropped() {
    assert_eq!(kinds("+ a"), vec![op(Operator::Increment), c('a')]);
}

#[test]
fn test_space_before_operator_stays_in_comment() {
    assert_eq!(
        kinds("a + b"),
        vec![c('a'), c(' '), op(Operator::Increment), c('b')]
    );
}

#[test]
fn test_tab_and_newline_stripped_inside_comment() {
    assert_eq!(commentary("a\tb\nc"), "abc");
}

#[test]
fn test_newline_then_indent_inside_comment_keeps_spaces() {
    assert_eq!(commentary("first\n  second"), "first  second");
}

#[test]
fn test_punctuation_is_commentary() {
    assert_eq!(commentary("{}()!?#/"), "{}()!?#/");
}

#[test]
fn test_unicode_commentary() {
    assert_eq!(commentary("héllo wörld"), "héllo wörld");
}

#[test]
fn test_non_breaking_space_stripped_inside_comment() {
    assert_eq!(commentary("a\u{a0}b"), "ab");
}

// ─────────────────────────────────────────────────────────────────────
// Spans
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_close_span_points_at_bracket() {
    let sf = SourceFile::new("test.bf", "++\n  ]");
    let tokens = Lexer::new(&sf).lex().tokens;
    let close = tokens
        .iter()
        .find(|t| t.operator() == Some(Operator::LoopClose))
        .expect("close token");
    assert_eq!(close.span.start_line, 2);
    assert_eq!(close.span.start_col, 3);
}

// ─────────────────────────────────────────────────────────────────────
// Determinism & properties
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_lexer_determinism_100_iterations() {
    let source = "Hello world program\n++++++++[>++++[>++>+++<<-]>+<<-]>>.>---.";
    let first = kinds(source);
    for i in 0..100 {
        assert_eq!(first, kinds(source), "Determinism failure at iteration {i}");
    }
}

proptest! {
    /// Every instruction character becomes an operator token, in order.
    #[test]
    fn prop_operators_preserved(src in "[><+\\-\\[\\],. a-z\\t\\n]{0,64}") {
        let ops: Vec<char> = kinds(&src)
            .into_iter()
            .filter_map(|k| match k {
                TokenKind::Operator(o) => Some(o.as_char()),
                TokenKind::Commentary(_) => None,
            })
            .collect();
        let expected: Vec<char> = src.chars().filter(|ch| Operator::from_char(*ch).is_some()).collect();
        prop_assert_eq!(ops, expected);
    }

    /// Commentary never contains a line break or tab.
    #[test]
    fn prop_commentary_is_single_line(src in "[a-z+ \\t\\n\\r]{0,64}") {
        let text = commentary(&src);
        prop_assert!(!text.contains('\n'));
        prop_assert!(!text.contains('\t'));
        prop_assert!(!text.contains('\r'));
    }
}
