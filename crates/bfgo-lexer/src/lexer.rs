//! Core bfgo lexer — classifies program text one character at a time.
//!
//! - Single forward pass over Unicode scalar values, no lookahead
//! - The eight instruction characters become [`TokenKind::Operator`]
//! - Whitespace outside a comment run is dropped
//! - Inside a comment run only the plain space survives; tabs, newlines and
//!   other whitespace are dropped so a comment never spans lines
//! - Everything else becomes [`TokenKind::Commentary`]
//!
//! Lexing cannot fail: loop balance is checked by the code generator.

use bfgo_types::{SourceFile, Span};
use log::trace;

use crate::token::{Token, TokenKind};

/// Whether `ch` is skipped entirely given the current comment mode.
pub fn is_ignored(ch: char, in_comment: bool) -> bool {
    if !in_comment {
        return ch.is_whitespace();
    }
    ch.is_whitespace() && ch != ' '
}

/// The bfgo lexer.
pub struct Lexer<'src> {
    /// Remaining program text.
    chars: std::str::Chars<'src>,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    col: u32,
    /// True while the previous significant character was commentary.
    in_comment: bool,
}

/// Result of lexing: every significant token in input order.
#[derive(Debug, Clone)]
pub struct LexResult {
    pub tokens: Vec<Token>,
}

impl LexResult {
    /// Number of operator tokens.
    pub fn operator_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.operator().is_some()).count()
    }
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source file.
    pub fn new(source_file: &'src SourceFile) -> Self {
        Self {
            chars: source_file.source.chars(),
            line: 1,
            col: 1,
            in_comment: false,
        }
    }

    /// Lex the entire source file.
    pub fn lex(self) -> LexResult {
        let tokens: Vec<Token> = self.collect();
        trace!("lexed {} significant characters", tokens.len());
        LexResult { tokens }
    }

    /// Consume one character, returning it with its position.
    fn advance(&mut self) -> Option<(char, Span)> {
        let ch = self.chars.next()?;
        let span = Span::point(self.line, self.col);
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some((ch, span))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let (ch, span) = self.advance()?;
            if is_ignored(ch, self.in_comment) {
                continue;
            }
            let kind = TokenKind::classify(ch);
            self.in_comment = kind.is_commentary();
            return Some(Token::new(kind, span));
        }
    }
}
