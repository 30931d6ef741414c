//! Token types for the bfgo lexer.
//!
//! Defines [`Operator`], the closed set of eight instructions, and
//! [`Token`], which pairs a [`TokenKind`] with a source [`Span`].

use bfgo_types::Span;
use std::fmt;

/// Every operator, in the order of the instruction table.
pub const ALL_OPERATORS: [Operator; 8] = [
    Operator::MoveRight,
    Operator::MoveLeft,
    Operator::Increment,
    Operator::Decrement,
    Operator::LoopOpen,
    Operator::LoopClose,
    Operator::Input,
    Operator::Output,
];

// ─────────────────────────────────────────────────────────────────────
// Operator
// ─────────────────────────────────────────────────────────────────────

/// One of the eight single-character instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `>` — move the pointer one cell right.
    MoveRight,
    /// `<` — move the pointer one cell left.
    MoveLeft,
    /// `+` — increment the current cell.
    Increment,
    /// `-` — decrement the current cell.
    Decrement,
    /// `[` — loop while the current cell is non-zero.
    LoopOpen,
    /// `]` — end of the innermost loop.
    LoopClose,
    /// `,` — read one character into the current cell.
    Input,
    /// `.` — print the current cell as a character.
    Output,
}

impl Operator {
    /// Interpret a character as an operator.
    ///
    /// Returns `None` for anything outside the eight instruction characters;
    /// there is no escaping mechanism.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '>' => Some(Self::MoveRight),
            '<' => Some(Self::MoveLeft),
            '+' => Some(Self::Increment),
            '-' => Some(Self::Decrement),
            '[' => Some(Self::LoopOpen),
            ']' => Some(Self::LoopClose),
            ',' => Some(Self::Input),
            '.' => Some(Self::Output),
            _ => None,
        }
    }

    /// The source character for this operator.
    pub fn as_char(self) -> char {
        match self {
            Self::MoveRight => '>',
            Self::MoveLeft => '<',
            Self::Increment => '+',
            Self::Decrement => '-',
            Self::LoopOpen => '[',
            Self::LoopClose => ']',
            Self::Input => ',',
            Self::Output => '.',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// What a significant input character turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A recognised instruction.
    Operator(Operator),
    /// Any other non-ignored character; preserved as comment text.
    Commentary(char),
}

impl TokenKind {
    /// Classify a character that has already survived the whitespace rule.
    pub fn classify(ch: char) -> Self {
        match Operator::from_char(ch) {
            Some(op) => Self::Operator(op),
            None => Self::Commentary(ch),
        }
    }

    pub fn is_commentary(&self) -> bool {
        matches!(self, Self::Commentary(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "operator '{op}'"),
            Self::Commentary(ch) => write!(f, "commentary {ch:?}"),
        }
    }
}

/// A single token produced by the bfgo lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The operator carried by this token, if any.
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            TokenKind::Commentary(_) => None,
        }
    }
}
