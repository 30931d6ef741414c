//! bfgo lexer: converts program text into a stream of operator and
//! commentary tokens.

pub mod lexer;
pub mod token;

pub use lexer::{is_ignored, LexResult, Lexer};
pub use token::{Operator, Token, TokenKind, ALL_OPERATORS};
