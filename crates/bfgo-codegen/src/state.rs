//! Scan state and the pure step function.
//!
//! [`step`] is the whole translation rule for one significant character;
//! [`finish`] is the rule for end of input. Neither performs I/O or keeps
//! state outside the [`CompilerState`] value passed in.

use bfgo_lexer::{Operator, TokenKind};

use crate::error::StructuralError;

/// Mutable scan state, threaded through every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompilerState {
    /// Number of currently unclosed loops. Must be zero at end of input.
    pub open_loop_depth: usize,
    /// True while inside a run of commentary characters.
    pub in_comment: bool,
}

impl CompilerState {
    /// Indentation, in levels, for a line written at the current depth.
    pub fn indent(&self) -> usize {
        self.open_loop_depth + 1
    }
}

/// A piece of output produced by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    /// A complete statement line: indentation, statement text, line break.
    Statement { indent: usize, operator: Operator },
    /// Opens a comment line: indentation and the comment marker. The line
    /// stays open for [`Fragment::CommentChar`]s.
    CommentStart { indent: usize },
    /// One character appended to the open comment line.
    CommentChar(char),
    /// Terminates the open comment line.
    LineBreak,
}

/// Advance `state` by one significant character.
pub fn step(
    state: CompilerState,
    kind: TokenKind,
) -> Result<(CompilerState, Vec<Fragment>), StructuralError> {
    match kind {
        TokenKind::Operator(operator) => emit_command(state, operator),
        TokenKind::Commentary(ch) => Ok(emit_comment(state, ch)),
    }
}

/// Apply the end-of-input rules.
///
/// A comment still open is terminated so it cannot swallow whatever the
/// assembler places after the body.
pub fn finish(state: CompilerState) -> Result<Vec<Fragment>, StructuralError> {
    if state.open_loop_depth != 0 {
        return Err(StructuralError::UnclosedLoop);
    }
    if state.in_comment {
        Ok(vec![Fragment::LineBreak])
    } else {
        Ok(Vec::new())
    }
}

fn emit_command(
    state: CompilerState,
    operator: Operator,
) -> Result<(CompilerState, Vec<Fragment>), StructuralError> {
    let mut out = Vec::with_capacity(2);
    if state.in_comment {
        out.push(Fragment::LineBreak);
    }

    // `]` lines up with its `[`, so decrement before indenting.
    let mut depth = state.open_loop_depth;
    if operator == Operator::LoopClose {
        depth = depth
            .checked_sub(1)
            .ok_or(StructuralError::UnmatchedLoopClose)?;
    }

    out.push(Fragment::Statement {
        indent: depth + 1,
        operator,
    });

    if operator == Operator::LoopOpen {
        depth += 1;
    }

    let next = CompilerState {
        open_loop_depth: depth,
        in_comment: false,
    };
    Ok((next, out))
}

fn emit_comment(state: CompilerState, ch: char) -> (CompilerState, Vec<Fragment>) {
    let mut out = Vec::with_capacity(2);
    if !state.in_comment {
        out.push(Fragment::CommentStart {
            indent: state.indent(),
        });
    }
    out.push(Fragment::CommentChar(ch));
    let next = CompilerState {
        in_comment: true,
        ..state
    };
    (next, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(o: Operator) -> TokenKind {
        TokenKind::Operator(o)
    }

    #[test]
    fn test_fresh_state() {
        let s = CompilerState::default();
        assert_eq!(s.open_loop_depth, 0);
        assert!(!s.in_comment);
        assert_eq!(s.indent(), 1);
    }

    #[test]
    fn test_increment_at_top_level() {
        let (s, out) = step(CompilerState::default(), op(Operator::Increment)).unwrap();
        assert_eq!(s, CompilerState::default());
        assert_eq!(
            out,
            vec![Fragment::Statement {
                indent: 1,
                operator: Operator::Increment
            }]
        );
    }

    #[test]
    fn test_open_indents_after_writing() {
        let (s, out) = step(CompilerState::default(), op(Operator::LoopOpen)).unwrap();
        assert_eq!(s.open_loop_depth, 1);
        assert_eq!(
            out,
            vec![Fragment::Statement {
                indent: 1,
                operator: Operator::LoopOpen
            }]
        );
    }

    #[test]
    fn test_close_dedents_before_writing() {
        let inside = CompilerState {
            open_loop_depth: 2,
            in_comment: false,
        };
        let (s, out) = step(inside, op(Operator::LoopClose)).unwrap();
        assert_eq!(s.open_loop_depth, 1);
        assert_eq!(
            out,
            vec![Fragment::Statement {
                indent: 2,
                operator: Operator::LoopClose
            }]
        );
    }

    #[test]
    fn test_close_at_depth_zero_fails() {
        let err = step(CompilerState::default(), op(Operator::LoopClose)).unwrap_err();
        assert_eq!(err, StructuralError::UnmatchedLoopClose);
    }

    #[test]
    fn test_comment_start_then_continue() {
        let (s, out) = step(CompilerState::default(), TokenKind::Commentary('h')).unwrap();
        assert!(s.in_comment);
        assert_eq!(
            out,
            vec![Fragment::CommentStart { indent: 1 }, Fragment::CommentChar('h')]
        );

        let (s, out) = step(s, TokenKind::Commentary('i')).unwrap();
        assert!(s.in_comment);
        assert_eq!(out, vec![Fragment::CommentChar('i')]);
    }

    #[test]
    fn test_operator_after_comment_breaks_line() {
        let commenting = CompilerState {
            open_loop_depth: 0,
            in_comment: true,
        };
        let (s, out) = step(commenting, op(Operator::Output)).unwrap();
        assert!(!s.in_comment);
        assert_eq!(out[0], Fragment::LineBreak);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_comment_inside_loop_uses_loop_indent() {
        let inside = CompilerState {
            open_loop_depth: 3,
            in_comment: false,
        };
        let (_, out) = step(inside, TokenKind::Commentary('x')).unwrap();
        assert_eq!(out[0], Fragment::CommentStart { indent: 4 });
    }

    #[test]
    fn test_finish_clean() {
        assert_eq!(finish(CompilerState::default()), Ok(Vec::new()));
    }

    #[test]
    fn test_finish_terminates_comment() {
        let commenting = CompilerState {
            open_loop_depth: 0,
            in_comment: true,
        };
        assert_eq!(finish(commenting), Ok(vec![Fragment::LineBreak]));
    }

    #[test]
    fn test_finish_with_open_loop_fails() {
        let open = CompilerState {
            open_loop_depth: 1,
            in_comment: false,
        };
        assert_eq!(finish(open), Err(StructuralError::UnclosedLoop));
    }
}
