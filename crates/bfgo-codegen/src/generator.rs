//! Drives the step function over a token stream.

use bfgo_lexer::{Operator, Token};
use bfgo_types::Span;
use log::debug;

use crate::body::GeneratedBody;
use crate::error::{CodegenError, CodegenResult};
use crate::state::{self, CompilerState};

/// Generate the Go body for a complete token stream.
///
/// All-or-nothing: the first structural violation aborts the pass and no
/// body is returned.
pub fn generate(tokens: &[Token]) -> CodegenResult<GeneratedBody> {
    let mut generator = Generator::new();
    for token in tokens {
        generator.feed(token)?;
    }
    generator.finish()
}

/// One in-flight generation.
///
/// Besides the [`CompilerState`], the generator remembers where each open
/// loop started so an unclosed loop can be reported at its `[`.
#[derive(Debug, Default)]
pub struct Generator {
    state: CompilerState,
    open_loops: Vec<Span>,
    body: GeneratedBody,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one token.
    pub fn feed(&mut self, token: &Token) -> CodegenResult<()> {
        let (next, fragments) =
            state::step(self.state, token.kind).map_err(|error| CodegenError::Structural {
                error,
                span: token.span,
            })?;

        match token.operator() {
            Some(Operator::LoopOpen) => self.open_loops.push(token.span),
            Some(Operator::LoopClose) => {
                self.open_loops.pop();
            }
            _ => {}
        }
        debug_assert_eq!(next.open_loop_depth, self.open_loops.len());

        self.state = next;
        self.body.extend(&fragments);
        Ok(())
    }

    /// Apply the end-of-input rules and hand back the body.
    pub fn finish(mut self) -> CodegenResult<GeneratedBody> {
        // `finish` only fails with an open loop, so the stack is non-empty.
        let fragments = state::finish(self.state).map_err(|error| CodegenError::Structural {
            error,
            span: self.open_loops.last().copied().unwrap_or(Span::point(1, 1)),
        })?;
        self.body.extend(&fragments);
        debug!(
            "generated {} statements, {} comment lines",
            self.body.statement_count(),
            self.body.comment_count()
        );
        Ok(self.body)
    }
}
