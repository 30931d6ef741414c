//! Codegen error types.

use bfgo_types::{BfgoError, ErrorCode, SourceFile, Span};
use thiserror::Error;

/// A loop-balance violation detected by the step function.
///
/// Both kinds abort the whole compilation; there is no partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A `]` while no loop is open.
    #[error("invalid syntax, loop close detected with no associated open loop")]
    UnmatchedLoopClose,

    /// A `[` still open at end of input.
    #[error("invalid syntax, open loop detected at end of program parsing")]
    UnclosedLoop,
}

impl StructuralError {
    pub fn code(self) -> ErrorCode {
        match self {
            Self::UnmatchedLoopClose => ErrorCode::UNMATCHED_LOOP_CLOSE,
            Self::UnclosedLoop => ErrorCode::UNCLOSED_LOOP,
        }
    }

    fn suggestion(self) -> &'static str {
        match self {
            Self::UnmatchedLoopClose => "Remove this ']' or add a matching '[' before it",
            Self::UnclosedLoop => "Add a matching ']' after this '['",
        }
    }
}

/// Errors produced while filling an output template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{{` without a closing `}}`.
    #[error("unterminated template action starting at byte {0}")]
    Unterminated(usize),

    /// An action other than `{{.Mem}}` or `{{.Body}}`.
    #[error("unknown template action `{{{{{0}}}}}`")]
    UnknownAction(String),

    /// The template never places the generated body.
    #[error("template has no `{{{{.Body}}}}` placeholder")]
    MissingBody,
}

/// Errors that can occur during code generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Loop balance was violated at `span`.
    #[error("{span}: {error}")]
    Structural { error: StructuralError, span: Span },

    /// The output template could not be used.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl CodegenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Structural { error, .. } => error.code(),
            Self::Template(_) => ErrorCode::INVALID_TEMPLATE,
        }
    }

    /// Convert into a structured diagnostic against `source`.
    ///
    /// Template errors have no position in the program text and are
    /// reported at 1:1.
    pub fn to_diagnostic(&self, source: &SourceFile) -> BfgoError {
        match self {
            Self::Structural { error, span } => {
                let line = source.line(span.start_line).unwrap_or("");
                BfgoError::new(&source.name, error.code(), error.to_string(), *span, line)
                    .with_suggestion(error.suggestion())
            }
            Self::Template(err) => BfgoError::new(
                &source.name,
                ErrorCode::INVALID_TEMPLATE,
                err.to_string(),
                Span::point(1, 1),
                "",
            ),
        }
    }
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
