use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error severity. Every diagnostic bfgo produces is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Structure,
    Parameter,
    Template,
}

/// Numeric error code (E100–E399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Structure errors (E100–E199) ──
    pub const UNMATCHED_LOOP_CLOSE: Self = Self(100);
    pub const UNCLOSED_LOOP: Self = Self(101);

    // ── Parameter errors (E200–E299) ──
    pub const INVALID_MEMORY_SIZE: Self = Self(200);

    // ── Template errors (E300–E399) ──
    pub const INVALID_TEMPLATE: Self = Self(300);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Structure,
            200..=299 => ErrorCategory::Parameter,
            300..=399 => ErrorCategory::Template,
            _ => ErrorCategory::Structure,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Parameter => write!(f, "parameter"),
            Self::Template => write!(f, "template"),
        }
    }
}

/// A structured bfgo diagnostic.
///
/// Hosts render these directly; they must not parse free-form strings.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{span}: {code} [{category}] {message}")]
pub struct BfgoError {
    /// Source file name.
    pub file: String,
    /// Error code (e.g., E100).
    pub code: ErrorCode,
    /// Error severity.
    pub severity: Severity,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Source location.
    #[serde(flatten)]
    pub span: Span,
    /// The exact source line for context.
    pub source_line: String,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl BfgoError {
    /// Create a new error.
    pub fn new(
        file: impl Into<String>,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            code,
            severity: Severity::Error,
            category: code.category(),
            message: message.into(),
            span,
            source_line: source_line.into(),
            suggestion: None,
        }
    }

    /// Attach a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// The structured JSON output for compilation diagnostics.
///
/// Compilation stops at the first structural violation, so `errors` holds
/// at most one entry in practice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileErrors {
    pub errors: Vec<BfgoError>,
    pub total_errors: usize,
}

impl CompileErrors {
    /// Create an empty result (no errors).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a result holding exactly one error.
    pub fn single(error: BfgoError) -> Self {
        let mut errs = Self::empty();
        errs.push_error(error);
        errs
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Add an error.
    pub fn push_error(&mut self, error: BfgoError) {
        self.errors.push(error);
        self.total_errors += 1;
    }
}

impl From<BfgoError> for CompileErrors {
    fn from(error: BfgoError) -> Self {
        Self::single(error)
    }
}
