//! Shared types for the bfgo translator.
//!
//! This crate defines source spans, source files, and the structured
//! diagnostic types used across every stage of the pipeline.

mod error;
mod span;

pub use error::{BfgoError, CompileErrors, ErrorCategory, ErrorCode, Severity};
pub use span::{SourceFile, Span};
