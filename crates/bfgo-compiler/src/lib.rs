//! bfgo compiler: orchestrates the full translation pipeline.
//!
//! ```text
//! program text → Lexer → Generator (step fold) → GeneratedBody → Template → Go source
//! ```
//!
//! Compilation is all-or-nothing: the first loop-balance violation aborts
//! the pass and no output is produced.

mod options;

use bfgo_codegen::{generate, CodegenError, GeneratedBody, Template, DEFAULT_TEMPLATE};
use bfgo_lexer::Lexer;
use bfgo_types::{BfgoError, CompileErrors, ErrorCode, SourceFile, Span};
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use options::CompileOptions;

/// The structured result of a compilation, for hosts that want JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileResult {
    /// Whether compilation succeeded.
    pub success: bool,
    /// The generated Go program, present only on success.
    pub output: Option<String>,
    /// Number of operator statements in the body.
    pub statements: usize,
    /// Lowercase hex SHA-256 of the program text.
    pub source_hash: String,
    /// Diagnostics.
    pub errors: CompileErrors,
}

impl CompileResult {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Translate a program into its Go statement body only.
pub fn compile_body(source: &str, filename: &str) -> Result<String, BfgoError> {
    let sf = SourceFile::new(filename, source);
    generate_body(&sf).map(GeneratedBody::into_string)
}

/// Translate a program into a complete Go program.
pub fn compile(
    source: &str,
    filename: &str,
    options: &CompileOptions,
) -> Result<String, BfgoError> {
    let sf = SourceFile::new(filename, source);
    let body = generate_body(&sf)?;
    assemble(&sf, &body, options)
}

/// Check loop balance without keeping any output.
pub fn check(source: &str, filename: &str) -> CompileErrors {
    let sf = SourceFile::new(filename, source);
    match generate_body(&sf) {
        Ok(_) => CompileErrors::empty(),
        Err(err) => err.into(),
    }
}

/// Compile and wrap the outcome in a [`CompileResult`].
pub fn compile_to_result(
    source: &str,
    filename: &str,
    options: &CompileOptions,
) -> CompileResult {
    let sf = SourceFile::new(filename, source);
    let source_hash = hash_source(source);

    let outcome = generate_body(&sf).and_then(|body| {
        let statements = body.statement_count();
        assemble(&sf, &body, options).map(|program| (program, statements))
    });

    match outcome {
        Ok((program, statements)) => CompileResult {
            success: true,
            output: Some(program),
            statements,
            source_hash,
            errors: CompileErrors::empty(),
        },
        Err(err) => CompileResult {
            success: false,
            output: None,
            statements: 0,
            source_hash,
            errors: err.into(),
        },
    }
}

/// Lowercase hex SHA-256 of `source`.
pub fn hash_source(source: &str) -> String {
    let digest = Sha256::digest(source.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn generate_body(sf: &SourceFile) -> Result<GeneratedBody, BfgoError> {
    let lex = Lexer::new(sf).lex();
    debug!(
        "{}: {} tokens, {} operators",
        sf.name,
        lex.tokens.len(),
        lex.operator_count()
    );
    generate(&lex.tokens).map_err(|e| e.to_diagnostic(sf))
}

fn assemble(
    sf: &SourceFile,
    body: &GeneratedBody,
    options: &CompileOptions,
) -> Result<String, BfgoError> {
    if options.memory_cells == 0 {
        return Err(BfgoError::new(
            &sf.name,
            ErrorCode::INVALID_MEMORY_SIZE,
            "memory cell count must be at least 1",
            Span::point(1, 1),
            "",
        )
        .with_suggestion("Pass a positive memory size, e.g. 30000"));
    }

    let text = options.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let template = Template::parse(text).map_err(|e| CodegenError::from(e).to_diagnostic(sf))?;
    debug!(
        "{}: filling template with {} memory cells",
        sf.name, options.memory_cells
    );
    Ok(template.render(options.memory_cells, body.as_str()))
}
