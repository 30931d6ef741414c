//! bfgo translator as a WASM module for browser environments.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { compile, check } from 'bfgo-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(compile("++[>+<-]", "add.bf", 30000));
//! // { success: true, output: "package main\n...", statements: 8, ... }
//! ```

use bfgo_compiler::CompileOptions;
use wasm_bindgen::prelude::*;

/// Translate a program into a complete Go program.
///
/// Returns a JSON string containing a `CompileResult`:
/// ```json
/// {
///   "success": true,
///   "output": "package main\n...",
///   "statements": 8,
///   "source_hash": "…",
///   "errors": { "errors": [], "total_errors": 0 }
/// }
/// ```
///
/// On failure, `success` is `false`, `output` is `null`, and `errors` holds
/// the structural error that stopped compilation. A `memory_cells` of 0 is
/// reported as a parameter error.
#[wasm_bindgen]
pub fn compile(source: &str, filename: &str, memory_cells: usize) -> String {
    let options = CompileOptions::default().with_memory_cells(memory_cells);
    let result = bfgo_compiler::compile_to_result(source, filename, &options);
    serde_json::to_string(&result).unwrap_or_else(|e| serialization_failure(&e, true))
}

/// Check loop balance without generating code.
///
/// Returns a JSON string containing structured errors.
#[wasm_bindgen]
pub fn check(source: &str, filename: &str) -> String {
    let errors = bfgo_compiler::check(source, filename);
    serde_json::to_string(&errors).unwrap_or_else(|e| serialization_failure(&e, false))
}

/// Return the translator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn serialization_failure(err: &serde_json::Error, wrap_result: bool) -> String {
    let errors = format!(
        r#"{{"errors":[{{"message":"Serialization error: {err}"}}],"total_errors":1}}"#
    );
    if wrap_result {
        format!(r#"{{"success":false,"output":null,"errors":{errors}}}"#)
    } else {
        errors
    }
}
