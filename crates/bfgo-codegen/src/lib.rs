//! bfgo code generator: turns lexed tokens into the body of a Go program.
//!
//! # Architecture
//!
//! Generation is a fold of the pure [`state::step`] function over the token
//! stream. Each step takes the current [`CompilerState`] and one token and
//! returns the next state together with zero or more [`Fragment`]s, which
//! are appended to a [`GeneratedBody`]. [`state::finish`] applies the
//! end-of-input rules.
//!
//! ## Target conventions
//!
//! The body assumes an enclosing Go block that defines:
//! - `index` — mutable cell pointer
//! - `mem` — fixed-size byte slice
//! - `reader` and `readChar(reader)` — single character input
//! - `fmt` — character output via `fmt.Printf`
//!
//! [`Template`] wraps a body in such a block.

pub mod body;
pub mod error;
pub mod generator;
pub mod go;
pub mod state;
pub mod template;

pub use body::GeneratedBody;
pub use error::{CodegenError, CodegenResult, StructuralError, TemplateError};
pub use generator::{generate, Generator};
pub use state::{CompilerState, Fragment};
pub use template::{Template, DEFAULT_MEMORY_CELLS, DEFAULT_TEMPLATE};
