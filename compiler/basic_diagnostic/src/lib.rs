//! User-facing errors for every pipeline stage.
//!
//! Each stage keeps its own error type (`LexError`, `ParseError`,
//! `EvalError`); at the `run` boundary they all become a [`Diagnostic`],
//! whose [`Diagnostic::as_string`] is the text the driver prints.
//!
//! ```text
//! Runtime Error: Division by zero
//! File <stdin>, line 1
//! Traceback (most recent call last):
//!   File <stdin>, line 1, in <program>
//!
//! 10 / 0
//!      ^
//! ```

mod diagnostic;
mod render;

pub use diagnostic::{Diagnostic, ErrorKind, TraceFrame};
pub use render::string_with_arrows;
