//! Command handlers for the `basic` CLI.
//!
//! Each submodule implements one command. Handlers that print return
//! whether they succeeded and leave the exit code to `main`; the
//! `*_source` functions do the work without touching stdio so tests can
//! call them directly.

mod debug;
mod options;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use options::{parse_options, Options};
pub use repl::{render_result, repl, repl_loop, PROMPT};
pub use run::{run_file, run_files};

/// Read a source file, turning I/O errors into a one-line message.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
