//! Shared test utilities for phase tests.

use basic_diagnostic::Diagnostic;
use basic_eval::{buffer_console, Interpreter, MemoryLoader, Session, Value};
use basicc::commands::repl_loop;

/// Interpreter with captured output and the given in-memory scripts.
pub fn interpreter(scripts: &[(&str, &str)]) -> Interpreter {
    let mut loader = MemoryLoader::new();
    for (path, text) in scripts {
        loader.insert(*path, *text);
    }
    Interpreter::builder()
        .console(buffer_console())
        .loader(loader)
        .build()
}

/// Run a program; on success return its printed output.
pub fn run_program(source: &str) -> Result<String, Diagnostic> {
    let interp = interpreter(&[]);
    interp.run("main.bas", source)?;
    Ok(interp.console().output())
}

pub fn eval_value(source: &str) -> Value {
    interpreter(&[]).run("main.bas", source).unwrap()
}

/// Everything the REPL writes for `lines`, followed by end of input.
pub fn repl_transcript(session: &Session, lines: &[&str]) -> String {
    let mut input = lines.iter().map(|l| format!("{l}\n"));
    let mut out = Vec::new();
    repl_loop(session, || Ok(input.next()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}
