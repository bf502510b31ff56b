#![allow(clippy::unwrap_used, clippy::expect_used)]

mod properties;

use basic_diagnostic::Diagnostic;

use crate::{buffer_console, Interpreter, Value};

/// Interpreter whose console output is captured.
pub(super) fn interpreter() -> Interpreter {
    Interpreter::builder().console(buffer_console()).build()
}

pub(super) fn run_with(interp: &Interpreter, source: &str) -> Value {
    interp
        .run("<stdin>", source)
        .unwrap_or_else(|d| panic!("program failed:\n{}", d.as_string()))
}

/// Value of the whole program, in list display form.
pub(super) fn program(source: &str) -> String {
    run_with(&interpreter(), source).repr().to_string()
}

/// Value of the last statement, quoted like a list element.
pub(super) fn last(source: &str) -> String {
    last_of(&run_with(&interpreter(), source))
}

pub(super) fn last_of(value: &Value) -> String {
    match value {
        Value::List(items) => items
            .borrow()
            .last()
            .map(|v| v.repr().to_string())
            .unwrap_or_default(),
        other => other.repr().to_string(),
    }
}

/// Everything the program printed.
pub(super) fn output_of(source: &str) -> String {
    let interp = interpreter();
    let _ = interp.run("<stdin>", source);
    interp.console().output()
}

pub(super) fn error_with(interp: &Interpreter, source: &str) -> Diagnostic {
    match interp.run("<stdin>", source) {
        Ok(v) => panic!("expected an error, got {}", v.repr()),
        Err(d) => d,
    }
}

pub(super) fn error_of(source: &str) -> Diagnostic {
    error_with(&interpreter(), source)
}
