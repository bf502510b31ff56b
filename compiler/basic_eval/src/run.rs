//! Entry points for hosts.

use basic_diagnostic::Diagnostic;

use crate::interpreter::Interpreter;
use crate::Value;

/// Run `text` as a complete program against a fresh global scope.
///
/// `source_name` only appears in diagnostics (a path, or `<stdin>`).
pub fn run(source_name: &str, text: &str) -> Result<Value, Diagnostic> {
    Interpreter::new().run(source_name, text)
}

/// Several programs sharing one global scope, as in the REPL.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    pub fn new() -> Self {
        Session {
            interpreter: Interpreter::new(),
        }
    }

    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Session { interpreter }
    }

    pub fn run(&self, source_name: &str, text: &str) -> Result<Value, Diagnostic> {
        self.interpreter.run(source_name, text)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
