//! `InterpreterBuilder` for creating interpreters with various configurations.

use basic_ir::SharedInterner;

use super::Interpreter;
use crate::console::{stdout_console, SharedConsole};
use crate::diagnostics::DEFAULT_MAX_CALL_DEPTH;
use crate::environment::new_global_scope;
use crate::loader::{FsLoader, ScriptLoader};

/// Builder for [`Interpreter`].
///
/// Defaults: a new interner, the stdout console, scripts read from the
/// file system and a call depth limit of [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    interner: Option<SharedInterner>,
    console: Option<SharedConsole>,
    loader: Option<Box<dyn ScriptLoader>>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            interner: None,
            console: None,
            loader: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Share an existing interner, e.g. with a driver that lexes on its own.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    /// Where `print`, `input` and friends read and write.
    #[must_use]
    pub fn console(mut self, console: SharedConsole) -> Self {
        self.console = Some(console);
        self
    }

    /// Where the `run` builtin loads scripts from.
    #[must_use]
    pub fn loader(mut self, loader: impl ScriptLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Maximum number of nested calls before "Maximum recursion depth
    /// exceeded".
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        let interner = self.interner.unwrap_or_default();
        let globals = new_global_scope(&interner);
        tracing::debug!(max_call_depth = self.max_call_depth, "interpreter created");
        Interpreter {
            interner,
            globals,
            console: self.console.unwrap_or_else(stdout_console),
            loader: self.loader.unwrap_or_else(|| Box::new(FsLoader)),
            max_call_depth: self.max_call_depth,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
