//! BASIC Eval - tree-walking interpreter.
//!
//! # Architecture
//!
//! - [`Interpreter`]: session state (interner, global scope, console,
//!   script loader, call-depth limit) and the `run` entry point
//! - `Evaluator`: exhaustive `match` over `ExprKind`, one per executing body
//! - [`Scope`] / [`LocalScope`]: chained lexical scopes, closures hold their
//!   defining scope
//! - [`CallContext`]: the call chain used for tracebacks and the depth limit
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch on values
//! - [`BUILTINS`]: the host function library
//!
//! Evaluation returns [`EvalResult`] = `Result<Value, ControlAction>`;
//! `return`, `break` and `continue` travel the `Err` side next to runtime
//! errors, so `?` unwinds all of them to the construct that consumes them.

mod builtins;
mod console;
mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod loader;
mod operators;
mod run;
mod unary_operators;
mod value;

pub use builtins::{builtin, BUILTINS};
pub use console::{
    buffer_console, scripted_console, silent_console, stdout_console, BufferConsole,
    ConsoleHandler, SharedConsole, StdConsole,
};
pub use diagnostics::{CallContext, DEFAULT_MAX_CALL_DEPTH, PROGRAM_CONTEXT};
pub use environment::{new_global_scope, LocalScope, Scope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use loader::{FsLoader, LoadError, MemoryLoader, ScriptLoader};
pub use operators::evaluate_binary;
pub use run::{run, Session};
pub use unary_operators::evaluate_unary;
pub use value::{Builtin, BuiltinCall, BuiltinFn, FunctionValue, Repr, SharedList, Value, ANONYMOUS};

#[cfg(test)]
mod tests;
