//! Callable values.

use std::fmt;
use std::rc::Rc;

use basic_ir::{ExprId, Name, SharedArena, SharedSource};

use crate::diagnostics::CallContext;
use crate::environment::{LocalScope, Scope};
use crate::errors::EvalError;
use crate::interpreter::Interpreter;
use crate::Value;

/// A user function: its code plus the scope it was defined in.
pub struct FunctionValue {
    /// Display name, `<anonymous>` for unnamed functions.
    pub name: &'static str,
    pub params: Vec<Name>,
    pub body: ExprId,
    /// `=>` form: the body's value is the result.
    pub auto_return: bool,
    pub arena: SharedArena,
    pub source: SharedSource,
    /// Defining scope; calls run in a child of it.
    pub scope: LocalScope<Scope>,
}

// The captured scope usually contains the function itself, so it is left
// out of the debug output.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &self.params.len())
            .field("auto_return", &self.auto_return)
            .finish_non_exhaustive()
    }
}

pub type BuiltinFn = fn(&BuiltinCall<'_>) -> Result<Value, EvalError>;

/// A host function with a fixed parameter list.
pub struct Builtin {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub handler: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// What a builtin handler sees: its bound arguments and the interpreter.
pub struct BuiltinCall<'a> {
    pub interpreter: &'a Interpreter,
    /// Child of the global scope holding the parameters.
    pub scope: &'a LocalScope<Scope>,
    pub context: &'a Rc<CallContext>,
}

impl BuiltinCall<'_> {
    /// Value bound to parameter `param`.
    pub fn arg(&self, param: &str) -> Value {
        let name = self.interpreter.interner().intern(param);
        self.scope.borrow().lookup(name).unwrap_or(Value::NULL)
    }
}
