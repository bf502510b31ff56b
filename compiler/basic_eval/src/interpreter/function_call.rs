//! Calling user functions and builtins.

use basic_ir::Span;

use super::Evaluator;
use crate::environment::{LocalScope, Scope};
use crate::errors::{illegal_operation, wrong_arg_count, ControlAction, EvalError, EvalResult};
use crate::value::{Builtin, BuiltinCall, FunctionValue};
use crate::Value;

fn check_arg_count(name: &str, expected: usize, got: usize) -> Result<(), EvalError> {
    if expected == got {
        Ok(())
    } else {
        Err(wrong_arg_count(name, expected, got))
    }
}

impl Evaluator<'_> {
    /// Call `callee` with already evaluated `args`.
    ///
    /// `span` is the whole call expression, `callee_span` just the callee.
    pub(super) fn call(
        &mut self,
        callee: &Value,
        args: Vec<Value>,
        span: Span,
        callee_span: Span,
    ) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_function(function, args, span),
            Value::Builtin(builtin) => self.call_builtin(builtin, args, span),
            _ => Err(illegal_operation().with_span(callee_span).into()),
        }
    }

    /// Run a user function in a child of its defining scope.
    #[tracing::instrument(level = "debug", skip_all, fields(name = function.name))]
    fn call_function(&mut self, function: &FunctionValue, args: Vec<Value>, span: Span) -> EvalResult {
        check_arg_count(function.name, function.params.len(), args.len())?;
        let context = self.context.child(
            function.name,
            self.source.clone(),
            span,
            self.interpreter.max_call_depth,
        )?;

        let scope = LocalScope::new(Scope::with_parent(function.scope.clone()));
        {
            let mut bindings = scope.borrow_mut();
            for (&param, value) in function.params.iter().zip(args) {
                bindings.define(param, value);
            }
        }

        let mut callee = Evaluator::new(
            self.interpreter,
            function.arena.clone(),
            function.source.clone(),
            scope,
            context,
        );
        match callee.eval(function.body) {
            Ok(value) if function.auto_return => Ok(value),
            Ok(_) => Ok(Value::NULL),
            Err(ControlAction::Return(value)) => Ok(value.unwrap_or(Value::NULL)),
            // A loop signal never leaves the function it was raised in.
            Err(ControlAction::Break | ControlAction::Continue) => Ok(Value::NULL),
            Err(err @ ControlAction::Error(_)) => Err(err),
        }
    }

    /// Bind the arguments in a child of the global scope and run the handler.
    #[tracing::instrument(level = "debug", skip_all, fields(name = builtin.name))]
    fn call_builtin(&mut self, builtin: &Builtin, args: Vec<Value>, span: Span) -> EvalResult {
        check_arg_count(builtin.name, builtin.params.len(), args.len())?;
        let context = self.context.child(
            builtin.name,
            self.source.clone(),
            span,
            self.interpreter.max_call_depth,
        )?;

        let interner = &self.interpreter.interner;
        let scope = LocalScope::new(Scope::with_parent(self.interpreter.globals.clone()));
        {
            let mut bindings = scope.borrow_mut();
            for (param, value) in builtin.params.iter().zip(args) {
                bindings.define(interner.intern(param), value);
            }
        }

        let call = BuiltinCall {
            interpreter: self.interpreter,
            scope: &scope,
            context: &context,
        };
        (builtin.handler)(&call).map_err(|mut err| {
            err.locate(&context, &self.source, span);
            err.into()
        })
    }
}
