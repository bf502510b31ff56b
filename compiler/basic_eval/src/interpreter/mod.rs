//! Tree-walking interpreter.
//!
//! [`Interpreter`] owns what lives for a whole session: the interner, the
//! global scope, the console, the script loader and the call-depth limit.
//! Evaluation itself happens in an [`Evaluator`], one per executing body:
//! the program, each function call and each nested `run`. An evaluator
//! knows which arena and source file its code comes from, which scope it
//! binds into and which call context it reports errors in.

mod builder;
mod control;
mod function_call;

use std::rc::Rc;

use basic_diagnostic::Diagnostic;
use basic_ir::{
    Expr, ExprId, ExprKind, ExprRange, SharedArena, SharedInterner, SharedSource, SourceFile,
    Span,
};
use basic_stack::ensure_sufficient_stack;

use crate::console::SharedConsole;
use crate::diagnostics::{CallContext, PROGRAM_CONTEXT};
use crate::environment::{LocalScope, Scope};
use crate::errors::{undefined_variable, ControlAction, EvalResult};
use crate::loader::ScriptLoader;
use crate::value::{FunctionValue, ANONYMOUS};
use crate::{evaluate_binary, evaluate_unary, Value};

pub use builder::InterpreterBuilder;

pub struct Interpreter {
    interner: SharedInterner,
    globals: LocalScope<Scope>,
    console: SharedConsole,
    loader: Box<dyn ScriptLoader>,
    max_call_depth: usize,
}

impl Interpreter {
    /// Interpreter with a fresh global scope, stdout console and file loader.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn globals(&self) -> &LocalScope<Scope> {
        &self.globals
    }

    pub fn console(&self) -> &SharedConsole {
        &self.console
    }

    pub fn loader(&self) -> &dyn ScriptLoader {
        self.loader.as_ref()
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Lex, parse and evaluate `text` in the global scope.
    ///
    /// The result of a program is the list of its statement values. A
    /// top-level `return` ends the program with its value; a stray `break`
    /// or `continue` ends it with `null`.
    pub fn run(&self, name: &str, text: &str) -> Result<Value, Diagnostic> {
        self.run_source(
            SourceFile::shared(name, text),
            CallContext::root(PROGRAM_CONTEXT),
        )
    }

    #[tracing::instrument(level = "debug", skip_all, fields(source = source.name()))]
    pub(crate) fn run_source(
        &self,
        source: SharedSource,
        context: Rc<CallContext>,
    ) -> Result<Value, Diagnostic> {
        let tokens = basic_lexer::lex(source.text(), &self.interner)
            .map_err(|e| e.into_diagnostic(source.clone()))?;
        let output =
            basic_parse::parse(&tokens).map_err(|e| e.into_diagnostic(source.clone()))?;
        tracing::debug!(
            tokens = tokens.len(),
            nodes = output.arena.expr_count(),
            "parsed"
        );

        let arena = SharedArena::new(output.arena);
        let mut evaluator =
            Evaluator::new(self, arena, source.clone(), self.globals.clone(), context);
        match evaluator.eval(output.root) {
            Ok(value) => Ok(value),
            Err(ControlAction::Return(value)) => Ok(value.unwrap_or(Value::NULL)),
            Err(ControlAction::Break | ControlAction::Continue) => Ok(Value::NULL),
            Err(ControlAction::Error(err)) => Err(err.into_diagnostic(&source)),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates the code of one arena in one scope and call context.
pub(crate) struct Evaluator<'i> {
    interpreter: &'i Interpreter,
    arena: SharedArena,
    source: SharedSource,
    scope: LocalScope<Scope>,
    context: Rc<CallContext>,
}

impl<'i> Evaluator<'i> {
    pub(crate) fn new(
        interpreter: &'i Interpreter,
        arena: SharedArena,
        source: SharedSource,
        scope: LocalScope<Scope>,
        context: Rc<CallContext>,
    ) -> Self {
        Evaluator {
            interpreter,
            arena,
            source,
            scope,
            context,
        }
    }

    /// Evaluate one expression.
    ///
    /// Errors leaving this function are located: they carry the source file
    /// and traceback of the innermost expression that produced them.
    pub(crate) fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| {
            let Expr { kind, span } = *self.arena.get_expr(id);
            self.eval_kind(kind, span).map_err(|action| match action {
                ControlAction::Error(mut err) => {
                    err.locate(&self.context, &self.source, span);
                    ControlAction::Error(err)
                }
                signal => signal,
            })
        })
    }

    fn eval_kind(&mut self, kind: ExprKind, span: Span) -> EvalResult {
        match kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Float(bits) => Ok(Value::Float(f64::from_bits(bits))),
            ExprKind::Str(id) => Ok(Value::string(self.arena.get_str(id))),
            ExprKind::List(range) => Ok(Value::list(self.eval_list(range)?)),

            ExprKind::Ident(name) => self.scope.borrow().lookup(name).ok_or_else(|| {
                undefined_variable(self.interpreter.interner.lookup(name)).into()
            }),
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                tracing::trace!(name = self.interpreter.interner.lookup(name), "assign");
                self.scope.borrow_mut().define(name, value.clone());
                Ok(value)
            }

            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary(&value, op).map_err(|e| {
                    tracing::trace!(op = op.as_symbol(), "operator failed");
                    e.with_span(self.span_of(operand)).into()
                })
            }
            ExprKind::Binary { op, left, right } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                evaluate_binary(&lhs, &rhs, op).map_err(|e| {
                    tracing::trace!(op = op.as_symbol(), "operator failed");
                    e.with_span(self.span_of(right)).into()
                })
            }

            ExprKind::If {
                branches,
                else_branch,
            } => self.eval_if(branches, else_branch),
            ExprKind::For {
                var,
                start,
                end,
                step,
                body,
                multiline,
            } => self.eval_for(var, start, end, step, body, multiline),
            ExprKind::While {
                cond,
                body,
                multiline,
            } => self.eval_while(cond, body, multiline),

            ExprKind::FunctionDef {
                name,
                params,
                body,
                auto_return,
            } => {
                let function = Value::Function(Rc::new(FunctionValue {
                    name: name.map_or(ANONYMOUS, |n| self.interpreter.interner.lookup(n)),
                    params: self.arena.get_params(params).to_vec(),
                    body,
                    auto_return,
                    arena: self.arena.clone(),
                    source: self.source.clone(),
                    scope: self.scope.clone(),
                }));
                if let Some(name) = name {
                    self.scope.borrow_mut().define(name, function.clone());
                }
                Ok(function)
            }
            ExprKind::Call { callee, args } => {
                let callee_value = self.eval(callee)?;
                let args = self.eval_list(args)?;
                self.call(&callee_value, args, span, self.span_of(callee))
            }

            ExprKind::Return(value) => {
                let value = match value {
                    Some(id) => Some(self.eval(id)?),
                    None => None,
                };
                Err(ControlAction::Return(value))
            }
            ExprKind::Continue => Err(ControlAction::Continue),
            ExprKind::Break => Err(ControlAction::Break),

            ExprKind::Block(range) => Ok(Value::list(self.eval_list(range)?)),
        }
    }

    /// Evaluate a run of expressions in order, stopping at the first signal.
    fn eval_list(&mut self, range: ExprRange) -> Result<Vec<Value>, ControlAction> {
        let arena = self.arena.clone();
        let ids = arena.get_expr_list(range);
        let mut values = Vec::with_capacity(ids.len());
        for &id in ids {
            values.push(self.eval(id)?);
        }
        Ok(values)
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}

#[cfg(test)]
mod tests;
