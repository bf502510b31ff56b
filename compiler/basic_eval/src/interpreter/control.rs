//! Conditionals and loops.
//!
//! Block-form constructs (`then` followed by a newline, closed by `end`)
//! are statements and yield `null`. Single-line `if` yields its branch's
//! value and single-line loops collect their iteration values into a list.

use basic_ir::{BranchRange, ElseBranch, ExprId, Name};

use super::Evaluator;
use crate::errors::{illegal_operation, ControlAction, EvalResult};
use crate::Value;

/// How one loop iteration ended.
enum LoopAction {
    /// Body finished normally with this value.
    Next(Value),
    /// `continue`.
    Skip,
    /// `break`.
    Stop,
}

/// Absorb `break`/`continue`; `return` and errors keep unwinding.
fn to_loop_action(result: EvalResult) -> Result<LoopAction, ControlAction> {
    match result {
        Ok(value) => Ok(LoopAction::Next(value)),
        Err(ControlAction::Continue) => Ok(LoopAction::Skip),
        Err(ControlAction::Break) => Ok(LoopAction::Stop),
        Err(other) => Err(other),
    }
}

/// Loop counter for `for`: integral when start, end and step all are.
#[derive(Clone, Copy)]
enum Counter {
    Int { value: i64, end: i64, step: i64 },
    Float { value: f64, end: f64, step: f64 },
}

impl Counter {
    fn new(start: &Value, end: &Value, step: &Value) -> Option<Counter> {
        if let (Value::Int(value), Value::Int(end), Value::Int(step)) = (start, end, step) {
            return Some(Counter::Int {
                value: *value,
                end: *end,
                step: *step,
            });
        }
        Some(Counter::Float {
            value: start.as_f64()?,
            end: end.as_f64()?,
            step: step.as_f64()?,
        })
    }

    /// Ascending loops run while below `end`, descending ones while above.
    fn in_range(self) -> bool {
        match self {
            Counter::Int { value, end, step } => {
                if step >= 0 {
                    value < end
                } else {
                    value > end
                }
            }
            Counter::Float { value, end, step } => {
                if step >= 0.0 {
                    value < end
                } else {
                    value > end
                }
            }
        }
    }

    fn current(self) -> Value {
        match self {
            Counter::Int { value, .. } => Value::Int(value),
            Counter::Float { value, .. } => Value::Float(value),
        }
    }

    /// Step forward. `None` once an integer counter would overflow.
    fn advance(self) -> Option<Counter> {
        match self {
            Counter::Int { value, end, step } => Some(Counter::Int {
                value: value.checked_add(step)?,
                end,
                step,
            }),
            Counter::Float { value, end, step } => Some(Counter::Float {
                value: value + step,
                end,
                step,
            }),
        }
    }
}

impl Evaluator<'_> {
    pub(super) fn eval_if(
        &mut self,
        branches: BranchRange,
        else_branch: Option<ElseBranch>,
    ) -> EvalResult {
        let arena = self.arena.clone();
        for branch in arena.get_branches(branches) {
            if self.eval(branch.condition)?.is_truthy() {
                let value = self.eval(branch.body)?;
                return Ok(if branch.multiline { Value::NULL } else { value });
            }
        }
        match else_branch {
            Some(else_branch) => {
                let value = self.eval(else_branch.body)?;
                Ok(if else_branch.multiline {
                    Value::NULL
                } else {
                    value
                })
            }
            None => Ok(Value::NULL),
        }
    }

    pub(super) fn eval_for(
        &mut self,
        var: Name,
        start: ExprId,
        end: ExprId,
        step: Option<ExprId>,
        body: ExprId,
        multiline: bool,
    ) -> EvalResult {
        let start_value = self.eval_number(start)?;
        let end_value = self.eval_number(end)?;
        let step_value = match step {
            Some(id) => self.eval_number(id)?,
            None => Value::Int(1),
        };
        let Some(mut counter) = Counter::new(&start_value, &end_value, &step_value) else {
            return Err(illegal_operation().with_span(self.span_of(start)).into());
        };

        let mut results = Vec::new();
        while counter.in_range() {
            self.scope.borrow_mut().define(var, counter.current());
            match to_loop_action(self.eval(body))? {
                LoopAction::Next(value) => results.push(value),
                LoopAction::Skip => {}
                LoopAction::Stop => break,
            }
            match counter.advance() {
                Some(next) => counter = next,
                None => break,
            }
        }
        Ok(loop_result(results, multiline))
    }

    pub(super) fn eval_while(&mut self, cond: ExprId, body: ExprId, multiline: bool) -> EvalResult {
        let mut results = Vec::new();
        while self.eval(cond)?.is_truthy() {
            match to_loop_action(self.eval(body))? {
                LoopAction::Next(value) => results.push(value),
                LoopAction::Skip => {}
                LoopAction::Stop => break,
            }
        }
        Ok(loop_result(results, multiline))
    }

    /// Evaluate a loop bound, which must be a number.
    fn eval_number(&mut self, id: ExprId) -> EvalResult {
        let value = self.eval(id)?;
        if value.is_number() {
            Ok(value)
        } else {
            Err(illegal_operation().with_span(self.span_of(id)).into())
        }
    }
}

fn loop_result(results: Vec<Value>, multiline: bool) -> Value {
    if multiline {
        Value::NULL
    } else {
        Value::list(results)
    }
}
