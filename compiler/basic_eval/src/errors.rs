//! Runtime errors and control-flow signals.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` gives each runtime failure a typed category. The factory
//! functions (`division_by_zero()`, `undefined_variable()`, ...) are the
//! public API: they fill in both `kind` and `message`.
//!
//! An error starts out unlocated. The evaluator attaches a span, and the
//! first expression the error passes through records the source file and
//! call chain it happened in (see [`EvalError::locate`]).

use std::fmt;

use basic_diagnostic::{Diagnostic, ErrorKind, TraceFrame};
use basic_ir::{SharedSource, Span};

use crate::diagnostics::CallContext;
use crate::Value;

/// Result of evaluating one expression.
pub type EvalResult = Result<Value, ControlAction>;

/// Everything that can unwind out of an expression.
///
/// `Return`, `Break` and `Continue` are not errors: they travel the same
/// `Err` path so that `?` carries them to the construct that consumes them
/// (function boundary, loop).
#[derive(Clone, Debug)]
pub enum ControlAction {
    Error(Box<EvalError>),
    Return(Option<Value>),
    Break,
    Continue,
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    DivisionByZero,
    UndefinedVariable { name: String },
    IndexOutOfBounds,
    IllegalOperation,
    /// `list * x` where `x` is not a list.
    ListConcatenation,
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    RecursionLimit,
    /// `string * n` would exceed the string size limit.
    StringTooLong,
    /// Builtin argument checks, script loading and other one-off messages.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("Division by zero"),
            Self::UndefinedVariable { name } => write!(f, "'{name}' is not defined"),
            Self::IndexOutOfBounds => f.write_str("Index out of bounds"),
            Self::IllegalOperation => f.write_str("Illegal operation"),
            Self::ListConcatenation => f.write_str("Cannot concatenate list with non-list"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                if got > expected {
                    write!(f, "{} too many arguments passed into '{name}'", got - expected)
                } else {
                    write!(f, "{} too few arguments passed into '{name}'", expected - got)
                }
            }
            Self::RecursionLimit => f.write_str("Maximum recursion depth exceeded"),
            Self::StringTooLong => f.write_str("String too long"),
            Self::Custom { message } => f.write_str(message),
        }
    }
}

/// Where an error happened, fixed once by [`EvalError::locate`].
#[derive(Clone, Debug)]
struct Location {
    source: SharedSource,
    span: Span,
    /// Outermost frame first.
    traceback: Vec<TraceFrame>,
}

/// Runtime error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()` for factory-created errors.
    pub message: String,
    /// Span the error points at, when it is not the span of the expression
    /// that produced it (e.g. the right operand of a binary operator).
    pub span: Option<Span>,
    location: Option<Location>,
}

impl EvalError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            span: None,
            location: None,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            location: None,
        }
    }

    /// Point the error at `span`.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Fix the error's source and traceback.
    ///
    /// `fallback` is used when no span was attached explicitly. Calling this
    /// on an already located error does nothing, so the innermost caller wins.
    pub fn locate(&mut self, context: &CallContext, source: &SharedSource, fallback: Span) {
        if self.location.is_some() {
            return;
        }
        let span = self.span.unwrap_or(fallback);
        self.location = Some(Location {
            source: source.clone(),
            span,
            traceback: context.traceback(source, span),
        });
    }

    /// Render as a `Runtime Error` diagnostic.
    ///
    /// `fallback` is only used for an error that was never located, which
    /// the evaluator does not produce.
    pub fn into_diagnostic(self, fallback: &SharedSource) -> Diagnostic {
        match self.location {
            Some(loc) => Diagnostic::new(ErrorKind::Runtime, self.message, loc.span, loc.source)
                .with_traceback(loc.traceback),
            None => Diagnostic::new(
                ErrorKind::Runtime,
                self.message,
                self.span.unwrap_or(Span::DUMMY),
                fallback.clone(),
            ),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Error factories

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn index_out_of_bounds() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds)
}

#[cold]
pub fn illegal_operation() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IllegalOperation)
}

#[cold]
pub fn cannot_concatenate() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ListConcatenation)
}

/// Wrong number of arguments in a call to `name`.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn recursion_limit_exceeded() -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit)
}

#[cold]
pub fn string_too_long() -> EvalError {
    EvalError::from_kind(EvalErrorKind::StringTooLong)
}

/// A builtin received an argument of the wrong kind.
#[cold]
pub fn wrong_arg_type(message: &str) -> EvalError {
    EvalError::new(message)
}

#[cold]
pub fn script_load_failed(path: &str, cause: &dyn fmt::Display) -> EvalError {
    EvalError::new(format!("Failed to load script \"{path}\"\n{cause}"))
}

#[cold]
pub fn script_run_failed(path: &str, nested: &Diagnostic) -> EvalError {
    EvalError::new(format!(
        "Failed to finish executing script \"{path}\"\n{}",
        nested.as_string()
    ))
}
