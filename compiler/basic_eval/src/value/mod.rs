//! Runtime values.
//!
//! Numbers and strings are immutable and copied on bind. Lists are shared:
//! every reference to a list sees `append`/`pop`/`extend`, while the list
//! operators (`+ - *`) build a new list whose elements are shared with the
//! old one.

mod function;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use basic_stack::ensure_sufficient_stack;

pub use function::{Builtin, BuiltinCall, BuiltinFn, FunctionValue};

/// Name shown for functions defined without one.
pub const ANONYMOUS: &str = "<anonymous>";

/// Backing storage of a list value.
pub type SharedList = Rc<RefCell<Vec<Value>>>;

#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    List(SharedList),
    Function(Rc<FunctionValue>),
    Builtin(&'static Builtin),
}

impl Value {
    /// The `null` sentinel. There is no separate null type.
    pub const NULL: Value = Value::Int(0);

    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(elements)))
    }

    pub fn from_bool(b: bool) -> Self {
        Value::Int(i64::from(b))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Builtin(_))
    }

    /// Numeric value widened to `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.borrow().is_empty(),
            Value::Function(_) | Value::Builtin(_) => true,
        }
    }

    /// Form used inside list displays: strings are quoted.
    pub fn repr(&self) -> Repr<'_> {
        Repr(self)
    }

    /// Shallow structural copy: a new list container over the same elements.
    pub fn copy_list(items: &SharedList) -> Vec<Value> {
        items.borrow().clone()
    }
}

fn fmt_float(f: f64, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.is_finite() && f.fract() == 0.0 {
        write!(out, "{f:.1}")
    } else {
        write!(out, "{f}")
    }
}

fn fmt_list(items: &SharedList, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_list(items, &mut Vec::new(), out)
}

/// `open` holds the lists being written further up; meeting one of them
/// again prints `[...]` instead of recursing forever.
fn write_list(
    items: &SharedList,
    open: &mut Vec<*const RefCell<Vec<Value>>>,
    out: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let ptr = Rc::as_ptr(items);
    if open.contains(&ptr) {
        return out.write_str("[...]");
    }
    open.push(ptr);
    out.write_str("[")?;
    for (i, item) in items.borrow().iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        match item {
            Value::List(inner) => ensure_sufficient_stack(|| write_list(inner, open, out))?,
            other => write!(out, "{}", other.repr())?,
        }
    }
    open.pop();
    out.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => fmt_list(items, f),
            Value::Function(func) => write!(f, "<function {}>", func.name),
            Value::Builtin(b) => write!(f, "<built-in function {}>", b.name),
        }
    }
}

/// See [`Value::repr`].
pub struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Str(s) => write!(f, "\"{s}\""),
            other => write!(f, "{other}"),
        }
    }
}
