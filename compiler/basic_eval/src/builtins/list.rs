//! List builtins. These mutate the list in place, so every reference to it
//! sees the change.

use crate::errors::{wrong_arg_type, EvalError};
use crate::operators::list_index;
use crate::value::{BuiltinCall, SharedList};
use crate::Value;

fn list_arg(call: &BuiltinCall<'_>, param: &str, message: &str) -> Result<SharedList, EvalError> {
    match call.arg(param) {
        Value::List(items) => Ok(items),
        _ => Err(wrong_arg_type(message)),
    }
}

pub(super) fn append(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    let items = list_arg(call, "list", "First argument must be list")?;
    items.borrow_mut().push(call.arg("value"));
    Ok(Value::NULL)
}

/// Remove and return the element at `index`.
pub(super) fn pop(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    let items = list_arg(call, "list", "First argument must be list")?;
    let index = call.arg("index");
    if !index.is_number() {
        return Err(wrong_arg_type("Second argument must be number"));
    }
    let mut items = items.borrow_mut();
    let index = list_index(items.len(), &index).map_err(|_| {
        EvalError::new(
            "Element at this index could not be removed from list because index is out of bounds",
        )
    })?;
    Ok(items.remove(index))
}

/// Append every element of `listB` to `listA`.
pub(super) fn extend(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    let target = list_arg(call, "listA", "First argument must be list")?;
    let source = list_arg(call, "listB", "Second argument must be list")?;
    // Copied out first: `extend(l, l)` names the same cell twice.
    let extra = Value::copy_list(&source);
    target.borrow_mut().extend(extra);
    Ok(Value::NULL)
}

pub(super) fn len(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    let items = list_arg(call, "list", "Argument must be list")?;
    let len = items.borrow().len();
    Ok(Value::Int(i64::try_from(len).unwrap_or(i64::MAX)))
}
