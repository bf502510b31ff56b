//! Type predicates. Each returns 1 or 0.

use crate::errors::EvalError;
use crate::value::BuiltinCall;
use crate::Value;

pub(super) fn is_number(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    Ok(Value::from_bool(call.arg("value").is_number()))
}

pub(super) fn is_string(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    Ok(Value::from_bool(matches!(call.arg("value"), Value::Str(_))))
}

pub(super) fn is_list(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    Ok(Value::from_bool(matches!(call.arg("value"), Value::List(_))))
}

pub(super) fn is_function(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    Ok(Value::from_bool(call.arg("value").is_callable()))
}
