//! Console builtins.

use crate::errors::EvalError;
use crate::value::BuiltinCall;
use crate::Value;

pub(super) fn print(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    call.interpreter
        .console()
        .println(&call.arg("value").to_string());
    Ok(Value::NULL)
}

pub(super) fn print_ret(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    Ok(Value::string(&call.arg("value").to_string()))
}

fn read_line(call: &BuiltinCall<'_>) -> Result<String, EvalError> {
    call.interpreter
        .console()
        .read_line()
        .ok_or_else(|| EvalError::new("Input stream closed"))
}

pub(super) fn input(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    Ok(Value::string(&read_line(call)?))
}

/// Keeps asking until the line parses as an integer.
pub(super) fn input_int(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    loop {
        let text = read_line(call)?;
        match text.trim().parse::<i64>() {
            Ok(n) => return Ok(Value::Int(n)),
            Err(_) => call
                .interpreter
                .console()
                .println(&format!("'{text}' must be an integer. Try again!")),
        }
    }
}

pub(super) fn clear(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    call.interpreter.console().clear();
    Ok(Value::NULL)
}
