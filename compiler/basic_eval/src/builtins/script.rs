//! `run(fn)`: execute another script in the global scope.

use basic_ir::SourceFile;

use crate::diagnostics::PROGRAM_CONTEXT;
use crate::errors::{script_load_failed, script_run_failed, wrong_arg_type, EvalError};
use crate::value::BuiltinCall;
use crate::Value;

pub(super) fn run(call: &BuiltinCall<'_>) -> Result<Value, EvalError> {
    let path = match call.arg("fn") {
        Value::Str(path) => path,
        _ => return Err(wrong_arg_type("Argument must be string")),
    };
    let interpreter = call.interpreter;

    let text = interpreter
        .loader()
        .load(&path)
        .map_err(|cause| script_load_failed(&path, &cause))?;
    tracing::debug!(path = &*path, "running script");

    let context = call
        .context
        .detached(PROGRAM_CONTEXT, interpreter.max_call_depth())?;
    interpreter
        .run_source(SourceFile::shared(&*path, text), context)
        .map_err(|nested| script_run_failed(&path, &nested))?;
    Ok(Value::NULL)
}
