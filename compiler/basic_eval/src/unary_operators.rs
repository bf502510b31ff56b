//! Unary operator implementations.

use basic_ir::UnaryOp;

use crate::errors::{illegal_operation, EvalError};
use crate::Value;

/// Evaluate `op value`. Only numbers support unary operators.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Result<Value, EvalError> {
    match (value, op) {
        (Value::Int(n), UnaryOp::Neg) => Ok(n
            .checked_neg()
            .map_or(Value::Float(-(*n as f64)), Value::Int)),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),
        (Value::Int(_) | Value::Float(_), UnaryOp::Plus) => Ok(value.clone()),
        (Value::Int(_) | Value::Float(_), UnaryOp::Not) => Ok(Value::from_bool(!value.is_truthy())),
        _ => Err(illegal_operation()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(result: Result<Value, EvalError>) -> String {
        match result {
            Ok(v) => v.to_string(),
            Err(e) => format!("error: {e}"),
        }
    }

    #[test]
    fn negation() {
        assert_eq!(show(evaluate_unary(&Value::Int(5), UnaryOp::Neg)), "-5");
        assert_eq!(show(evaluate_unary(&Value::Float(2.5), UnaryOp::Neg)), "-2.5");
        assert_eq!(
            show(evaluate_unary(&Value::Int(i64::MIN), UnaryOp::Neg)),
            "9223372036854775808.0"
        );
    }

    #[test]
    fn plus_and_not() {
        assert_eq!(show(evaluate_unary(&Value::Int(5), UnaryOp::Plus)), "5");
        assert_eq!(show(evaluate_unary(&Value::Int(0), UnaryOp::Not)), "1");
        assert_eq!(show(evaluate_unary(&Value::Float(0.5), UnaryOp::Not)), "0");
    }

    #[test]
    fn non_numbers_are_rejected() {
        for op in [UnaryOp::Neg, UnaryOp::Plus, UnaryOp::Not] {
            assert_eq!(
                show(evaluate_unary(&Value::string("a"), op)),
                "error: Illegal operation"
            );
        }
        assert_eq!(
            show(evaluate_unary(&Value::list(vec![]), UnaryOp::Neg)),
            "error: Illegal operation"
        );
    }
}
