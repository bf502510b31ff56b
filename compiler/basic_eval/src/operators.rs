//! Binary operator implementations.
//!
//! Direct enum-based dispatch: the value set is fixed, so a `match` on the
//! operand pair is both faster than dynamic dispatch and exhaustive.
//!
//! Errors come back without a span; the evaluator points them at the right
//! operand.

use std::rc::Rc;

use basic_ir::BinaryOp;

use crate::errors::{
    cannot_concatenate, division_by_zero, illegal_operation, index_out_of_bounds,
    string_too_long, EvalError,
};
use crate::value::SharedList;
use crate::Value;

type OpResult = Result<Value, EvalError>;

/// Largest string, in bytes, that repetition may produce.
const MAX_STRING_LEN: usize = 1 << 28;

/// Evaluate `left op right`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> OpResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => eval_float_binary(a, b, op),
                _ => Err(illegal_operation()),
            }
        }
        (Value::Str(a), _) => eval_str_binary(a, right, op),
        (Value::List(items), _) => eval_list_binary(items, right, op),
        _ => Err(illegal_operation()),
    }
}

/// Checked integer arithmetic; overflow widens to float.
#[inline]
fn int_or_float(checked: Option<i64>, wide: f64) -> Value {
    checked.map_or(Value::Float(wide), Value::Int)
}

/// Remainder with the sign of the divisor.
fn floor_mod_int(a: i64, b: i64) -> i64 {
    // i64::MIN % -1 overflows but the remainder is 0.
    let r = a.checked_rem(b).unwrap_or(0);
    if r != 0 && (r < 0) != (b < 0) {
        r + b
    } else {
        r
    }
}

fn floor_mod_float(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> OpResult {
    let (fa, fb) = (a as f64, b as f64);
    Ok(match op {
        BinaryOp::Add => int_or_float(a.checked_add(b), fa + fb),
        BinaryOp::Sub => int_or_float(a.checked_sub(b), fa - fb),
        BinaryOp::Mul => int_or_float(a.checked_mul(b), fa * fb),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Value::Float(fa / fb)
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Value::Int(floor_mod_int(a, b))
        }
        BinaryOp::Pow => {
            if b < 0 {
                if a == 0 {
                    return Err(division_by_zero());
                }
                Value::Float(fa.powf(fb))
            } else {
                let checked = u32::try_from(b).ok().and_then(|exp| a.checked_pow(exp));
                int_or_float(checked, fa.powf(fb))
            }
        }
        BinaryOp::Eq => Value::from_bool(a == b),
        BinaryOp::NotEq => Value::from_bool(a != b),
        BinaryOp::Lt => Value::from_bool(a < b),
        BinaryOp::LtEq => Value::from_bool(a <= b),
        BinaryOp::Gt => Value::from_bool(a > b),
        BinaryOp::GtEq => Value::from_bool(a >= b),
        BinaryOp::And => Value::from_bool(a != 0 && b != 0),
        BinaryOp::Or => Value::from_bool(a != 0 || b != 0),
    })
}

#[allow(clippy::float_cmp)]
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> OpResult {
    Ok(match op {
        BinaryOp::Add => Value::Float(a + b),
        BinaryOp::Sub => Value::Float(a - b),
        BinaryOp::Mul => Value::Float(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Value::Float(a / b)
        }
        BinaryOp::Mod => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Value::Float(floor_mod_float(a, b))
        }
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(division_by_zero());
            }
            Value::Float(a.powf(b))
        }
        BinaryOp::Eq => Value::from_bool(a == b),
        BinaryOp::NotEq => Value::from_bool(a != b),
        BinaryOp::Lt => Value::from_bool(a < b),
        BinaryOp::LtEq => Value::from_bool(a <= b),
        BinaryOp::Gt => Value::from_bool(a > b),
        BinaryOp::GtEq => Value::from_bool(a >= b),
        BinaryOp::And => Value::from_bool(a != 0.0 && b != 0.0),
        BinaryOp::Or => Value::from_bool(a != 0.0 || b != 0.0),
    })
}

fn eval_str_binary(a: &Rc<str>, right: &Value, op: BinaryOp) -> OpResult {
    match (op, right) {
        (BinaryOp::Add, Value::Str(b)) => {
            let mut s = String::with_capacity(a.len() + b.len());
            s.push_str(a);
            s.push_str(b);
            Ok(Value::string(&s))
        }
        (BinaryOp::Mul, Value::Int(n)) => {
            let count = usize::try_from(*n).unwrap_or(0);
            match a.len().checked_mul(count) {
                Some(len) if len <= MAX_STRING_LEN => Ok(Value::string(&a.repeat(count))),
                _ => Err(string_too_long()),
            }
        }
        (BinaryOp::Eq, Value::Str(b)) => Ok(Value::from_bool(a == b)),
        (BinaryOp::NotEq, Value::Str(b)) => Ok(Value::from_bool(a != b)),
        _ => Err(illegal_operation()),
    }
}

fn eval_list_binary(items: &SharedList, right: &Value, op: BinaryOp) -> OpResult {
    match op {
        BinaryOp::Add => {
            let mut copy = Value::copy_list(items);
            copy.push(right.clone());
            Ok(Value::list(copy))
        }
        BinaryOp::Sub => {
            let mut copy = Value::copy_list(items);
            let index = list_index(copy.len(), right)?;
            copy.remove(index);
            Ok(Value::list(copy))
        }
        BinaryOp::Mul => match right {
            Value::List(other) => {
                let mut copy = Value::copy_list(items);
                // Cloned first so that `l * l` doesn't borrow the same cell twice.
                copy.extend(Value::copy_list(other));
                Ok(Value::list(copy))
            }
            _ => Err(cannot_concatenate()),
        },
        BinaryOp::Div => {
            let items = items.borrow();
            let index = list_index(items.len(), right)?;
            Ok(items[index].clone())
        }
        _ => Err(illegal_operation()),
    }
}

/// Resolve `index` against a list of `len` elements.
///
/// Negative indexes count from the end. Integral floats are accepted.
pub(crate) fn list_index(len: usize, index: &Value) -> Result<usize, EvalError> {
    let raw = match index {
        Value::Int(n) => *n,
        Value::Float(f) if f.fract() == 0.0 && f.is_finite() => *f as i64,
        Value::Float(_) => return Err(index_out_of_bounds()),
        _ => return Err(illegal_operation()),
    };
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if raw < 0 { raw + len } else { raw };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).map_err(|_| index_out_of_bounds())
    } else {
        Err(index_out_of_bounds())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn show(result: OpResult) -> String {
        match result {
            Ok(v) => v.repr().to_string(),
            Err(e) => format!("error: {e}"),
        }
    }

    #[test]
    fn int_arithmetic() {
        assert_eq!(show(evaluate_binary(&Value::Int(7), &Value::Int(2), BinaryOp::Add)), "9");
        assert_eq!(show(evaluate_binary(&Value::Int(7), &Value::Int(2), BinaryOp::Div)), "3.5");
        assert_eq!(show(evaluate_binary(&Value::Int(6), &Value::Int(2), BinaryOp::Div)), "3.0");
        assert_eq!(show(evaluate_binary(&Value::Int(2), &Value::Int(10), BinaryOp::Pow)), "1024");
        assert_eq!(show(evaluate_binary(&Value::Int(2), &Value::Int(-1), BinaryOp::Pow)), "0.5");
    }

    #[test]
    fn modulo_takes_the_sign_of_the_divisor() {
        assert_eq!(show(evaluate_binary(&Value::Int(-7), &Value::Int(3), BinaryOp::Mod)), "2");
        assert_eq!(show(evaluate_binary(&Value::Int(7), &Value::Int(-3), BinaryOp::Mod)), "-2");
        assert_eq!(show(evaluate_binary(&Value::Float(-7.5), &Value::Int(2), BinaryOp::Mod)), "0.5");
        assert_eq!(show(evaluate_binary(&Value::Int(i64::MIN), &Value::Int(-1), BinaryOp::Mod)), "0");
    }

    #[test]
    fn overflow_widens_to_float() {
        let r = evaluate_binary(&Value::Int(i64::MAX), &Value::Int(1), BinaryOp::Add).unwrap();
        assert!(matches!(r, Value::Float(_)));
        let r = evaluate_binary(&Value::Int(10), &Value::Int(40), BinaryOp::Pow).unwrap();
        assert!(matches!(r, Value::Float(_)));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        for op in [BinaryOp::Div, BinaryOp::Mod] {
            assert_eq!(show(evaluate_binary(&Value::Int(1), &Value::Int(0), op)), "error: Division by zero");
            assert_eq!(show(evaluate_binary(&Value::Float(1.0), &Value::Float(0.0), op)), "error: Division by zero");
        }
        assert_eq!(show(evaluate_binary(&Value::Int(0), &Value::Int(-2), BinaryOp::Pow)), "error: Division by zero");
    }

    #[test]
    fn comparisons_and_logic_yield_ints() {
        assert_eq!(show(evaluate_binary(&Value::Int(1), &Value::Float(1.0), BinaryOp::Eq)), "1");
        assert_eq!(show(evaluate_binary(&Value::Int(3), &Value::Int(2), BinaryOp::LtEq)), "0");
        assert_eq!(show(evaluate_binary(&Value::Int(3), &Value::Int(0), BinaryOp::And)), "0");
        assert_eq!(show(evaluate_binary(&Value::Int(0), &Value::Float(0.5), BinaryOp::Or)), "1");
    }

    #[test]
    fn string_operators() {
        let hi = Value::string("hi");
        assert_eq!(show(evaluate_binary(&hi, &Value::string("!"), BinaryOp::Add)), "\"hi!\"");
        assert_eq!(show(evaluate_binary(&hi, &Value::Int(3), BinaryOp::Mul)), "\"hihihi\"");
        assert_eq!(show(evaluate_binary(&hi, &Value::Int(-1), BinaryOp::Mul)), "\"\"");
        assert_eq!(show(evaluate_binary(&Value::string(""), &Value::Int(i64::MAX), BinaryOp::Mul)), "\"\"");
        assert_eq!(show(evaluate_binary(&hi, &Value::Int(i64::MAX), BinaryOp::Mul)), "error: String too long");
        assert_eq!(show(evaluate_binary(&hi, &Value::string("hi"), BinaryOp::Eq)), "1");
        assert_eq!(show(evaluate_binary(&hi, &Value::Int(1), BinaryOp::Add)), "error: Illegal operation");
        assert_eq!(show(evaluate_binary(&Value::Int(1), &hi, BinaryOp::Add)), "error: Illegal operation");
    }

    #[test]
    fn list_operators() {
        let list = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(show(evaluate_binary(&list, &Value::Int(4), BinaryOp::Add)), "[1, 2, 3, 4]");
        assert_eq!(show(evaluate_binary(&list, &Value::Int(0), BinaryOp::Sub)), "[2, 3]");
        assert_eq!(show(evaluate_binary(&list, &Value::Int(-1), BinaryOp::Div)), "3");
        assert_eq!(show(evaluate_binary(&list, &list, BinaryOp::Mul)), "[1, 2, 3, 1, 2, 3]");
        // The operand is untouched.
        assert_eq!(list.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn list_operator_errors() {
        let list = Value::list(vec![Value::Int(1)]);
        assert_eq!(show(evaluate_binary(&list, &Value::Int(5), BinaryOp::Div)), "error: Index out of bounds");
        assert_eq!(show(evaluate_binary(&list, &Value::Float(0.5), BinaryOp::Div)), "error: Index out of bounds");
        assert_eq!(show(evaluate_binary(&list, &Value::string("a"), BinaryOp::Sub)), "error: Illegal operation");
        assert_eq!(
            show(evaluate_binary(&list, &Value::Int(1), BinaryOp::Mul)),
            "error: Cannot concatenate list with non-list"
        );
    }

    #[test]
    fn list_copies_share_elements() {
        let inner = Value::list(vec![]);
        let outer = Value::list(vec![inner.clone()]);
        let grown = evaluate_binary(&outer, &Value::Int(1), BinaryOp::Add).unwrap();
        if let Value::List(items) = &inner {
            items.borrow_mut().push(Value::Int(9));
        }
        assert_eq!(grown.to_string(), "[[9], 1]");
    }
}
