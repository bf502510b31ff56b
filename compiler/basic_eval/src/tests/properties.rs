//! Property tests for operator precedence and arithmetic.

use proptest::prelude::*;

use super::last;

#[derive(Clone, Copy, Debug)]
enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
        }
    }
}

/// Standard precedence: multiplications bind into terms first.
fn expected(first: i64, rest: &[(Op, i64)]) -> i64 {
    let mut sum = 0;
    let mut sign = 1;
    let mut term = first;
    for &(op, n) in rest {
        match op {
            Op::Mul => term *= n,
            Op::Add | Op::Sub => {
                sum += sign * term;
                sign = if matches!(op, Op::Add) { 1 } else { -1 };
                term = n;
            }
        }
    }
    sum + sign * term
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), Just(Op::Sub), Just(Op::Mul)]
}

proptest! {
    #[test]
    fn arithmetic_follows_precedence(
        first in 0i64..100,
        rest in prop::collection::vec((op(), 0i64..100), 0..8),
    ) {
        let mut source = first.to_string();
        for (op, n) in &rest {
            source.push_str(&format!(" {} {n}", op.symbol()));
        }
        prop_assert_eq!(last(&source), expected(first, &rest).to_string());
    }

    #[test]
    fn power_is_right_associative(a in 1i64..5, b in 0u32..4, c in 0u32..4) {
        let expected = a.pow(b.pow(c));
        prop_assert_eq!(last(&format!("{a} ^ {b} ^ {c}")), expected.to_string());
    }

    #[test]
    fn sign_binds_looser_than_power(a in 0i64..10, b in 0u32..5) {
        let expected = -(a.pow(b));
        prop_assert_eq!(last(&format!("-{a} ^ {b}")), expected.to_string());
    }

    #[test]
    fn modulo_takes_the_sign_of_the_divisor(a in -100i64..100, b in 1i64..20) {
        prop_assert_eq!(last(&format!("{a} % {b}")), a.rem_euclid(b).to_string());
        prop_assert_eq!(last(&format!("{a} % -{b}")), (-((-a).rem_euclid(b))).to_string());
    }
}
