//! Stack growth for deeply nested programs.
//!
//! Both the parser (nested parentheses, `if` chains, list literals) and the
//! evaluator (user recursion such as `const fib(n) => ...`) walk the program
//! with native recursion. A script can nest arbitrarily deep, so every
//! recursive entry point runs under [`ensure_sufficient_stack`], which
//! switches to a freshly allocated segment when the remaining stack drops
//! below the red zone.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
