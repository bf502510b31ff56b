//! Syntax tree node types.

mod expr;
mod operators;

pub use expr::{ElseBranch, Expr, ExprKind, IfBranch};
pub use operators::{BinaryOp, UnaryOp};
