//! Expression nodes.
//!
//! Everything in the language is an expression, including statements such as
//! `return` and whole blocks, so a single node type covers the program.

use crate::{BinaryOp, BranchRange, ExprId, ExprRange, Name, ParamRange, Span, StrId, UnaryOp};

/// A node and its source span.
///
/// The span of a node always contains the spans of its children.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),
    /// Float literal, stored as bits.
    Float(u64),
    /// String literal with escapes already resolved.
    Str(StrId),
    /// `[a, b, c]`
    List(ExprRange),

    /// Variable read.
    Ident(Name),
    /// `auto name = value`
    Assign { name: Name, value: ExprId },

    Unary { op: UnaryOp, operand: ExprId },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `if c then a elif d then b else e`, in both single-line and block form.
    If {
        branches: BranchRange,
        else_branch: Option<ElseBranch>,
    },
    /// `for var = start to end (increment|decrement step)? then body`
    ///
    /// `decrement s` is stored as a `Neg` of `s`.
    For {
        var: Name,
        start: ExprId,
        end: ExprId,
        step: Option<ExprId>,
        body: ExprId,
        multiline: bool,
    },
    /// `while cond then body`
    While {
        cond: ExprId,
        body: ExprId,
        multiline: bool,
    },

    /// `const name(params) => expr` or a block body terminated by `end`.
    ///
    /// `auto_return` is set for the arrow form: the body's value is the
    /// result. Block bodies only return through `return`.
    FunctionDef {
        name: Option<Name>,
        params: ParamRange,
        body: ExprId,
        auto_return: bool,
    },
    /// `callee(args)`
    Call { callee: ExprId, args: ExprRange },

    Return(Option<ExprId>),
    Continue,
    Break,

    /// Statement list.
    Block(ExprRange),
}

/// One `if`/`elif` arm.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfBranch {
    pub condition: ExprId,
    pub body: ExprId,
    /// Block form (`then` NEWLINE ... ); such a branch yields `null`.
    pub multiline: bool,
}

/// The `else` arm.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElseBranch {
    pub body: ExprId,
    pub multiline: bool,
}
