//! BASIC IR - shared data structures for the interpreter pipeline.
//!
//! - Spans and source positions
//! - Interned identifiers (`Name`)
//! - Tokens and `TokenList` produced by the lexer
//! - The flat expression arena produced by the parser
//!
//! # Design
//!
//! - **Intern identifiers**: variable names become `Name(u32)`. String
//!   literals are not interned; they live beside the tokens and nodes that
//!   use them and are referenced by `StrId(u32)`.
//! - **Flatten the tree**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!   into an [`ExprArena`], lists of children are ranges into side tables.
//!
//! Floats are stored as `u64` bits so that tokens and nodes stay `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Guards the hot arena types against accidental growth.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod source;
mod span;
mod token;

pub use arena::{ExprArena, SharedArena};
pub use ast::{BinaryOp, ElseBranch, Expr, ExprKind, IfBranch, UnaryOp};
pub use expr_id::{BranchRange, ExprId, ExprRange, ParamRange, StrId};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use source::{Position, SharedSource, SourceFile};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind, TokenList, TokenTag};

#[cfg(test)]
mod tests;
