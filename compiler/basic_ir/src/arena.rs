//! Flat storage for parsed expressions.
//!
//! Nodes refer to each other by `ExprId`. Variable-length children (list
//! elements, call arguments, block statements, parameters, `if` arms) live in
//! side tables and are referenced by ranges, which keeps `ExprKind` `Copy`.

use std::sync::Arc;

use crate::{BranchRange, Expr, ExprId, ExprRange, IfBranch, Name, ParamRange, StrId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    params: Vec<Name>,
    branches: Vec<IfBranch>,
    strings: Vec<Box<str>>,
}

fn next_index(len: usize) -> u32 {
    // Arena indices are bounded by source size, which spans already cap at u32.
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Store a run of children contiguously.
    ///
    /// Callers collect children into a local buffer first: nested lists
    /// allocate their own runs while the outer one is being parsed.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = next_index(self.expr_lists.len());
        self.expr_lists.extend(ids);
        ExprRange::new(start, next_index(self.expr_lists.len()) - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    pub fn alloc_params(&mut self, names: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = next_index(self.params.len());
        self.params.extend(names);
        ParamRange::new(start, next_index(self.params.len()) - start)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.to_range()]
    }

    pub fn alloc_branches(&mut self, arms: impl IntoIterator<Item = IfBranch>) -> BranchRange {
        let start = next_index(self.branches.len());
        self.branches.extend(arms);
        BranchRange::new(start, next_index(self.branches.len()) - start)
    }

    #[inline]
    pub fn get_branches(&self, range: BranchRange) -> &[IfBranch] {
        &self.branches[range.to_range()]
    }

    pub fn alloc_str(&mut self, text: &str) -> StrId {
        let id = StrId::new(next_index(self.strings.len()));
        self.strings.push(text.into());
        id
    }

    #[inline]
    pub fn get_str(&self, id: StrId) -> &str {
        &self.strings[id.index()]
    }

    /// Number of expression nodes.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }
}

/// Immutable arena shared by every closure created from one parse.
#[derive(Clone, Debug, Default)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &ExprArena {
        &self.0
    }
}
