//! Lexical scopes.
//!
//! A scope is a table of bindings with an optional parent. Lookups walk
//! outward; definitions always write to the local table, so `auto x = ...`
//! inside a function shadows an outer `x` instead of rebinding it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use basic_ir::{Name, StringInterner};

use crate::builtins::BUILTINS;
use crate::Value;

/// A single-threaded shared scope.
///
/// Wraps `Rc<RefCell<T>>` so that every scope allocation goes through
/// [`LocalScope::new`]. Closures hold a clone of their defining scope.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable, walking outward through the parents.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(value) = scope.bindings.get(&name) {
                return Some(value.clone());
            }
            next = scope.parent.clone();
        }
        None
    }
}

/// The outermost scope: `null`, `true`, `false` and the builtins.
///
/// Called once per run or session.
pub fn new_global_scope(interner: &StringInterner) -> LocalScope<Scope> {
    let mut scope = Scope::new();
    scope.define(interner.intern("null"), Value::NULL);
    scope.define(interner.intern("true"), Value::from_bool(true));
    scope.define(interner.intern("false"), Value::from_bool(false));
    for builtin in BUILTINS {
        scope.define(interner.intern(builtin.name), Value::Builtin(builtin));
    }
    LocalScope::new(scope)
}

#[cfg(test)]
mod tests;
