#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use basic_ir::SharedInterner;

fn int(value: Option<Value>) -> i64 {
    match value {
        Some(Value::Int(n)) => n,
        other => panic!("expected int, got {other:?}"),
    }
}

#[test]
fn define_then_lookup() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let mut scope = Scope::new();
    scope.define(x, Value::Int(42));
    assert_eq!(int(scope.lookup(x)), 42);
}

#[test]
fn child_shadows_parent() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");

    let parent = LocalScope::new(Scope::new());
    parent.borrow_mut().define(x, Value::Int(1));

    let mut child = Scope::with_parent(parent.clone());
    child.define(x, Value::Int(2));

    assert_eq!(int(child.lookup(x)), 2);
    assert_eq!(int(parent.borrow().lookup(x)), 1);
}

#[test]
fn lookup_walks_several_levels() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let global = LocalScope::new(Scope::new());
    global.borrow_mut().define(x, Value::Int(7));
    let middle = LocalScope::new(Scope::with_parent(global));
    let inner = Scope::with_parent(middle.clone());

    assert_eq!(int(inner.lookup(x)), 7);
    assert!(inner.lookup(y).is_none());

    // Bindings added to an outer scope later are visible through the chain.
    middle.borrow_mut().define(y, Value::Int(3));
    assert_eq!(int(inner.lookup(y)), 3);
}

#[test]
fn global_scope_has_constants_and_builtins() {
    let interner = SharedInterner::default();
    let global = new_global_scope(&interner);
    let scope = global.borrow();

    assert_eq!(int(scope.lookup(interner.intern("null"))), 0);
    assert_eq!(int(scope.lookup(interner.intern("true"))), 1);
    assert_eq!(int(scope.lookup(interner.intern("false"))), 0);
    for name in ["print", "input_int", "append", "len", "run"] {
        let value = scope.lookup(interner.intern(name)).unwrap();
        assert!(matches!(value, Value::Builtin(b) if b.name == name));
    }
}

#[test]
fn each_global_scope_is_independent() {
    let interner = SharedInterner::default();
    let x = interner.intern("x");
    let a = new_global_scope(&interner);
    let b = new_global_scope(&interner);

    a.borrow_mut().define(x, Value::Int(1));
    assert!(b.borrow().lookup(x).is_none());
}
