#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::{buffer_console, silent_console, MemoryLoader, DEFAULT_MAX_CALL_DEPTH};

#[test]
fn builder_defaults() {
    let interp = Interpreter::builder().console(silent_console()).build();
    assert_eq!(interp.max_call_depth(), DEFAULT_MAX_CALL_DEPTH);
    assert!(interp.loader().load("no/such/file.bas").is_err());
}

#[test]
fn globals_hold_constants_and_builtins() {
    let interp = Interpreter::builder().console(silent_console()).build();
    let globals = interp.globals().borrow();
    let lookup = |name: &str| globals.lookup(interp.interner().intern(name));
    assert_eq!(lookup("true").unwrap().to_string(), "1");
    assert_eq!(lookup("null").unwrap().to_string(), "0");
    assert!(lookup("append").unwrap().is_callable());
    assert!(lookup("nope").is_none());
}

#[test]
fn configured_loader_and_depth() {
    let interp = Interpreter::builder()
        .console(buffer_console())
        .loader(MemoryLoader::new().with_script("a.bas", "print(\"from a\")"))
        .max_call_depth(3)
        .build();
    assert_eq!(interp.max_call_depth(), 3);

    interp.run("<stdin>", "run(\"a.bas\")").unwrap();
    assert_eq!(interp.console().output(), "from a\n");

    let err = interp
        .run("<stdin>", "const f() => f()\nf()")
        .unwrap_err();
    assert_eq!(err.details(), "Maximum recursion depth exceeded");
    assert_eq!(err.traceback().len(), 4);
}

#[test]
fn silent_console_discards_output() {
    let interp = Interpreter::builder().console(silent_console()).build();
    interp.run("<stdin>", "print(1)").unwrap();
    assert_eq!(interp.console().output(), "");
}

#[test]
fn shared_interner_is_used() {
    let interner = SharedInterner::default();
    let interp = Interpreter::builder()
        .interner(interner.clone())
        .console(silent_console())
        .build();
    interp.run("<stdin>", "auto answer = 42").unwrap();
    let name = interner.intern("answer");
    assert_eq!(interp.globals().borrow().lookup(name).unwrap().to_string(), "42");
}

#[test]
fn string_literals_do_not_grow_the_interner() {
    let interner = SharedInterner::default();
    let interp = Interpreter::builder()
        .interner(interner.clone())
        .console(silent_console())
        .build();
    interp.run("<stdin>", "auto s = \"first\"").unwrap();
    let before = interner.len();
    for i in 0..20 {
        let value = interp.run("<stdin>", &format!("s + \"literal {i}\"")).unwrap();
        assert_eq!(value.to_string(), format!("[\"firstliteral {i}\"]"));
    }
    assert_eq!(interner.len(), before);
}

#[test]
fn each_run_names_its_source() {
    let interp = Interpreter::builder().console(silent_console()).build();
    let err = interp.run("script.bas", "\n\nx").unwrap_err();
    assert_eq!(err.source().name(), "script.bas");
    assert_eq!(err.traceback()[0].line(), 3);
}
