//! Whole-program and REPL tests.

use basic_eval::{buffer_console, Interpreter, Session};
use pretty_assertions::assert_eq;

use crate::common::{eval_value, interpreter, repl_transcript, run_program};

#[test]
fn fizzbuzz() {
    let program = "for i = 1 to 16 then
  if i % 15 == 0 then
    print(\"FizzBuzz\")
  elif i % 3 == 0 then
    print(\"Fizz\")
  elif i % 5 == 0 then
    print(\"Buzz\")
  else
    print(i)
  end
end";
    let expected = "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n";
    assert_eq!(run_program(program).unwrap(), expected);
}

#[test]
fn higher_order_functions() {
    let program = "const map(list, fn)
  auto out = []
  for i = 0 to len(list) then
    append(out, fn(list / i))
  end
  return out
end
const join(list, sep)
  auto text = \"\"
  for i = 0 to len(list) then
    auto text = text + print_ret(list / i)
    if i != len(list) - 1 then auto text = text + sep
  end
  return text
end
print(join(map([1, 2, 3], const (x) => x * x), \", \"))";
    assert_eq!(run_program(program).unwrap(), "1, 4, 9\n");
}

#[test]
fn program_value() {
    assert_eq!(eval_value("auto a = 1\na + 1").to_string(), "[1, 2]");
}

#[test]
fn scripts_share_the_global_scope() {
    let interp = interpreter(&[("math.bas", "const square(x) => x * x")]);
    interp
        .run("main.bas", "run(\"math.bas\")\nprint(square(9))")
        .unwrap();
    assert_eq!(interp.console().output(), "81\n");
}

#[test]
fn runtime_error_in_a_script_names_both_files() {
    let interp = interpreter(&[("bad.bas", "const f() => missing\nf()")]);
    let diag = interp.run("main.bas", "print(0)\nrun(\"bad.bas\")").unwrap_err();
    let expected = "Runtime Error: Failed to finish executing script \"bad.bas\"
Runtime Error: 'missing' is not defined
File bad.bas, line 1
Traceback (most recent call last):
  File bad.bas, line 2, in <program>
  File bad.bas, line 1, in f

const f() => missing
             ^^^^^^^
File main.bas, line 2
Traceback (most recent call last):
  File main.bas, line 2, in <program>
  File main.bas, line 2, in run

run(\"bad.bas\")
^^^^^^^^^^^^^^";
    assert_eq!(diag.as_string(), expected);
}

#[test]
fn repl_session() {
    let session = Session::with_interpreter(
        Interpreter::builder().console(buffer_console()).build(),
    );
    let transcript = repl_transcript(
        &session,
        &["auto x = 2", "x * 21", "print(\"hi\")", "1 / 0", ""],
    );
    let expected = "basic > 2
basic > 42
basic > 0
basic > Runtime Error: Division by zero
File <stdin>, line 1
Traceback (most recent call last):
  File <stdin>, line 1, in <program>

1 / 0
    ^
basic > basic > 
Bye!
";
    assert_eq!(transcript, expected);
    assert_eq!(session.interpreter().console().output(), "hi\n");
}

#[test]
fn repl_echo_forms() {
    let session = Session::with_interpreter(
        Interpreter::builder().console(buffer_console()).build(),
    );
    let transcript = repl_transcript(&session, &["\"s\"", "1\n"]);
    assert_eq!(transcript, "basic > \"s\"\nbasic > 1\nbasic > \nBye!\n");
}
