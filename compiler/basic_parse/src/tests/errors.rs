use basic_ir::{SourceFile, Span};
use pretty_assertions::assert_eq;

use super::{error_of, sexpr_of};

const FACTOR_EXPECTED: &str =
    "Expected int, float, string, identifier, '+', '-', '(', '[', 'if', 'for', 'while' or 'const'";

#[test]
fn dangling_operator_points_past_it() {
    let err = error_of("1 +");
    assert_eq!(err.span, Span::point(3));
    assert_eq!(err.message, FACTOR_EXPECTED);
}

#[test]
fn dangling_operator_diagnostic() {
    let err = error_of("1 +");
    let diag = err.into_diagnostic(SourceFile::shared("<stdin>", "1 +"));
    assert_eq!(
        diag.as_string(),
        format!("Invalid Syntax: {FACTOR_EXPECTED}\nFile <stdin>, line 1\n\n1 +\n   ^")
    );
}

#[test]
fn stray_token_after_expression() {
    let err = error_of("1 2");
    assert_eq!(err.span, Span::new(2, 3));
    assert!(err.message.starts_with("Expected '+', '-', '*'"), "{}", err.message);
    assert!(err.message.ends_with("'and' or 'or'"), "{}", err.message);
}

#[test]
fn token_that_cannot_start_a_statement() {
    let err = error_of("1\n)");
    assert_eq!(err.span, Span::new(2, 3));
    assert_eq!(
        err.message,
        "Expected int, float, string, identifier, '+', '-', '(', '[', 'auto', 'not', 'if', \
         'for', 'while', 'const', 'return', 'continue' or 'break'"
    );
}

#[test]
fn unclosed_paren() {
    let err = error_of("(1 + 2");
    assert_eq!(err.message, "Expected ')'");
    assert_eq!(err.span, Span::point(6));
}

#[test]
fn list_needs_comma_or_close() {
    assert_eq!(error_of("[1 2]").message, "Expected ',' or ']'");
    assert_eq!(error_of("f(1 2)").message, "Expected ',' or ')'");
}

#[test]
fn block_if_needs_terminator() {
    let err = error_of("if 1 then\n  2\n");
    assert_eq!(err.message, "Expected 'elif', 'else' or 'end'");
}

#[test]
fn block_loop_needs_end() {
    assert_eq!(error_of("while 1 then\n  2\n").message, "Expected 'end'");
    assert_eq!(error_of("for i = 0 then 1").message, "Expected 'to'");
    assert_eq!(error_of("for 1 = 0 to 2 then 1").message, "Expected identifier");
}

#[test]
fn assignment_needs_name_and_equals() {
    assert_eq!(error_of("auto 3 = 1").message, "Expected identifier");
    assert_eq!(error_of("auto x 1").message, "Expected '='");
}

#[test]
fn function_header_errors() {
    assert_eq!(error_of("const 1").message, "Expected identifier or '('");
    assert_eq!(error_of("const f 1").message, "Expected '('");
    assert_eq!(error_of("const f(a b)").message, "Expected ',' or ')'");
    assert_eq!(error_of("const f(1)").message, "Expected identifier or ')'");
    assert_eq!(error_of("const f() 1").message, "Expected '=>' or newline");
}

#[test]
fn failure_inside_a_later_statement_is_reported_where_it_happens() {
    // The second statement consumed `2 *` before failing, so it is a real
    // error rather than the end of the statement list.
    let err = error_of("1\n2 *\n");
    assert_eq!(err.span, Span::new(5, 6));
    assert_eq!(err.message, FACTOR_EXPECTED);

    // The same holds at end of input: the error sits after `+`, not on `2`.
    let err = error_of("1\n2 +");
    assert_eq!(err.span, Span::point(5));
    assert_eq!(err.message, FACTOR_EXPECTED);
}

#[test]
fn return_with_broken_value_is_an_error() {
    let err = error_of("return -");
    assert_eq!(err.span, Span::point(8));
}

#[test]
fn statement_list_stops_at_block_terminator() {
    // `end` fails as a statement without consuming anything, so the list
    // simply ends there.
    assert_eq!(
        sexpr_of("while 0 then\n  1\n\n\nend"),
        "{(while-block 0 {1})}"
    );
}
