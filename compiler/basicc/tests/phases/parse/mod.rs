//! Front-end phase tests through the `lex` and `parse` commands.

use basicc::commands::{lex_source, parse_source};
use pretty_assertions::assert_eq;

#[test]
fn lex_dump() {
    assert_eq!(
        lex_source("t.bas", "auto x = [1, 2.5, \"s\"]\nx != 0").unwrap(),
        "[KEYWORD:auto, IDENTIFIER:x, EQ, LSQUARE, INT:1, COMMA, FLOAT:2.5, COMMA, \
         STRING:\"s\", RSQUARE, NEWLINE, IDENTIFIER:x, NE, INT:0, EOF]"
    );
}

#[test]
fn comments_and_semicolons() {
    assert_eq!(
        lex_source("t.bas", "1; 2 # two").unwrap(),
        "[INT:1, NEWLINE, INT:2, EOF]"
    );
}

#[test]
fn lex_dump_is_deterministic() {
    let program = "for i = 0 to 10 increment 2 then print(i)";
    assert_eq!(lex_source("a", program), lex_source("b", program));
}

#[test]
fn lex_errors_are_rendered() {
    assert_eq!(
        lex_source("t.bas", "x = 1 @ 2").unwrap_err(),
        "Illegal Character: '@'\nFile t.bas, line 1\n\nx = 1 @ 2\n      ^"
    );
    assert!(lex_source("t.bas", "1 ! 2")
        .unwrap_err()
        .starts_with("Expected Character: '=' (after '!')"));
}

#[test]
fn parse_summary() {
    let summary = parse_source("t.bas", "1 + 2").unwrap();
    assert!(summary.starts_with("Parse result for 't.bas':"));
    assert!(summary.contains("Tokens: 4"));
}

#[test]
fn syntax_errors_are_rendered() {
    let err = parse_source("t.bas", "auto = 5").unwrap_err();
    assert!(err.starts_with("Invalid Syntax: Expected"), "{err}");
    assert!(err.contains("File t.bas, line 1"));
}

#[test]
fn unterminated_block_is_a_syntax_error() {
    let err = parse_source("t.bas", "if 1 then\n  print(1)\n").unwrap_err();
    assert!(err.starts_with("Invalid Syntax: Expected"), "{err}");
}

#[test]
fn failure_inside_a_statement_is_not_backtracked() {
    // `print(1,` consumed tokens, so the error is reported where it broke
    // rather than as "no statement here".
    let err = parse_source("t.bas", "1\nprint(1,\n2").unwrap_err();
    assert!(err.contains("line 2"), "{err}");
}

#[test]
fn multiline_programs_parse() {
    let program = "const fizz(n)
  for i = 1 to n + 1 then
    if i % 15 == 0 then print(\"FizzBuzz\") elif i % 3 == 0 then print(\"Fizz\") else print(i)
  end
end
fizz(15)";
    assert!(parse_source("t.bas", program).is_ok());
}
