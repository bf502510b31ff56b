//! Interactive prompt.

use std::io::{self, Write};

use basic_eval::{Session, Value};

use super::Options;

pub const PROMPT: &str = "basic > ";

/// Start the REPL on stdin/stdout. Returns at end of input.
///
/// Lines are read straight from `Stdin` without holding its lock, so
/// `input()` inside a program reads the next line of the same stream.
pub fn repl(options: &Options) -> io::Result<()> {
    let session = Session::with_interpreter(options.interpreter());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl_loop(
        &session,
        || {
            let mut line = String::new();
            Ok((stdin.read_line(&mut line)? > 0).then_some(line))
        },
        &mut stdout,
    )
}

/// Prompt, read, run and print until `next_line` reports end of input.
///
/// Every line runs in the same session, so definitions persist.
pub fn repl_loop<W: Write>(
    session: &Session,
    mut next_line: impl FnMut() -> io::Result<Option<String>>,
    out: &mut W,
) -> io::Result<()> {
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = next_line()? else {
            writeln!(out, "\nBye!")?;
            return Ok(());
        };
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        if line.trim().is_empty() {
            continue;
        }

        match session.run("<stdin>", line) {
            Ok(value) => {
                if let Some(text) = render_result(&value) {
                    writeln!(out, "{text}")?;
                }
            }
            Err(diag) => writeln!(out, "{}", diag.as_string())?,
        }
    }
}

/// What the REPL echoes for a program value.
///
/// Nothing for an empty program, the value itself for a single statement
/// and the whole list otherwise.
pub fn render_result(value: &Value) -> Option<String> {
    match value {
        Value::List(items) => match items.borrow().as_slice() {
            [] => None,
            [only] => Some(only.repr().to_string()),
            _ => Some(value.repr().to_string()),
        },
        other => Some(other.repr().to_string()),
    }
}
