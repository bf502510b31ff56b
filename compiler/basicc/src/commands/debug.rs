//! Debug commands: `lex` and `parse` for inspecting the front end.

use basic_ir::{SourceFile, StringInterner};

use super::read_file;

/// Token dump of `text`, or the rendered lex error.
pub fn lex_source(name: &str, text: &str) -> Result<String, String> {
    let interner = StringInterner::new();
    basic_lexer::lex(text, &interner)
        .map(|tokens| tokens.dump(&interner))
        .map_err(|e| e.into_diagnostic(SourceFile::shared(name, text)).as_string())
}

/// Summary of a successful parse, or the rendered lex/syntax error.
pub fn parse_source(name: &str, text: &str) -> Result<String, String> {
    let source = SourceFile::shared(name, text);
    let interner = StringInterner::new();
    let tokens = basic_lexer::lex(text, &interner)
        .map_err(|e| e.into_diagnostic(source.clone()).as_string())?;
    let output = basic_parse::parse(&tokens).map_err(|e| e.into_diagnostic(source).as_string())?;
    Ok(format!(
        "Parse result for '{name}':\n  Tokens: {}\n  Expressions: {}",
        tokens.len(),
        output.arena.expr_count()
    ))
}

pub fn lex_file(path: &str) -> bool {
    report(read_file(path).and_then(|text| lex_source(path, &text)))
}

pub fn parse_file(path: &str) -> bool {
    report(read_file(path).and_then(|text| parse_source(path, &text)))
}

fn report(result: Result<String, String>) -> bool {
    match result {
        Ok(text) => {
            println!("{text}");
            true
        }
        Err(msg) => {
            eprintln!("{msg}");
            false
        }
    }
}
