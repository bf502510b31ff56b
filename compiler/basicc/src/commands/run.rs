//! The `run` command: evaluate source files one after another.

use super::{read_file, Options};

/// Run each file with a fresh interpreter.
///
/// A failing file is reported on stderr and the remaining files still run.
/// Returns whether every file succeeded.
pub fn run_files(paths: &[String], options: &Options) -> bool {
    let mut all_ok = true;
    for path in paths {
        all_ok &= run_file(path, options);
    }
    all_ok
}

pub fn run_file(path: &str, options: &Options) -> bool {
    let text = match read_file(path) {
        Ok(text) => text,
        Err(msg) => {
            eprintln!("{msg}");
            return false;
        }
    };
    tracing::debug!(path, "running file");
    match options.interpreter().run(path, &text) {
        Ok(_) => true,
        Err(diag) => {
            eprintln!("{}", diag.as_string());
            false
        }
    }
}
