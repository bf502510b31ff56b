//! Flags shared by every command.

use basic_eval::{Interpreter, DEFAULT_MAX_CALL_DEPTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// `--max-depth=N`
    pub max_call_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl Options {
    /// Interpreter on the real console and file system.
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::builder()
            .max_call_depth(self.max_call_depth)
            .build()
    }
}

/// Split flags from positional arguments.
///
/// Flags may appear anywhere. Unknown flags are an error.
pub fn parse_options(args: &[String]) -> Result<(Options, Vec<String>), String> {
    let mut options = Options::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = value
                .parse()
                .map_err(|_| format!("invalid value for --max-depth: '{value}'"))?;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.clone());
        }
    }
    Ok((options, positional))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn flags_anywhere() {
        let (options, rest) = parse_options(&args(&["a.bas", "--max-depth=10", "b.bas"])).unwrap();
        assert_eq!(options.max_call_depth, 10);
        assert_eq!(rest, ["a.bas", "b.bas"]);
    }

    #[test]
    fn defaults() {
        let (options, rest) = parse_options(&[]).unwrap();
        assert_eq!(options, Options::default());
        assert!(rest.is_empty());
    }

    #[test]
    fn bad_flags() {
        assert_eq!(
            parse_options(&args(&["--max-depth=lots"])),
            Err("invalid value for --max-depth: 'lots'".to_string())
        );
        assert_eq!(
            parse_options(&args(&["--fast"])),
            Err("unknown option '--fast'".to_string())
        );
    }
}
