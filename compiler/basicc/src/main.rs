//! BASIC CLI
//!
//! `basic` alone starts the REPL; subcommands run, lex or parse files.

use basicc::commands::{lex_file, parse_file, parse_options, repl, run_files};

fn main() {
    basicc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, positional) = match parse_options(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let Some(command) = positional.first() else {
        if let Err(e) = repl(&options) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    };

    let ok = match command.as_str() {
        "run" => {
            if positional.len() < 2 {
                eprintln!("Usage: basic run <file>... [--max-depth=N]");
                std::process::exit(1);
            }
            run_files(&positional[1..], &options)
        }
        "lex" => {
            if positional.len() < 2 {
                eprintln!("Usage: basic lex <file>");
                std::process::exit(1);
            }
            lex_file(&positional[1])
        }
        "parse" => {
            if positional.len() < 2 {
                eprintln!("Usage: basic parse <file>");
                std::process::exit(1);
            }
            parse_file(&positional[1])
        }
        "help" | "-h" => {
            print_usage();
            true
        }
        "version" | "-v" => {
            println!("BASIC {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            // If it looks like a script, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("bas"))
            {
                run_files(&positional, &options)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                false
            }
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("BASIC interpreter");
    println!();
    println!("Usage: basic [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)               Start the interactive prompt");
    println!("  run <file>...        Run each file; keeps going after a failure");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  parse <file>         Parse and report the expression count");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>      Maximum call depth (default: 1000)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Tracing filter, e.g. basic_eval=debug");
    println!("  BASIC_LOG_TREE       Show tracing spans as a tree");
}
