//! CLI tool to inspect and round-trip xbps-src template files.

use std::fs;
use std::process::ExitCode;

use xbps_template_rs::{Fragment, Tokenized, serialize, tokenize};

fn usage() -> ExitCode {
    eprintln!("Usage: xbps-template <command> [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  validate <files...>      Check that template(s) tokenize completely");
    eprintln!("  print <files...>         Tokenize template(s) and print them back");
    eprintln!("  get <key> <files...>     Print the raw value of a key");
    eprintln!("  expand <key> <files...>  Print the expanded value of a key");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  xbps-template validate srcpkgs/foo/template");
    eprintln!("  xbps-template expand distfiles srcpkgs/foo/template");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return usage();
    }

    let command = args[1].as_str();

    let (key, files) = match command {
        "get" | "expand" => {
            if args.len() < 3 {
                eprintln!("Error: {command} requires a key");
                return ExitCode::from(2);
            }
            (args[2].as_str(), &args[3..])
        }
        "validate" | "print" => ("", &args[2..]),
        _ => {
            eprintln!("Unknown command: {command}");
            return usage();
        }
    };

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        if !run(command, key, path, &content) {
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Run one command against one file. Returns `false` on failure.
fn run(command: &str, key: &str, path: &str, content: &str) -> bool {
    let tokenized = tokenize(content);

    match command {
        "validate" => validate(path, content, &tokenized),
        "print" => {
            print!("{}", serialize(&tokenized.document));
            if tokenized.rest.is_empty() {
                true
            } else {
                eprintln!("{path}: warning: trailing input not tokenized");
                false
            }
        }
        "get" | "expand" => {
            let value = if command == "get" {
                tokenized.document.get(key).map(str::to_owned)
            } else {
                tokenized.document.get_expanded(key)
            };
            match value {
                Some(value) => {
                    println!("{value}");
                    true
                }
                None => {
                    eprintln!("{path}: no assignment for '{key}'");
                    false
                }
            }
        }
        _ => {
            eprintln!("Unknown command: {command}");
            false
        }
    }
}

fn validate(path: &str, content: &str, tokenized: &Tokenized<'_>) -> bool {
    if tokenized.rest.is_empty() {
        let assignments = tokenized
            .document
            .fragments
            .iter()
            .filter(|f| matches!(f, Fragment::KeyValue { .. }))
            .count();
        let functions = tokenized
            .document
            .fragments
            .iter()
            .filter(|f| matches!(f, Fragment::FunctionBlock { .. }))
            .count();
        eprintln!(
            "{path}: valid ({assignments} assignment(s), \
             {functions} function(s))"
        );
        true
    } else {
        let offset = content.len() - tokenized.rest.len();
        eprintln!("{path}: unrecognized input at byte {offset}");
        false
    }
}
