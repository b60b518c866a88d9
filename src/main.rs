//! A small front end for the `shallow-json` library.
//!
//! Reads one line from standard input, parses it, and prints the
//! resulting mapping (or the error). The library itself does no I/O;
//! this binary is the thin wrapper around it.

use shallow_json::parse_str;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        eprintln!("error: failed to read input: {}", e);
        return ExitCode::FAILURE;
    }

    // The scanner expects the bare line; drop the trailing newline.
    let source = line.strip_suffix('\n').unwrap_or(&line);
    let source = source.strip_suffix('\r').unwrap_or(source);

    match parse_str(source) {
        Ok(object) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let _ = writeln!(out, "{{");
            for (key, value) in &object {
                let _ = writeln!(out, "    \"{}\": {},", key, value);
            }
            let _ = writeln!(out, "}}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
