use std::io::{self, BufRead, Write};

use monkey::{display_error, lexer::lexer::Lexer, parser::parser::parse};

const PROMPT: &str = ">> ";

/// Interactive read-print loop: one line of source in, the parsed
/// program's canonical rendering out.
fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", PROMPT);
    stdout.flush().expect("Failed to flush stdout");

    for line in stdin.lock().lines() {
        let source = line.expect("Failed to read line");

        if !source.trim().is_empty() {
            match parse(Lexer::new(source.clone(), None)) {
                Ok(program) => println!("{}", program),
                Err(error) => display_error(&error, &source, "repl"),
            }
        }

        print!("{}", PROMPT);
        stdout.flush().expect("Failed to flush stdout");
    }
}
