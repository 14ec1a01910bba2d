//! Interactive play on stdin/stdout.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::SessionArgs;

pub fn run(args: &SessionArgs) -> Result<(), String> {
    let mut session = super::start_session(args)?;

    println!("  {}", session.world().meta.title.bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", session.opening());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while session.accepts_input() {
        print!("{} ", ">".bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        println!("{}\n", session.submit(input));
    }

    if session.is_terminal() {
        println!("  {}", "Thanks for playing!".green());
    }
    Ok(())
}
