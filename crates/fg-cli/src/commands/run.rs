//! Non-interactive play from a script file.

use std::path::Path;

use tracing::info;

use crate::SessionArgs;

pub fn run(script: &Path, args: &SessionArgs) -> Result<(), String> {
    let commands = std::fs::read_to_string(script)
        .map_err(|e| format!("cannot read {}: {e}", script.display()))?;
    let mut session = super::start_session(args)?;

    println!("{}\n", session.opening());

    let mut played = 0usize;
    for input in commands.lines().map(str::trim) {
        if input.is_empty() || input.starts_with('#') {
            continue;
        }
        if !session.accepts_input() {
            break;
        }
        println!("> {input}");
        println!("{}\n", session.submit(input));
        played += 1;
    }

    info!(played, won = session.is_terminal(), "script finished");
    Ok(())
}
