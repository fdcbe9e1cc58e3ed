use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use nd_table::TableSession;

pub fn run(
    seed: Option<u64>,
    presets: Option<&Path>,
    history_limit: Option<usize>,
) -> Result<(), String> {
    let config = super::table_config(seed, presets, history_limit)?;
    let preset_count = config.presets.len();
    let mut session = TableSession::new(config);

    println!("  {} Dice Table", "Starting".bold());
    match seed {
        Some(seed) => println!("  Presets: {preset_count} | Seed: {seed}"),
        None => println!("  Presets: {preset_count}"),
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
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

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
