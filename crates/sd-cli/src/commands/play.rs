use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::warn;

use sd_core::{Character, Job};
use sd_town::{SessionConfig, TownError, TownSession, is_quit_command};

pub fn run(config: SessionConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let mut session = match TownSession::load(config.clone()) {
        Ok(session) => {
            println!("  Save loaded.");
            session
        }
        Err(TownError::NoSaveFile(_)) => create_character(&mut reader, config)?,
        Err(e) => {
            warn!(error = %e, "save file unreadable, starting a new game");
            println!(
                "  {}",
                format!("Could not load save ({e}); starting a new game.").yellow()
            );
            create_character(&mut reader, config)?
        }
    };
    super::persist(&session)?;

    println!("  {} Sparta Dungeon", "Welcome to".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

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
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }

        if let Err(e) = session.save() {
            println!("{}\n", format!("save failed: {e}").red());
        }

        if is_quit_command(input) {
            break;
        }
    }

    Ok(())
}

/// Ask for a name and job on `reader`.
fn create_character(
    reader: &mut impl BufRead,
    config: SessionConfig,
) -> Result<TownSession, String> {
    println!("  Welcome, adventurer, to the Sparta Dungeon!");
    let name = prompt(reader, "  Enter your name: ")?;
    let name = if name.is_empty() { "Chad".to_string() } else { name };

    let choice = prompt(reader, "  Choose a job: 1. Warrior  2. Thief: ")?;
    let job = match choice.as_str() {
        "2" => Job::Thief,
        other => Job::parse(other).unwrap_or(Job::Warrior),
    };

    Ok(TownSession::new(Character::new(name, job), config))
}

fn prompt(reader: &mut impl BufRead, message: &str) -> Result<String, String> {
    print!("{message}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| e.to_string())?;
    Ok(line.trim().to_string())
}
