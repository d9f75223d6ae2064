pub mod dungeon;
pub mod equip;
pub mod new;
pub mod play;
pub mod rest;
pub mod shop;
pub mod status;

use sd_town::{SessionConfig, TownError, TownSession};

/// Load the session named by `config`, pointing at `sparta new` when no
/// save exists yet.
fn open_session(config: SessionConfig) -> Result<TownSession, String> {
    TownSession::load(config).map_err(|e| match e {
        TownError::NoSaveFile(path) => format!(
            "no save file at {}; create a character with `sparta new <name>`",
            path.display()
        ),
        other => format!("cannot load save: {other}"),
    })
}

/// Write the session back to its save file.
fn persist(session: &TownSession) -> Result<(), String> {
    session
        .save()
        .map_err(|e| format!("cannot write save: {e}"))
}

/// Run one text command against the saved session and save the result.
fn run_command(config: SessionConfig, command: &str) -> Result<(), String> {
    let mut session = open_session(config)?;
    let output = session.process(command).map_err(|e| e.to_string())?;
    persist(&session)?;
    println!("{output}");
    Ok(())
}
