use colored::Colorize;

use sd_core::{Character, Job};
use sd_town::{SessionConfig, TownSession};

pub fn run(config: SessionConfig, name: &str, job: &str, force: bool) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("character name cannot be empty".into());
    }
    let job = Job::parse(job).ok_or_else(|| format!("unknown job '{job}', use: warrior, thief"))?;

    if config.save_path.exists() && !force {
        return Err(format!(
            "save file {} already exists (use --force to overwrite)",
            config.save_path.display()
        ));
    }

    let session = TownSession::new(Character::new(name, job), config);
    super::persist(&session)?;

    println!("  {} {name} the {job}", "Created".bold());
    println!("  Saved to {}", session.config().save_path.display());
    Ok(())
}
