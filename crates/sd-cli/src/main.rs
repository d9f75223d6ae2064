//! CLI frontend for Sparta Dungeon.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sd_town::SessionConfig;
use sd_town::config::DEFAULT_SAVE_PATH;

#[derive(Parser)]
#[command(
    name = "sparta",
    about = "Sparta Dungeon: a turn-based dungeon progression game",
    version,
    propagate_version = true
)]
struct Cli {
    /// Save file to read and write
    #[arg(long, global = true, default_value = DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// RNG seed for reproducible dungeon runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character and save file
    New {
        /// Character name
        name: String,

        /// Job: warrior or thief
        #[arg(short, long, default_value = "warrior")]
        job: String,

        /// Overwrite an existing save file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the character sheet
    Status,

    /// List owned items
    Inventory,

    /// Equip or unequip an inventory item
    Equip {
        /// Inventory position (1-based)
        number: usize,
    },

    /// List the shop's stock
    Shop,

    /// Buy an item from the shop
    Buy {
        /// Shop position (1-based)
        number: usize,
    },

    /// Sell an inventory item to the shop
    Sell {
        /// Inventory position (1-based)
        number: usize,
    },

    /// Rest at the inn to restore health
    Rest,

    /// List dungeons, or enter one
    Dungeon {
        /// Dungeon position (1-based); omit to list
        number: Option<usize>,
    },

    /// Start the interactive town loop
    Play,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SessionConfig::default().with_save_path(cli.save);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = match cli.command {
        Commands::New { name, job, force } => commands::new::run(config, &name, &job, force),
        Commands::Status => commands::status::run(config),
        Commands::Inventory => commands::status::inventory(config),
        Commands::Equip { number } => commands::equip::run(config, number),
        Commands::Shop => commands::shop::list(config),
        Commands::Buy { number } => commands::shop::buy(config, number),
        Commands::Sell { number } => commands::shop::sell(config, number),
        Commands::Rest => commands::rest::run(config),
        Commands::Dungeon { number } => commands::dungeon::run(config, number),
        Commands::Play => commands::play::run(config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
