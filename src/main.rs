//! pinslot - multi-slot one-time passcode input
//!
//! A terminal front-end that feeds slot events into the passcode
//! controller and renders the slot row after each one.

use clap::{Parser, Subcommand};
use pinslot_core::{error::PinslotError, init_logging};
use std::path::PathBuf;

mod cli;

use cli::session::SessionOptions;

#[derive(Parser)]
#[command(name = "pinslot")]
#[command(about = "Multi-slot one-time passcode input driven by slot events")]
struct Cli {
    /// Configuration file (default: ~/.config/pinslot/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of slots, overriding the configuration
    #[arg(long, global = true)]
    slots: Option<usize>,

    /// Initial code, overriding the configuration
    #[arg(long, global = true)]
    code: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script file
    Replay {
        /// Script with one event per line
        script: PathBuf,

        /// Print snapshots as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Read events from stdin, one per line
    Run {
        /// Print snapshots as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();
    let options = |json| SessionOptions {
        config_path: cli.config.clone(),
        slots: cli.slots,
        code: cli.code.clone(),
        json,
    };

    let result = match &cli.command {
        Commands::Replay { script, json } => cli::session::run_replay(&options(*json), script),
        Commands::Run { json } => cli::session::run_interactive(&options(*json)),
        Commands::Init { force } => cli::init::run_init(cli.config.as_deref(), *force),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration and construction errors (exit code 2)
                PinslotError::Config(_)
                | PinslotError::Toml(_)
                | PinslotError::TomlSerialize(_)
                | PinslotError::Slot(_) => 2,
                // Bad scripts and I/O (exit code 1 - runtime)
                PinslotError::Script(_) | PinslotError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
