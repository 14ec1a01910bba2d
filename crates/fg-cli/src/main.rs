//! CLI frontend for the Forgotten adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "fg",
    about = "Forgotten: text adventures in the School of Forgotten Subjects",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine events to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options for commands that start a session.
#[derive(Args)]
struct SessionArgs {
    /// Story file (JSON); the built-in school when omitted
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Start in this room instead of the story's start room
    #[arg(long)]
    start: Option<String>,

    /// Keep reading commands after the game is won
    #[arg(long)]
    keep_playing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Play a file of commands, one per line, and print the transcript
    Run {
        /// Script file; blank lines and lines starting with '#' are skipped
        script: PathBuf,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Write a story as JSON
    Export {
        /// Story file to re-export (default: the built-in school)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a story file
    Check {
        /// Story file (JSON)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play { session } => commands::play::run(&session),
        Commands::Run { script, session } => commands::run::run(&script, &session),
        Commands::Export { world, output } => {
            commands::export::run(world.as_deref(), output.as_deref())
        }
        Commands::Check { file } => commands::check::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` applies unless `-v` is given.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        1 => "debug".into(),
        _ => "trace".into(),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
