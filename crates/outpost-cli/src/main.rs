//! Console frontend for the Outpost roll session engine.

mod camp;
mod commands;
mod render;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "outpost",
    about = "Outpost: interactive skill rolls for a survivor camp",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter (e.g. debug, outpost_rolls=trace). Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the camp console, reading commands from stdin
    Play {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Dice rolled per participant when a roll opens
        #[arg(long, default_value = "3")]
        base_dice: u32,

        /// Do not acknowledge solo inputs that change nothing
        #[arg(long)]
        strict_acks: bool,

        /// Print resolution reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the action catalog
    Actions,

    /// List survivor backgrounds
    Backgrounds,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Play {
            seed,
            base_dice,
            strict_acks,
            json,
        } => commands::play::run(commands::play::PlayOptions {
            seed,
            base_dice,
            strict_acks,
            json,
        }),
        Commands::Actions => commands::actions::run(),
        Commands::Backgrounds => commands::backgrounds::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
