//! Tic-tac-toe learner CLI
//!
//! This CLI provides:
//! - Self-play training of two value-learning agents
//! - Interactive games against a trained or fresh agent

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-tac-toe agents that learn by playing", long_about = None)]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train two agents against each other
    Train(ttt_learner::cli::commands::train::TrainArgs),

    /// Play at the terminal
    Play(ttt_learner::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    simple_logging::log_to_stderr(level);

    match cli.command {
        Commands::Train(args) => ttt_learner::cli::commands::train::execute(args),
        Commands::Play(args) => ttt_learner::cli::commands::play::execute(args),
    }
}
