//! Command-line interface for pairup.

use clap::{Parser, Subcommand};

use pairup::GridSize;

/// Pairup - memory-matching card game with persistent click statistics
#[derive(Parser, Debug)]
#[command(name = "pairup")]
#[command(about = "Memory-matching card game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Board size as "<rows>x<cols>"
        #[arg(short, long, default_value = "3x4")]
        size: GridSize,

        /// Path to the results database (created if it doesn't exist)
        #[arg(long, default_value = "pairup.db")]
        db: String,

        /// Play without persisting results
        #[arg(long)]
        no_store: bool,
    },

    /// Print aggregate statistics across all stored games
    Stats {
        /// Path to the results database
        #[arg(long, default_value = "pairup.db")]
        db: String,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
