//! Command-line interface for reversi.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reversi - rules engine driver
#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(about = "Replay, restore and self-play Reversi games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(short, long, global = true, default_value = "reversi.toml")]
    pub config: PathBuf,

    /// Override the configured board dimension
    #[arg(short, long, global = true)]
    pub dimension: Option<usize>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a move transcript, printing the board after every ply
    Play {
        /// Moves in algebraic notation, e.g. "D3 C5 F6"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Start from a snapshot JSON file instead of the opening position
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Print the move history as JSON when done
        #[arg(long)]
        json: bool,
    },

    /// Play uniformly random games and tally the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}
