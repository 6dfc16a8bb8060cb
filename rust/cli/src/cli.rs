//! Command-line argument definitions for the `felt` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "felt",
    version,
    about = "Multi-round console Texas Hold'em against automated opponents"
)]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a table session (humans and bots, up to 6 seats)
    Play {
        /// RNG seed for the deck and the bots (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy id for automated seats (threshold, caller)
        #[arg(long)]
        strategy: Option<String>,
        /// Roster save/load file
        #[arg(long)]
        save_path: Option<String>,
        /// Write JSONL hand records to this file
        #[arg(long)]
        history: Option<String>,
    },
    /// Shuffle and deal a sample hand for inspection
    Deal {
        /// RNG seed (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Aggregate statistics from a JSONL hand-history file
    Stats {
        /// Path to a .jsonl or .jsonl.zst hand-history file
        #[arg(long)]
        input: String,
    },
}
