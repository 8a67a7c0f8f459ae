//! Command-line interface for strictly_othello.

use clap::{Parser, Subcommand};
use strictly_othello::StrategyKind;

/// Strictly Othello - rule-checked Othello matches between strategies
#[derive(Parser, Debug)]
#[command(name = "strictly_othello")]
#[command(about = "Plays Othello matches between built-in strategies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one match and print the final board
    Play {
        /// Path to a TOML match configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Edge length of the board (even, at least 4)
        #[arg(long)]
        board_size: Option<usize>,

        /// Name of the player using black tokens
        #[arg(long)]
        black: Option<String>,

        /// Name of the player using white tokens
        #[arg(long)]
        white: Option<String>,

        /// Strategy of the black player
        #[arg(long, value_enum)]
        black_strategy: Option<StrategyKind>,

        /// Strategy of the white player
        #[arg(long, value_enum)]
        white_strategy: Option<StrategyKind>,

        /// Maximum computation time per move in milliseconds
        #[arg(long)]
        max_computation_time_ms: Option<u64>,

        /// Seed for reproducible random play
        #[arg(long)]
        seed: Option<u64>,

        /// Print the board after every move
        #[arg(long)]
        show_moves: bool,
    },
}
