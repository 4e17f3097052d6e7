//! Command-line interface for gridlock.

use clap::{Parser, ValueEnum};

/// Two-player tic-tac-toe duel, one thread per player.
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Threaded tic-tac-toe duel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Strategy for player X (moves first)
    #[arg(long, value_enum, default_value = "sequential")]
    pub x_strategy: StrategyKind,

    /// Strategy for player O
    #[arg(long, value_enum, default_value = "stochastic")]
    pub o_strategy: StrategyKind,

    /// Pause after each accepted move, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub pause_ms: u64,

    /// Seed for stochastic strategies (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress board output
    #[arg(long)]
    pub quiet: bool,
}

/// Move-selection strategies available on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StrategyKind {
    /// Scan cells in fixed row-major order.
    Sequential,
    /// Pick uniformly random cells.
    Stochastic,
}
