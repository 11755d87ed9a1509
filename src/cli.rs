use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "fame-balance")]
#[command(about = "Fame exchange and round-score tables for duel balance tuning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML file overriding the grid, exchange constants or score rules
    #[arg(short, long, global = true, env = "FAME_BALANCE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep the grid and print the scoring table
    Table {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only rows with this base k
        #[arg(long)]
        k: Option<f64>,

        /// Only rows with this stake count
        #[arg(long)]
        z: Option<i64>,

        /// Only rows with this fame value
        #[arg(long)]
        fame: Option<i64>,
    },

    /// Score of a single round
    Score {
        /// Fame at the start of the round
        #[arg(long)]
        fame: i64,

        /// Lives staked
        #[arg(long, default_value = "1")]
        lives: i64,

        /// Score the losing side instead of the winner
        #[arg(long)]
        loss: bool,
    },

    /// Search for a base k that hits a target mean gain/loss ratio
    Tune {
        /// Target mean Ygained / Ylost across the fame axis
        #[arg(long)]
        target_ratio: f64,

        /// Lives staked
        #[arg(long, default_value = "1")]
        lives: i64,

        /// Accepted distance from the target
        #[arg(long, default_value = "0.01")]
        tolerance: f64,

        /// Proportional gain on the ratio error
        #[arg(long, default_value = "5.0")]
        gain: f64,

        /// Initial k
        #[arg(long, default_value = "1.0")]
        start_k: f64,

        /// Iteration cap
        #[arg(long, default_value = "1000")]
        max_iters: usize,
    },

    /// Replay a seeded duelist career under one row's constants
    Career {
        /// Base k
        #[arg(long)]
        k: f64,

        /// Lives staked per duel
        #[arg(long, default_value = "1")]
        lives: i64,

        /// Fame before the first duel
        #[arg(long, default_value = "3000")]
        start_fame: i64,

        /// Probability of winning each duel
        #[arg(long, default_value = "0.5")]
        win_rate: f64,

        /// Maximum number of duels
        #[arg(long, default_value = "100")]
        duels: usize,

        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print every duel
        #[arg(long)]
        trajectory: bool,
    },
}
