//! Checkpoints CLI Application
//!
//! A command-line interface for inspecting and exercising the hardcoded
//! checkpoint subsystem.

use chain_checkpoints::checkpoints::{CheckpointConfig, Checkpoints};
use chain_checkpoints::cli;
use chain_checkpoints::core::Network;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "checkpoints")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "Hardcoded checkpoint subsystem for a blockchain full node", long_about = None)]
struct Cli {
    /// Network to use (main or test; unknown values mean main)
    #[arg(short, long, default_value = "main")]
    network: Network,

    /// Disable checkpoint enforcement
    #[arg(long)]
    no_checkpoints: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the active checkpoint table
    List,

    /// Show dataset summary statistics
    Info,

    /// Validate a block hash against the checkpoint at its height
    Check {
        /// Block height
        #[arg(long)]
        height: u64,

        /// Block hash (64 hex chars, optional 0x prefix)
        #[arg(long)]
        hash: String,
    },

    /// Estimate verification progress for a block
    Progress {
        /// Cumulative chain transaction count at the block
        #[arg(long)]
        tx_count: u64,

        /// Block timestamp (Unix seconds)
        #[arg(long)]
        block_time: i64,

        /// Override the current time (Unix seconds, defaults to wall clock)
        #[arg(long)]
        now: Option<i64>,
    },

    /// Find the most recent trusted checkpoint in a block index file
    Last {
        /// JSON block index file
        #[arg(short, long)]
        index: PathBuf,
    },
}

fn main() -> ExitCode {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = CheckpointConfig {
        network: cli.network,
        enforce: !cli.no_checkpoints,
    };
    let checkpoints = Checkpoints::from_config(&config);

    let result = match cli.command {
        Commands::List => cli::cmd_list(&checkpoints),

        Commands::Info => cli::cmd_info(&checkpoints),

        Commands::Check { height, hash } => match cli::cmd_check(&checkpoints, height, &hash) {
            // Mismatch is a policy verdict, reported via the exit status
            Ok(false) => return ExitCode::FAILURE,
            other => other.map(|_| ()),
        },

        Commands::Progress {
            tx_count,
            block_time,
            now,
        } => cli::cmd_progress(&checkpoints, tx_count, block_time, now),

        Commands::Last { index } => cli::cmd_last(&checkpoints, &index),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
