//! SAR CLI — run and compare security-aware shortest-path computations.
//!
//! Subcommands: init, run, compare.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sar_core::RunConfig;

/// SAR — security-aware routing over weighted topologies.
#[derive(Parser, Debug)]
#[command(name = "sar", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, default_value = "sar.toml", global = true)]
    config: PathBuf,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default sar.toml and a sample topology file.
    Init(commands::init::InitArgs),
    /// Run one engine over a topology and print the result.
    Run(commands::run::RunArgs),
    /// Compare classic vs. security-aware routing over a topology.
    Compare(commands::compare::CompareArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = if cli.config.exists() {
        RunConfig::load(&cli.config)?
    } else {
        RunConfig::default()
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    match &cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Run(args) => commands::run::run(args, &config),
        Commands::Compare(args) => commands::compare::run(args, &config),
    }
}
