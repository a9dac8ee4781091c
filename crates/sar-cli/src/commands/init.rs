//! `sar init` — write a default configuration and sample topology.

use clap::Args;
use std::path::PathBuf;

use sar_core::{RunConfig, Topology};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory).
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    let config_path = args.dir.join("sar.toml");
    let topology_path = args.dir.join("topology.json");

    if config_path.exists() {
        anyhow::bail!(
            "configuration file already exists at {}",
            config_path.display()
        );
    }
    if topology_path.exists() {
        anyhow::bail!("topology file already exists at {}", topology_path.display());
    }

    std::fs::create_dir_all(&args.dir)?;
    RunConfig::default().save(&config_path)?;
    std::fs::write(&topology_path, Topology::sample().to_json_pretty()?)?;

    println!("Initialized SAR workspace at {}", args.dir.display());
    println!("Edit sar.toml to customize engine, mode, and beta.");
    println!("Run 'sar run --start A' to trace the sample topology.");
    println!("Run 'sar compare --start A' to diff classic vs. SAR routes.");

    Ok(())
}
