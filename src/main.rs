use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use geocode_enricher::{Config, run, setup_logging};

/// Enrich CSV/XLSX rows holding Korean addresses with Naver geocoding results
#[derive(Parser, Debug)]
#[command(name = "geocode-enricher")]
struct CliArgs {
    /// JSON config with the API credentials, the input file and the address column names
    #[arg(long, value_name = "PATH", default_value = "config.json")]
    config: PathBuf,

    /// Directory receiving the debug/info/error log files
    #[arg(long, value_name = "DIR", default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(&args.log_dir)?;

    if let Err(e) = Config::load(&args.config).and_then(|config| run(&config)) {
        tracing::error!("{e}");
        return Err(e.into());
    }
    Ok(())
}
