//! CLI argument definitions using clap
//!
//! - rosterdb [--config <path>] [--log-level <level>]

use clap::Parser;
use std::path::PathBuf;

/// rosterdb - an interactive in-memory student roster
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum log severity written to stderr (trace, info, warn, error, fatal)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
