//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// RouteGuide server - landmark lookup, route summaries and location chat over gRPC
#[derive(Debug, Parser)]
#[command(name = "routeguide-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "ROUTEGUIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides the config file
    #[arg(long, env = "ROUTEGUIDE_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Port to bind, overrides the config file
    #[arg(short, long, env = "ROUTEGUIDE_PORT")]
    pub port: Option<u16>,

    /// Landmark dataset (JSON), overrides the config file
    #[arg(short, long, env = "ROUTEGUIDE_DATASET")]
    pub dataset: Option<PathBuf>,
}
