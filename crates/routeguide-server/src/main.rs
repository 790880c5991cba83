//! RouteGuide Server CLI
//!
//! Starts the gRPC server for landmark lookup, route summaries and location chat.

use clap::Parser;
use routeguide_server::{logging, Cli, ServerSettings};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = ServerSettings::resolve(&cli)?;

    logging::init(&settings.log_filter);

    routeguide_server::run(settings).await
}
