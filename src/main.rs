//! # Courier Dispatch
//!
//! Runs one dispatch simulation over an orders file and prints the final
//! report. See [`courier_dispatch`] for the moving parts.

use clap::Parser;
use courier_dispatch::cli::Cli;
use courier_dispatch::clock::SystemClock;
use courier_dispatch::error::DispatchError;
use courier_dispatch::lifecycle::{setup_tracing, DispatchSystem};
use courier_dispatch::loader::load_orders;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), DispatchError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.config();

    let orders = load_orders(&config.orders_path)?;
    let system = DispatchSystem::new(config, Arc::new(SystemClock::new()))?;
    let report = system.run(orders).await?;

    println!("{report}");
    info!(seed = report.seed, "Application completed successfully");
    Ok(())
}
