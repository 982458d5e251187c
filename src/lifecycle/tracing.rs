//! # Observability & Tracing
//!
//! Every lifecycle line of a run is a `tracing` event. The subscriber writes
//! each event as one line, so lines from concurrent couriers never
//! interleave.
//!
//! ## What Gets Traced
//!
//! - **Feeder**: start, each released batch (debug), exit
//! - **Dispatcher**: start, each dispatched order (debug), completion with
//!   the processed count
//! - **Couriers**: arrival (debug) and delivery, e.g.
//!   `CourierMatched#2 - delivering order=B foodWaitTime=4012.5`
//! - **Pool**: worker startup and shutdown
//!
//! ## Usage Examples
//!
//! ```bash
//! # Delivery lines and lifecycle events (default)
//! cargo run -- --orders dispatch_orders.json
//!
//! # Include arrivals, batches and worker activity
//! RUST_LOG=debug cargo run
//!
//! # Only this crate, at debug
//! RUST_LOG=courier_dispatch=debug cargo run
//! ```
//!
//! Without `RUST_LOG` the filter defaults to `info`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false) // Trace lines carry their own labels
        .with_ansi(std::io::stdout().is_terminal())
        .compact()
        .init();
}
