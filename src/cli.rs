//! Command-line surface of the `courier-dispatch` binary.

use crate::config::{
    PoolMode, SimulationConfig, DEFAULT_BATCH_SIZE, DEFAULT_ORDERS_FILE, DEFAULT_TIME_UNIT_MS,
    DEFAULT_WORKERS,
};
use crate::model::DeliveryPolicy;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Simulate dispatching food orders to couriers and report food wait times.
#[derive(Debug, Parser)]
#[command(name = "courier-dispatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with the order records.
    #[arg(long, env = "DISPATCH_ORDERS", default_value = DEFAULT_ORDERS_FILE)]
    pub orders: PathBuf,

    /// Courier assignment policy: matched or fifo.
    #[arg(long, env = "DISPATCH_POLICY", default_value = "matched")]
    pub policy: DeliveryPolicy,

    /// Length of one simulated time unit, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TIME_UNIT_MS)]
    pub time_unit_ms: u64,

    /// Orders released by the feeder per time unit.
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Courier workers in the bounded pool.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Spawn one task per order instead of using a bounded worker pool.
    #[arg(long, conflicts_with = "workers")]
    pub unbounded: bool,

    /// Seed for courier arrival delays (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> SimulationConfig {
        let pool = if self.unbounded {
            PoolMode::Unbounded
        } else {
            PoolMode::Bounded {
                workers: self.workers,
            }
        };
        SimulationConfig {
            orders_path: self.orders.clone(),
            policy: self.policy,
            time_unit: Duration::from_millis(self.time_unit_ms),
            batch_size: self.batch_size,
            pool,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_default_config() {
        let cli = Cli::try_parse_from(["courier-dispatch"]).expect("no flags needed");
        let config = cli.config();
        assert_eq!(config.policy, DeliveryPolicy::Matched);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.pool, PoolMode::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn flags_override_every_setting() {
        let cli = Cli::try_parse_from([
            "courier-dispatch",
            "--orders",
            "orders.json",
            "--policy",
            "fifo",
            "--time-unit-ms",
            "5",
            "--batch-size",
            "3",
            "--unbounded",
            "--seed",
            "99",
        ])
        .expect("valid flags");
        let config = cli.config();
        assert_eq!(config.orders_path, PathBuf::from("orders.json"));
        assert_eq!(config.policy, DeliveryPolicy::Fifo);
        assert_eq!(config.time_unit, Duration::from_millis(5));
        assert_eq!(config.batch_size, 3);
        assert_eq!(config.pool, PoolMode::Unbounded);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["courier-dispatch", "--policy", "random"]).is_err());
    }

    #[test]
    fn unbounded_conflicts_with_explicit_workers() {
        assert!(
            Cli::try_parse_from(["courier-dispatch", "--workers", "4", "--unbounded"]).is_err()
        );
    }
}
