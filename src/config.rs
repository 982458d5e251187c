//! # Simulation Settings
//!
//! [`SimulationConfig`] gathers every knob of a run. The binary builds it from
//! command-line flags (see [`crate::cli`]); tests build it directly, usually
//! starting from [`SimulationConfig::default`] and overriding a few fields.

use crate::error::DispatchError;
use crate::model::DeliveryPolicy;
use std::path::PathBuf;
use std::time::Duration;

/// File read when no orders path is given.
pub const DEFAULT_ORDERS_FILE: &str = "dispatch_orders.json";
/// Orders the feeder releases per time unit.
pub const DEFAULT_BATCH_SIZE: usize = 2;
/// Length of one simulated time unit in milliseconds.
pub const DEFAULT_TIME_UNIT_MS: u64 = 1000;
/// Courier workers in the default bounded pool.
pub const DEFAULT_WORKERS: usize = 16;
/// Courier jobs that may wait for a free worker before the dispatcher blocks.
pub const DEFAULT_JOB_QUEUE: usize = 32;

/// How courier work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolMode {
    /// A fixed set of worker tasks fed through a job queue.
    Bounded { workers: usize },
    /// One task per order. Only sensible for small inputs.
    Unbounded,
}

impl Default for PoolMode {
    fn default() -> Self {
        PoolMode::Bounded {
            workers: DEFAULT_WORKERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub orders_path: PathBuf,
    pub policy: DeliveryPolicy,
    /// Real duration of one simulated time unit.
    pub time_unit: Duration,
    /// Maximum orders released per feeder tick.
    pub batch_size: usize,
    pub pool: PoolMode,
    /// Seed for courier arrival delays. A random seed is drawn (and logged)
    /// when unset.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            orders_path: PathBuf::from(DEFAULT_ORDERS_FILE),
            policy: DeliveryPolicy::default(),
            time_unit: Duration::from_millis(DEFAULT_TIME_UNIT_MS),
            batch_size: DEFAULT_BATCH_SIZE,
            pool: PoolMode::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Rejects settings under which the feeder or the couriers could never
    /// make progress.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.batch_size == 0 {
            return Err(DispatchError::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        if let PoolMode::Bounded { workers: 0 } = self.pool {
            return Err(DispatchError::InvalidConfig(
                "a bounded courier pool needs at least one worker".to_string(),
            ));
        }
        Ok(())
    }
}
