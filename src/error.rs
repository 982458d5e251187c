//! # Dispatch Errors
//!
//! This module defines the error type shared by the loader, the configuration
//! layer and the runtime. Every fallible operation in the crate returns
//! `Result<_, DispatchError>` so callers can propagate with `?`.

use crate::model::OrderId;
use std::path::PathBuf;

/// Errors that can occur while preparing or running a dispatch simulation.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The orders file could not be read.
    #[error("Failed to read orders file {}: {source}", .path.display())]
    OrdersFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The orders file is not a valid JSON array of order records.
    #[error("Malformed order records: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two input records share the same id.
    #[error("Duplicate order id: {0}")]
    DuplicateOrderId(OrderId),

    /// The simulation settings cannot produce a finite run.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A feeder, dispatcher or courier task panicked.
    #[error("Task failed: {0}")]
    TaskFailed(String),
}

impl From<tokio::task::JoinError> for DispatchError {
    fn from(e: tokio::task::JoinError) -> Self {
        DispatchError::TaskFailed(e.to_string())
    }
}
