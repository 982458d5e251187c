//! Shared state between the feeder, the dispatcher and the couriers.
//!
//! Each resource is an owned service with its own lock and a narrow set of
//! operations; the raw containers are never handed out. Services that
//! callers block on pair their lock with a [`tokio::sync::Notify`] used as a
//! broadcast: every state change wakes all waiters and each waiter re-checks
//! its own predicate.
//!
//! No operation in this module holds more than one service's lock.
//!
//! # Main Components
//!
//! - [`PickupQueue`] - Orders released by the feeder, awaiting dispatch
//! - [`DeliveryChannel`] - Where the dispatcher publishes ready orders
//! - [`ReadinessBoard`] - Matched policy: order id to ready timestamp
//! - [`FifoShelf`] - Fifo policy: ready orders in dispatch order
//! - [`WaitTimeAccumulator`] - Running total of food wait times

pub mod delivery_channel;
pub mod fifo_shelf;
pub mod pickup_queue;
pub mod readiness;
pub mod wait_time;

pub use delivery_channel::*;
pub use fifo_shelf::*;
pub use pickup_queue::*;
pub use readiness::*;
pub use wait_time::*;
