//! # Run Lifecycle & Orchestration
//!
//! The pieces of a simulation are simple on their own; wiring them together
//! is where the care goes. This module is the "conductor":
//!
//! 1. **Service creation** - one [`PickupQueue`], one [`DeliveryChannel`] for
//!    the configured policy and one [`WaitTimeAccumulator`]
//! 2. **Dependency injection** - couriers receive those services through a
//!    [`CourierContext`] when they run
//! 3. **Task startup** - the feeder and the dispatcher are spawned together
//! 4. **Completion** - both tasks are awaited before any total is read
//! 5. **Reporting** - a [`RunReport`] summarizes the run
//!
//! ## Usage
//!
//! ```rust,no_run
//! use courier_dispatch::clock::SystemClock;
//! use courier_dispatch::config::SimulationConfig;
//! use courier_dispatch::lifecycle::DispatchSystem;
//! use courier_dispatch::loader::load_orders;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), courier_dispatch::error::DispatchError> {
//! let config = SimulationConfig::default();
//! let orders = load_orders(&config.orders_path)?;
//! let system = DispatchSystem::new(config, Arc::new(SystemClock::new()))?;
//! let report = system.run(orders).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the log subscriber; see [`tracing`](self::tracing).
//!
//! [`PickupQueue`]: crate::coordination::PickupQueue
//! [`DeliveryChannel`]: crate::coordination::DeliveryChannel
//! [`WaitTimeAccumulator`]: crate::coordination::WaitTimeAccumulator
//! [`CourierContext`]: crate::courier::CourierContext

pub mod dispatch_system;
pub mod report;
pub mod tracing;

pub use dispatch_system::*;
pub use report::*;
pub use self::tracing::*;
