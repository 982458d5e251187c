//! # Courier Dispatch
//!
//! > **A concurrent simulation of food orders flowing from a kitchen to couriers.**
//!
//! Orders are released into the system at a paced rate, a dispatcher hands
//! each one to a courier, and couriers wait until they are allowed to pick
//! something up. The run reports how long food sat on the shelf.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Two Delivery Policies
//!
//! - **Matched**: every courier is bound to the order it was dispatched for.
//!   It waits until exactly that order is ready, and the time the food waited
//!   for its courier is measured.
//! - **FIFO**: couriers take whichever ready order is at the front of the
//!   shelf. A courier may deliver a different order than the one it was
//!   dispatched for. No wait time is recorded.
//!
//! ### Shared State as Services
//!
//! The three pieces of shared state (pickup queue, delivery channel, wait-time
//! accumulator) are owned service objects, each with its own lock and a small
//! set of operations. Blocking waits use a broadcast signal plus a re-check
//! loop, so a waiter never assumes a wake-up was meant for it.
//!
//! ## 🚀 Core Concepts
//!
//! ### The Pipeline
//!
//! ```text
//! OrderFeeder -> PickupQueue -> Dispatcher -> Courier -> DeliveryChannel
//!                                                     -> WaitTimeAccumulator
//! ```
//!
//! The feeder and the dispatcher start together. Couriers run concurrently
//! with the dispatcher and with each other on a [`CourierPool`](courier::CourierPool).
//!
//! ### Time Is Injected
//!
//! Pauses and timestamps go through a [`Clock`](clock::Clock). The binary
//! runs [`SystemClock`](clock::SystemClock) on real time; tests run the same
//! clock on a paused Tokio runtime, where it becomes logical time that jumps
//! from deadline to deadline, so a full run is instant and reproducible.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Order`](model::Order), [`DeliveryPolicy`](model::DeliveryPolicy) and the
//! [`Delivery`](model::Delivery) record each courier produces.
//!
//! ### 2. The Shared State ([`coordination`])
//! - **Key items**: [`PickupQueue`](coordination::PickupQueue),
//!   [`DeliveryChannel`](coordination::DeliveryChannel),
//!   [`WaitTimeAccumulator`](coordination::WaitTimeAccumulator).
//!
//! ### 3. The Workers ([`feeder`], [`dispatcher`], [`courier`])
//! The three roles of the pipeline.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Creates the services, wires the roles together, waits for the
//!   run to finish and builds the [`RunReport`](lifecycle::RunReport).
//! - **Key items**: [`DispatchSystem`](lifecycle::DispatchSystem),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 5. The Edges ([`loader`], [`config`], [`cli`], [`error`])
//! Reading the orders file, run settings, flags, and the crate error type.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Matched policy, real time (one time unit = one second)
//! cargo run -- --orders dispatch_orders.json
//!
//! # FIFO policy, fast and reproducible
//! cargo run -- --policy fifo --time-unit-ms 10 --seed 7
//!
//! # With debug logs
//! RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod coordination;
pub mod courier;
pub mod dispatcher;
pub mod error;
pub mod feeder;
pub mod lifecycle;
pub mod loader;
pub mod model;
