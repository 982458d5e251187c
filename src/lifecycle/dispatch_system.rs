use crate::clock::Clock;
use crate::config::SimulationConfig;
use crate::coordination::{DeliveryChannel, PickupQueue, WaitTimeAccumulator};
use crate::courier::CourierContext;
use crate::dispatcher::Dispatcher;
use crate::error::DispatchError;
use crate::feeder::OrderFeeder;
use crate::lifecycle::RunReport;
use crate::loader::validate_orders;
use crate::model::Order;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for one dispatch simulation.
///
/// `DispatchSystem` is responsible for:
/// - **Service ownership**: the pickup queue, the delivery channel and the
///   wait-time accumulator, each behind its own lock
/// - **Wiring**: handing those services to the feeder, the dispatcher and,
///   through a [`CourierContext`], to every courier
/// - **Completion**: awaiting the feeder and the dispatcher (which in turn
///   joins every courier) before reading the totals
///
/// A system is meant for a single run; the services keep their state
/// afterwards so callers can inspect them.
pub struct DispatchSystem {
    config: SimulationConfig,
    clock: Arc<dyn Clock>,
    pickup_queue: Arc<PickupQueue>,
    delivery_channel: Arc<DeliveryChannel>,
    wait_times: Arc<WaitTimeAccumulator>,
}

impl DispatchSystem {
    /// Creates the shared services for `config`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::InvalidConfig`] if the settings cannot produce a
    /// finite run.
    pub fn new(config: SimulationConfig, clock: Arc<dyn Clock>) -> Result<Self, DispatchError> {
        config.validate()?;
        let delivery_channel = Arc::new(DeliveryChannel::for_policy(config.policy));
        Ok(Self {
            config,
            clock,
            pickup_queue: Arc::new(PickupQueue::new()),
            delivery_channel,
            wait_times: Arc::new(WaitTimeAccumulator::new()),
        })
    }

    pub fn pickup_queue(&self) -> &Arc<PickupQueue> {
        &self.pickup_queue
    }

    pub fn delivery_channel(&self) -> &Arc<DeliveryChannel> {
        &self.delivery_channel
    }

    pub fn wait_times(&self) -> &Arc<WaitTimeAccumulator> {
        &self.wait_times
    }

    /// Runs the simulation over `orders` to completion.
    ///
    /// The feeder and the dispatcher start together; this returns once both
    /// have finished and every courier has delivered.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::DuplicateOrderId`] before anything starts, if two
    ///   orders share an id
    /// - [`DispatchError::TaskFailed`] if a feeder, dispatcher or courier task
    ///   panicked
    pub async fn run(&self, orders: Vec<Order>) -> Result<RunReport, DispatchError> {
        validate_orders(&orders)?;

        let total = orders.len();
        let seed = self.config.seed.unwrap_or_else(rand::random);
        info!(policy = %self.config.policy, orders = total, seed, "Starting dispatch simulation");

        let feeder = OrderFeeder::new(
            orders,
            self.config.batch_size,
            Arc::clone(&self.pickup_queue),
            Arc::clone(&self.clock),
            self.config.time_unit,
        );
        let ctx = CourierContext {
            channel: Arc::clone(&self.delivery_channel),
            wait_times: Arc::clone(&self.wait_times),
            clock: Arc::clone(&self.clock),
            time_unit: self.config.time_unit,
        };
        let dispatcher = Dispatcher::new(
            total,
            Arc::clone(&self.pickup_queue),
            self.config.pool,
            ctx,
            seed,
        );

        let feeder_handle = tokio::spawn(feeder.run());
        let dispatcher_handle = tokio::spawn(dispatcher.run());

        let released = feeder_handle.await.map_err(|e| {
            error!("Feeder task failed: {:?}", e);
            DispatchError::from(e)
        })?;
        let summary = dispatcher_handle.await.map_err(|e| {
            error!("Dispatcher task failed: {:?}", e);
            DispatchError::from(e)
        })??;

        let report = RunReport {
            policy: self.config.policy,
            seed,
            orders_processed: summary.processed,
            total_wait: self.wait_times.total().await,
            samples: self.wait_times.samples().await,
            deliveries: summary.deliveries,
        };
        info!(
            released,
            processed = report.orders_processed,
            samples = report.samples,
            "Dispatch simulation complete"
        );
        Ok(report)
    }
}
