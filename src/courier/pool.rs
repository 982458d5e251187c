//! Execution strategies for couriers.
//!
//! [`CourierPool::Bounded`] runs couriers on a fixed set of worker tasks fed
//! through an mpsc job queue; this is the default. [`CourierPool::Unbounded`]
//! spawns one task per courier.
//!
//! Neither mode can deadlock as long as the dispatcher publishes an order
//! right after handing its courier to the pool: every courier a worker is
//! blocked on has already had its delivery opportunity published.
//!
//! Shutdown follows the channel-closure pattern: [`CourierPool::join`] drops
//! the job sender, workers see `recv()` return `None` once the queue drains,
//! and their handles are awaited.

use crate::config::{PoolMode, DEFAULT_JOB_QUEUE};
use crate::courier::{Courier, CourierContext};
use crate::error::DispatchError;
use crate::model::Delivery;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub enum CourierPool {
    Bounded {
        jobs: mpsc::Sender<Courier>,
        workers: Vec<JoinHandle<Vec<Delivery>>>,
    },
    Unbounded {
        ctx: CourierContext,
        couriers: Vec<JoinHandle<Delivery>>,
    },
}

impl CourierPool {
    /// Start the pool. Bounded workers are spawned immediately and idle until
    /// the first courier arrives.
    pub fn start(mode: PoolMode, ctx: CourierContext) -> Self {
        match mode {
            PoolMode::Bounded { workers } => {
                let (jobs, receiver) = mpsc::channel(DEFAULT_JOB_QUEUE);
                let receiver = Arc::new(Mutex::new(receiver));
                let workers = (0..workers)
                    .map(|worker| tokio::spawn(work(worker, Arc::clone(&receiver), ctx.clone())))
                    .collect::<Vec<_>>();
                info!(workers = workers.len(), "Courier pool started");
                CourierPool::Bounded { jobs, workers }
            }
            PoolMode::Unbounded => {
                info!("Courier pool started (one task per order)");
                CourierPool::Unbounded {
                    ctx,
                    couriers: Vec::new(),
                }
            }
        }
    }

    /// Hand a courier to the pool.
    pub async fn dispatch(&mut self, courier: Courier) -> Result<(), DispatchError> {
        match self {
            CourierPool::Bounded { jobs, .. } => jobs
                .send(courier)
                .await
                .map_err(|_| DispatchError::TaskFailed("courier workers stopped".to_string())),
            CourierPool::Unbounded { ctx, couriers } => {
                couriers.push(tokio::spawn(courier.run(ctx.clone())));
                Ok(())
            }
        }
    }

    /// Wait for every dispatched courier to finish and collect their deliveries.
    pub async fn join(self) -> Result<Vec<Delivery>, DispatchError> {
        let mut deliveries = Vec::new();
        match self {
            CourierPool::Bounded { jobs, workers } => {
                // Closing the queue lets idle workers exit once it drains.
                drop(jobs);
                for handle in workers {
                    deliveries.extend(handle.await?);
                }
            }
            CourierPool::Unbounded { couriers, .. } => {
                for handle in couriers {
                    deliveries.push(handle.await?);
                }
            }
        }
        Ok(deliveries)
    }
}

async fn work(
    worker: usize,
    jobs: Arc<Mutex<mpsc::Receiver<Courier>>>,
    ctx: CourierContext,
) -> Vec<Delivery> {
    let mut deliveries = Vec::new();
    loop {
        let next = jobs.lock().await.recv().await;
        let Some(courier) = next else {
            break;
        };
        debug!(worker, courier = courier.index(), order = %courier.order().id, "Courier picked up by worker");
        deliveries.push(courier.run(ctx.clone()).await);
    }
    debug!(worker, delivered = deliveries.len(), "Courier worker stopped");
    deliveries
}
