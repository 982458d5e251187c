//! Matched-policy readiness registry.

use crate::model::OrderId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tracing::warn;

/// Shared map from order id to the instant the dispatcher marked it ready.
///
/// Each id is published once by the dispatcher and collected once by the
/// courier carrying that id; no other courier ever removes it. Publication
/// wakes every waiting courier and each one re-checks for its own id.
#[derive(Debug, Default)]
pub struct ReadinessBoard {
    ready: Mutex<HashMap<OrderId, Duration>>,
    published: Notify,
}

impl ReadinessBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` ready at `ready_at` and wake all waiters.
    pub async fn publish(&self, id: OrderId, ready_at: Duration) {
        {
            let mut ready = self.ready.lock().await;
            if let Some(previous) = ready.insert(id.clone(), ready_at) {
                // Ids are validated unique before a run starts.
                warn!(%id, ?previous, "Order published twice");
            }
        }
        self.published.notify_waiters();
    }

    /// Block until `id` is ready, remove it and return its ready timestamp.
    pub async fn collect(&self, id: &OrderId) -> Duration {
        loop {
            let published = self.published.notified();
            tokio::pin!(published);
            published.as_mut().enable();

            if let Some(ready_at) = self.ready.lock().await.remove(id) {
                return ready_at;
            }
            published.await;
        }
    }

    /// Number of published orders not yet collected.
    pub async fn len(&self) -> usize {
        self.ready.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ready.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn collect_returns_published_timestamp_and_removes_entry() {
        let board = ReadinessBoard::new();
        board
            .publish(OrderId::from("A"), Duration::from_millis(42))
            .await;
        assert_eq!(board.len().await, 1);

        let ready_at = board.collect(&OrderId::from("A")).await;

        assert_eq!(ready_at, Duration::from_millis(42));
        assert!(board.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn waiters_only_take_their_own_id() {
        let board = Arc::new(ReadinessBoard::new());
        let ids = ["A", "B", "C", "D"];

        let mut handles = Vec::new();
        for id in ids {
            let board = Arc::clone(&board);
            handles.push(tokio::spawn(async move {
                let ready_at = board.collect(&OrderId::from(id)).await;
                (id, ready_at)
            }));
        }

        // Publish in reverse so every broadcast wakes couriers it is not for.
        for (offset, id) in ids.iter().rev().enumerate() {
            tokio::task::yield_now().await;
            board
                .publish(OrderId::from(*id), Duration::from_millis(offset as u64))
                .await;
        }

        for handle in handles {
            let (id, ready_at) =
                tokio::time::timeout(Duration::from_secs(1), handle)
                    .await
                    .expect("courier never saw its order")
                    .expect("courier task panicked");
            let expected = ids.len() - 1 - ids.iter().position(|i| *i == id).unwrap_or(0);
            assert_eq!(ready_at, Duration::from_millis(expected as u64));
        }
        assert!(board.is_empty().await);
    }

    #[tokio::test]
    async fn publish_before_wait_is_not_lost() {
        let board = ReadinessBoard::new();
        board.publish(OrderId::from("early"), Duration::ZERO).await;
        let ready_at = tokio::time::timeout(
            Duration::from_secs(1),
            board.collect(&OrderId::from("early")),
        )
        .await
        .expect("lost publication");
        assert_eq!(ready_at, Duration::ZERO);
    }
}
