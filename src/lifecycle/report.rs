use crate::model::{Delivery, DeliveryPolicy};
use std::fmt::Display;
use std::time::Duration;

/// Final statistics of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub policy: DeliveryPolicy,
    /// Seed the courier arrival delays were drawn from.
    pub seed: u64,
    pub orders_processed: usize,
    /// Sum of all food wait samples. Always zero under the fifo policy.
    pub total_wait: Duration,
    /// Number of wait samples recorded.
    pub samples: usize,
    pub deliveries: Vec<Delivery>,
}

impl RunReport {
    pub fn total_wait_secs(&self) -> f64 {
        self.total_wait.as_secs_f64()
    }

    pub fn total_wait_ms(&self) -> f64 {
        self.total_wait.as_secs_f64() * 1000.0
    }

    /// Average food wait per processed order, in milliseconds. Zero when no
    /// order was processed.
    pub fn average_wait_ms(&self) -> f64 {
        if self.orders_processed == 0 {
            return 0.0;
        }
        self.total_wait_ms() / self.orders_processed as f64
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Total Number of orders processed      = {}",
            self.orders_processed
        )?;
        writeln!(
            f,
            "Total food wait time across orders    = {}seconds",
            self.total_wait_secs()
        )?;
        write!(
            f,
            "Total average wait time across orders = {}ms",
            self.average_wait_ms()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(orders_processed: usize, total_wait: Duration) -> RunReport {
        RunReport {
            policy: DeliveryPolicy::Matched,
            seed: 0,
            orders_processed,
            total_wait,
            samples: orders_processed,
            deliveries: Vec::new(),
        }
    }

    #[test]
    fn average_is_total_over_orders() {
        let report = report(3, Duration::from_millis(9000));
        assert_eq!(report.total_wait_secs(), 9.0);
        assert!((report.average_wait_ms() - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn average_of_empty_run_is_zero() {
        assert_eq!(report(0, Duration::ZERO).average_wait_ms(), 0.0);
    }

    #[test]
    fn renders_three_summary_lines() {
        let text = report(4, Duration::from_secs(2)).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Total Number of orders processed      = 4");
        assert_eq!(lines[1], "Total food wait time across orders    = 2seconds");
        assert_eq!(lines[2], "Total average wait time across orders = 500ms");
    }
}
