//! Reads the order records a run starts from.
//!
//! The input is a JSON array of `{ "id", "name", "prepTime" }` objects. Order
//! is significant: the feeder releases orders in file order.

use crate::error::DispatchError;
use crate::model::Order;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Read and parse an orders file.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>, DispatchError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DispatchError::OrdersFile {
        path: path.to_path_buf(),
        source,
    })?;
    let orders = parse_orders(&raw)?;
    info!(path = %path.display(), count = orders.len(), "Loaded orders");
    Ok(orders)
}

/// Parse order records from a JSON string.
pub fn parse_orders(raw: &str) -> Result<Vec<Order>, DispatchError> {
    let orders: Vec<Order> = serde_json::from_str(raw)?;
    debug!(count = orders.len(), "Parsed order records");
    Ok(orders)
}

/// Order ids must be unique: under the matched policy a repeated id would
/// leave one courier waiting forever.
pub fn validate_orders(orders: &[Order]) -> Result<(), DispatchError> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !seen.insert(&order.id) {
            return Err(DispatchError::DuplicateOrderId(order.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;

    const SAMPLE: &str = r#"[
        { "id": "A", "name": "Soup", "prepTime": 5 },
        { "id": "B", "name": "Salad", "prepTime": 2 },
        { "id": "C", "name": "Pasta", "prepTime": 8 }
    ]"#;

    #[test]
    fn parses_records_in_file_order() {
        let orders = parse_orders(SAMPLE).expect("valid sample");
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0], Order::new("A", "Soup", 5));
        assert_eq!(orders[2].prep_time, 8);
    }

    #[test]
    fn missing_prep_time_is_a_parse_error() {
        let result = parse_orders(r#"[{ "id": "A", "name": "Soup" }]"#);
        assert!(matches!(result, Err(DispatchError::Parse(_))));
    }

    #[test]
    fn negative_prep_time_is_a_parse_error() {
        let result = parse_orders(r#"[{ "id": "A", "name": "Soup", "prepTime": -1 }]"#);
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let orders = vec![
            Order::new("A", "Soup", 5),
            Order::new("B", "Salad", 2),
            Order::new("A", "Soup again", 1),
        ];
        match validate_orders(&orders) {
            Err(DispatchError::DuplicateOrderId(id)) => assert_eq!(id, OrderId::from("A")),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
        assert!(validate_orders(&orders[..2]).is_ok());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_orders("/definitely/not/here.json").expect_err("file is missing");
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
