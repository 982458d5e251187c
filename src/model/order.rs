use serde::Deserialize;
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a food order released into the simulation.
///
/// Orders are created once by the loader and never mutated afterwards. They
/// are cloned into every task that needs them; nothing about an order is
/// shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    /// Kitchen preparation time. Carried through the run but not used by the
    /// coordination logic.
    pub prep_time: u32,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier across the run
    /// * `name` - Descriptive dish name
    /// * `prep_time` - Preparation time reported by the kitchen
    pub fn new(id: impl Into<OrderId>, name: impl Into<String>, prep_time: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prep_time,
        }
    }
}
