use std::fmt::Display;
use std::str::FromStr;

/// How couriers are paired with ready orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryPolicy {
    /// Each courier waits for the one order it was dispatched for.
    #[default]
    Matched,
    /// Couriers take whichever ready order is at the front of the shelf.
    Fifo,
}

impl DeliveryPolicy {
    /// Label used by the dispatcher in its trace lines.
    pub fn taker_label(self) -> &'static str {
        match self {
            DeliveryPolicy::Matched => "OrderTakerMATCHED",
            DeliveryPolicy::Fifo => "OrderTakerFIFO",
        }
    }

    /// Label prefix used by couriers in their trace lines.
    pub fn courier_label(self) -> &'static str {
        match self {
            DeliveryPolicy::Matched => "CourierMatched",
            DeliveryPolicy::Fifo => "CourierFIFO",
        }
    }
}

impl Display for DeliveryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryPolicy::Matched => f.write_str("matched"),
            DeliveryPolicy::Fifo => f.write_str("fifo"),
        }
    }
}

impl FromStr for DeliveryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "matched" => Ok(DeliveryPolicy::Matched),
            "fifo" => Ok(DeliveryPolicy::Fifo),
            other => Err(format!("unknown delivery policy: {other} (expected matched or fifo)")),
        }
    }
}
