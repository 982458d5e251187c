//! Plain data types that flow between the feeder, the dispatcher and the couriers.

pub mod delivery;
pub mod order;
pub mod policy;

pub use delivery::*;
pub use order::*;
pub use policy::*;
