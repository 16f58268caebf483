//! Domain layer: the `Order` entity and the ports the application depends on.

pub mod order;
pub mod ports;
