//! Abstraction traits used by the bridge (CAN bus, clock, tick timer, and
//! outbound queue).
pub mod bridge_timer;
pub mod can_bus;
pub mod clock;
pub mod outbound_queue;
