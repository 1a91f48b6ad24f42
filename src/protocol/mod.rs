//! High-level components of the bridge: bus frame layouts, transport seams,
//! and the decoder/encoder pair translating Haltech broadcasts for the Lotus
//! cluster.
pub mod bridge;
pub mod messages;
pub mod transport;
