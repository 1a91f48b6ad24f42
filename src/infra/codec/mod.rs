//! Byte-level codec helpers. `fields` reads values out of a payload without
//! ever crossing the frame's declared length; `units` converts raw source
//! values into engineering units and dashboard bytes.
pub mod fields;
pub mod units;
