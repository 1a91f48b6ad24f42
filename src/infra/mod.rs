//! Infrastructure shared by the bridge components: payload field access and
//! engineering unit conversions.
pub mod codec;
