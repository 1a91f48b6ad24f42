//! Frame layouts of both buses: the Haltech broadcast identifiers the decoder
//! listens to, and the single status frame the Lotus cluster consumes.
pub mod dash;
pub mod haltech;
