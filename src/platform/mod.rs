//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (combo timeout clock)

pub mod time;

pub use time::{Clock, ManualClock};
