//! The three dispatch targets.
//!
//! Each sink is attempted independently and maps every failure into a
//! [`SinkOutcome`](beacon_core::models::SinkOutcome) instead of an error, so
//! one sink can never take another down with it.

mod collector;
mod relay;
mod tracker;

pub use collector::dispatch_collector;
pub use relay::dispatch_relay;
pub use tracker::dispatch_tracker;

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const APPLICATION_JSON: &str = "application/json";
