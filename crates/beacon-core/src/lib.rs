//! # beacon-core
//!
//! Foundation crate for the beacon telemetry system.
//! Defines all types, traits, errors, config, and constants.
//! The dispatch crate builds on top of this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TelemetryConfig;
pub use errors::{BeaconError, BeaconResult};
pub use models::{
    BaseContext, CollectorEnvelope, CustomData, DispatchReport, SinkKind, SinkOutcome, UsageRecord,
};
pub use traits::{HttpMethod, ISender, OutboundRequest, SenderResponse};
