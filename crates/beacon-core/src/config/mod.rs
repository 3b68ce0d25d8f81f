//! Telemetry configuration.
//!
//! Sink endpoints, credentials, and envelope metadata are configuration
//! data with fallbacks in [`defaults`]; they are known to move between
//! environments.

pub mod defaults;

mod sink_config;
mod telemetry_config;

pub use sink_config::{CollectorConfig, RelayConfig, TrackerConfig};
pub use telemetry_config::TelemetryConfig;
