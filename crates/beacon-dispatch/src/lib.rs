//! # beacon-dispatch
//!
//! Multi-destination telemetry dispatch for the beacon pipeline runner:
//! anonymized identity derivation, merged-record assembly, and best-effort
//! delivery to the web-analytics tracker, the log collector, and the relay
//! backend. One sink's failure never prevents another sink's attempt, and no
//! failure ever reaches the instrumented pipeline step.

pub mod identity;
pub mod observe;
pub mod payload;
pub mod reporter;
pub mod sinks;
pub mod transport;

pub use observe::HttpLogLayer;
pub use reporter::TelemetryReporter;
pub use transport::HttpSender;
