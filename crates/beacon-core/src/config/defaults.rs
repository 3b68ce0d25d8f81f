//! Default values for telemetry configuration.

/// Upper bound on any single outbound request, in seconds.
pub const DEFAULT_MAX_REQUEST_DURATION_SECS: u64 = 5;

/// Repository URL reported when neither config nor the embedding build
/// supplies one.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/n/a";

/// Site identifier reported when neither config nor the embedding build
/// supplies one.
pub const DEFAULT_SITE_ID: &str = "3c91f4b8-55d2-4e61-9a0c-7f0d82c1b94a";

/// Web-analytics tracker base URL.
pub const DEFAULT_TRACKER_BASE_URL: &str = "https://webanalytics.beacon-ci.dev";

/// Tracker log endpoint path.
pub const DEFAULT_TRACKER_ENDPOINT: &str = "/tracker/log";

/// Log-collector event endpoint.
pub const DEFAULT_COLLECTOR_URL: &str =
    "https://collector.beacon-ci.dev/services/collector/event";

/// Index the collector stores pipeline events in.
pub const DEFAULT_COLLECTOR_INDEX: &str = "cicd_pipeline_mon";

/// Parsing configuration advertised to the collector.
pub const DEFAULT_COLLECTOR_SOURCETYPE: &str = "_json";

/// Authorization scheme placed before the collector token.
pub const DEFAULT_COLLECTOR_AUTH_SCHEME: &str = "Splunk";

/// Secondary collector endpoint.
pub const DEFAULT_RELAY_URL: &str = "https://relay.beacon-ci.dev/events";
