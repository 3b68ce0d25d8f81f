use serde::{Deserialize, Serialize};

use super::defaults;
use super::{CollectorConfig, RelayConfig, TrackerConfig};

/// Top-level telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Disable all reporting. No identity is derived and no transport is
    /// constructed when set.
    pub disabled: bool,
    /// Upper bound on any single outbound request, in seconds.
    pub max_request_duration_secs: u64,
    /// Source repository URL override. Falls back to the build-injected
    /// constant, then the hardcoded default.
    pub repository_url: Option<String>,
    /// Site identifier override. Same resolution order as `repository_url`.
    pub site_id: Option<String>,
    /// Web-analytics tracker sink.
    pub tracker: TrackerConfig,
    /// Log-collector sink.
    pub collector: CollectorConfig,
    /// Secondary collector sink.
    pub relay: RelayConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            max_request_duration_secs: defaults::DEFAULT_MAX_REQUEST_DURATION_SECS,
            repository_url: None,
            site_id: None,
            tracker: TrackerConfig::default(),
            collector: CollectorConfig::default(),
            relay: RelayConfig::default(),
        }
    }
}

impl TelemetryConfig {
    /// Configuration with everything defaulted except the disabled flag,
    /// mirroring the embedding runner's usual call site.
    pub fn new(disabled: bool) -> Self {
        Self {
            disabled,
            ..Self::default()
        }
    }
}
