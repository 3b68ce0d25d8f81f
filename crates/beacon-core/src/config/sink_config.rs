use serde::{Deserialize, Serialize};

use super::defaults;

/// Web-analytics tracker sink (query-string GET).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Whether this sink is attempted at all.
    pub enabled: bool,
    /// Base URL of the tracker service.
    pub base_url: String,
    /// Endpoint path appended to the base URL.
    pub endpoint: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: defaults::DEFAULT_TRACKER_BASE_URL.to_string(),
            endpoint: defaults::DEFAULT_TRACKER_ENDPOINT.to_string(),
        }
    }
}

/// Log-collector sink (JSON POST with token auth).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Whether this sink is attempted at all.
    pub enabled: bool,
    /// Full event-collector URL.
    pub url: String,
    /// Index the collector stores events in.
    pub index: String,
    /// Parsing configuration advertised to the collector.
    pub sourcetype: String,
    /// Authorization scheme placed before the token.
    pub auth_scheme: String,
    /// Collector token. The sink is skipped when unset.
    pub token: Option<String>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: defaults::DEFAULT_COLLECTOR_URL.to_string(),
            index: defaults::DEFAULT_COLLECTOR_INDEX.to_string(),
            sourcetype: defaults::DEFAULT_COLLECTOR_SOURCETYPE.to_string(),
            auth_scheme: defaults::DEFAULT_COLLECTOR_AUTH_SCHEME.to_string(),
            token: None,
        }
    }
}

/// Secondary collector sink (JSON POST, alternate backend).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Whether this sink is attempted at all.
    pub enabled: bool,
    /// Endpoint the merged record is posted to.
    pub url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: defaults::DEFAULT_RELAY_URL.to_string(),
        }
    }
}
