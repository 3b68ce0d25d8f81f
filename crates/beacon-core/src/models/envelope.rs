use serde::{Deserialize, Serialize};

use super::UsageRecord;

/// Nested envelope the log collector expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorEnvelope {
    /// Origin host. Carries the pipeline-URL hash rather than a hostname.
    pub host: String,
    /// Collector index to store the event in.
    pub index: String,
    /// Collector parsing configuration.
    pub sourcetype: String,
    /// The full merged record.
    pub event: UsageRecord,
}
