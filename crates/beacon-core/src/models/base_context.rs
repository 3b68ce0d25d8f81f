use serde::{Deserialize, Serialize};

/// Identity shared by every event reported from one pipeline run.
///
/// Built once per reporter, immutable afterwards. The two hashes are
/// snapshots from construction time; dispatch re-derives them per send so a
/// mid-process environment change is still picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseContext {
    /// Source repository of the pipeline library.
    pub url: String,
    /// Human-readable action name.
    pub action_name: String,
    /// Event type tag.
    pub event_type: String,
    /// Name of the pipeline step being instrumented.
    pub step_name: String,
    /// Site identifier of the receiving analytics service.
    pub site_id: String,
    /// Anonymized hash of the pipeline (job) URL.
    pub pipeline_url_hash: String,
    /// Anonymized hash of the URL of the specific build.
    pub build_url_hash: String,
}
