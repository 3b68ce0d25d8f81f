use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The merged record: run identity plus step outcome, under the exact field
/// names the receivers expect. Serialized in full on every sink, never as a
/// partial projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    #[serde(rename = "pipelineURLHash")]
    pub pipeline_url_hash: String,
    #[serde(rename = "buildURLHash")]
    pub build_url_hash: String,
    #[serde(rename = "stepName")]
    pub step_name: String,
    #[serde(rename = "stageName")]
    pub stage_name: String,
    /// Mirrors the error code; receivers expect both fields.
    #[serde(rename = "exitCode")]
    pub exit_code: String,
    pub duration: String,
    #[serde(rename = "errorCode")]
    pub error_code: String,
    #[serde(rename = "errorCategory")]
    pub error_category: String,
    /// Free-form additional fields, inlined into the record.
    #[serde(flatten)]
    pub custom: BTreeMap<String, String>,
}
