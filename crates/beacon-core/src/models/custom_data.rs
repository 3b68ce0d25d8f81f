use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-step outcome supplied by the caller of `send`.
///
/// Read-only to the telemetry pipeline. Unset fields reach the wire as
/// empty strings so receivers always see the full record shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomData {
    /// Stage the step ran in, if the runner groups steps into stages.
    pub stage_name: Option<String>,
    /// Step duration in milliseconds, pre-rendered by the runner.
    pub duration: Option<String>,
    /// Exit/error code of the step.
    pub error_code: Option<String>,
    /// Coarse error category (build, infrastructure, compliance, ...).
    pub error_category: Option<String>,
    /// Free-form additional fields.
    #[serde(flatten)]
    pub custom: BTreeMap<String, String>,
}
