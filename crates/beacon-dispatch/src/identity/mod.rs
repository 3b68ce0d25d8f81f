//! Anonymized identity for a pipeline run.
//!
//! CI-environment URLs may carry internal hostnames; only their SHA-1
//! digests ever leave the process. The digest is stable, so one job or
//! build can be correlated across events without exposing the URL itself.

use sha1::{Digest, Sha1};

use beacon_core::config::defaults;
use beacon_core::constants::{
    ACTION_NAME, BUILD_REPOSITORY_URL, BUILD_SITE_ID, BUILD_URL_ENV, EVENT_TYPE, JOB_URL_ENV,
    NOT_AVAILABLE,
};
use beacon_core::models::BaseContext;
use beacon_core::TelemetryConfig;

/// Digest a value as 40 lowercase hex characters, or the `"n/a"` sentinel
/// when the value is empty.
pub fn sha1_or_na(input: &str) -> String {
    if input.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:x}", Sha1::digest(input.as_bytes()))
}

/// Hash of the pipeline (job) URL, read fresh from the environment.
pub fn pipeline_url_hash() -> String {
    sha1_or_na(&env_value(JOB_URL_ENV))
}

/// Hash of the URL of the specific build, read fresh from the environment.
pub fn build_url_hash() -> String {
    sha1_or_na(&env_value(BUILD_URL_ENV))
}

fn env_value(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Reported repository URL: config override, then the build-injected
/// constant, then the hardcoded default.
pub fn resolve_repository_url(config: &TelemetryConfig) -> String {
    config
        .repository_url
        .clone()
        .or_else(|| BUILD_REPOSITORY_URL.map(str::to_string))
        .unwrap_or_else(|| defaults::DEFAULT_REPOSITORY_URL.to_string())
}

/// Reported site identifier, same resolution order as the repository URL.
pub fn resolve_site_id(config: &TelemetryConfig) -> String {
    config
        .site_id
        .clone()
        .or_else(|| BUILD_SITE_ID.map(str::to_string))
        .unwrap_or_else(|| defaults::DEFAULT_SITE_ID.to_string())
}

/// Assemble the immutable base context for this pipeline run.
pub fn build_base_context(config: &TelemetryConfig, step_name: &str) -> BaseContext {
    BaseContext {
        url: resolve_repository_url(config),
        action_name: ACTION_NAME.to_string(),
        event_type: EVENT_TYPE.to_string(),
        step_name: step_name.to_string(),
        site_id: resolve_site_id(config),
        pipeline_url_hash: pipeline_url_hash(),
        build_url_hash: build_url_hash(),
    }
}
