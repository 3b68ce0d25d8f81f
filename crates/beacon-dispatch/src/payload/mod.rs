//! Payload assembly: the merged record and its sink-specific shapes.

use url::Url;

use beacon_core::config::{CollectorConfig, TrackerConfig};
use beacon_core::errors::DispatchError;
use beacon_core::models::{BaseContext, CollectorEnvelope, CustomData, UsageRecord};

use crate::identity;

/// Merge the base context with per-step outcome data.
///
/// The two URL hashes are re-derived from the environment on every call so
/// a mid-process change is still picked up.
pub fn assemble_record(base: &BaseContext, custom: &CustomData) -> UsageRecord {
    let error_code = custom.error_code.clone().unwrap_or_default();

    UsageRecord {
        pipeline_url_hash: identity::pipeline_url_hash(),
        build_url_hash: identity::build_url_hash(),
        step_name: base.step_name.clone(),
        stage_name: custom.stage_name.clone().unwrap_or_default(),
        exit_code: error_code.clone(),
        duration: custom.duration.clone().unwrap_or_default(),
        error_code,
        error_category: custom.error_category.clone().unwrap_or_default(),
        custom: custom.custom.clone(),
    }
}

/// Build the tracker request URL: base identity plus the merged record as
/// url-encoded query pairs.
pub fn tracker_url(
    config: &TrackerConfig,
    base: &BaseContext,
    record: &UsageRecord,
) -> Result<Url, DispatchError> {
    let mut url = Url::parse(&config.base_url).map_err(|e| DispatchError::Encoding {
        reason: format!("tracker base url {:?}: {e}", config.base_url),
    })?;
    url.set_path(&config.endpoint);

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("action_name", &base.action_name);
        pairs.append_pair("event_type", &base.event_type);
        pairs.append_pair("site_id", &base.site_id);
        pairs.append_pair("url", &base.url);
        pairs.append_pair("step_name", &record.step_name);
        pairs.append_pair("stage_name", &record.stage_name);
        pairs.append_pair("pipeline_url_hash", &record.pipeline_url_hash);
        pairs.append_pair("build_url_hash", &record.build_url_hash);
        pairs.append_pair("exit_code", &record.exit_code);
        pairs.append_pair("duration", &record.duration);
        pairs.append_pair("error_code", &record.error_code);
        pairs.append_pair("error_category", &record.error_category);
        for (key, value) in &record.custom {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

/// Wrap the merged record in the envelope the log collector expects.
pub fn collector_envelope(config: &CollectorConfig, record: UsageRecord) -> CollectorEnvelope {
    CollectorEnvelope {
        host: record.pipeline_url_hash.clone(),
        index: config.index.clone(),
        sourcetype: config.sourcetype.clone(),
        event: record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::constants::{ACTION_NAME, EVENT_TYPE};
    use beacon_core::TelemetryConfig;

    fn base() -> BaseContext {
        identity::build_base_context(&TelemetryConfig::default(), "build")
    }

    #[test]
    fn merged_record_carries_step_and_outcome() {
        let custom = CustomData {
            duration: Some("4231".to_string()),
            error_code: Some("1".to_string()),
            error_category: Some("infrastructure".to_string()),
            ..CustomData::default()
        };

        let record = assemble_record(&base(), &custom);

        assert_eq!(record.step_name, "build");
        assert_eq!(record.duration, "4231");
        assert_eq!(record.error_code, "1");
        // The wire carries the error code in both positions.
        assert_eq!(record.exit_code, record.error_code);
        assert!(!record.pipeline_url_hash.is_empty());
        assert!(!record.build_url_hash.is_empty());
    }

    #[test]
    fn tracker_url_encodes_identity_and_record() {
        let config = TrackerConfig::default();
        let record = assemble_record(&base(), &CustomData::default());

        let url = tracker_url(&config, &base(), &record).expect("url should build");

        assert_eq!(url.path(), "/tracker/log");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let value_of = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        assert_eq!(value_of("action_name").as_deref(), Some(ACTION_NAME));
        assert_eq!(value_of("event_type").as_deref(), Some(EVENT_TYPE));
        assert_eq!(value_of("step_name").as_deref(), Some("build"));
        assert!(value_of("pipeline_url_hash").is_some());
        assert!(value_of("build_url_hash").is_some());
    }

    #[test]
    fn malformed_tracker_base_url_is_an_encoding_error() {
        let config = TrackerConfig {
            base_url: "not a url".to_string(),
            ..TrackerConfig::default()
        };
        let record = UsageRecord::default();

        let err = tracker_url(&config, &base(), &record).unwrap_err();
        assert!(matches!(err, DispatchError::Encoding { .. }));
    }

    #[test]
    fn envelope_host_is_the_pipeline_hash() {
        let config = CollectorConfig::default();
        let record = assemble_record(&base(), &CustomData::default());
        let expected_host = record.pipeline_url_hash.clone();

        let envelope = collector_envelope(&config, record);

        assert_eq!(envelope.host, expected_host);
        assert_eq!(envelope.index, config.index);
        assert_eq!(envelope.sourcetype, config.sourcetype);
        assert_eq!(envelope.event.step_name, "build");
    }
}
