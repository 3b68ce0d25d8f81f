//! Wire-shape guarantees for the merged record and collector envelope.
//!
//! Receivers parse these field names verbatim; a rename here is a schema
//! break on their side.

use std::collections::BTreeMap;

use beacon_core::{CollectorEnvelope, UsageRecord};

fn sample_record() -> UsageRecord {
    let mut custom = BTreeMap::new();
    custom.insert("buildTool".to_string(), "maven".to_string());

    UsageRecord {
        pipeline_url_hash: "5b42c54ab02c9c2a6652903ef0e18efa84e59ced".to_string(),
        build_url_hash: "71bd81e7918c1e4761b2f6470759608da41035fe".to_string(),
        step_name: "build".to_string(),
        stage_name: "central-build".to_string(),
        exit_code: "1".to_string(),
        duration: "4231".to_string(),
        error_code: "1".to_string(),
        error_category: "infrastructure".to_string(),
        custom,
    }
}

#[test]
fn record_serializes_under_fixed_wire_names() {
    let value = serde_json::to_value(sample_record()).expect("record should encode");
    let object = value.as_object().expect("record should be a JSON object");

    for key in [
        "pipelineURLHash",
        "buildURLHash",
        "stepName",
        "stageName",
        "exitCode",
        "duration",
        "errorCode",
        "errorCategory",
        "buildTool",
    ] {
        assert!(object.contains_key(key), "missing wire field {key}");
    }
    assert_eq!(object["stepName"], "build");
    assert_eq!(object["exitCode"], "1");
    assert_eq!(object["buildTool"], "maven");
}

#[test]
fn empty_record_still_serializes_every_field() {
    let value = serde_json::to_value(UsageRecord::default()).expect("record should encode");
    let object = value.as_object().expect("record should be a JSON object");

    // The full record shape goes out even when nothing is populated.
    assert_eq!(object.len(), 8);
    assert_eq!(object["duration"], "");
}

#[test]
fn collector_envelope_round_trips_unchanged() {
    let envelope = CollectorEnvelope {
        host: "5b42c54ab02c9c2a6652903ef0e18efa84e59ced".to_string(),
        index: "cicd_pipeline_mon".to_string(),
        sourcetype: "_json".to_string(),
        event: sample_record(),
    };

    let encoded = serde_json::to_string(&envelope).expect("envelope should encode");
    let decoded: CollectorEnvelope =
        serde_json::from_str(&encoded).expect("envelope should decode");

    assert_eq!(decoded, envelope);

    let value: serde_json::Value = serde_json::from_str(&encoded).expect("envelope is JSON");
    assert_eq!(value["event"]["pipelineURLHash"], envelope.host);
    assert_eq!(value["sourcetype"], "_json");
}
