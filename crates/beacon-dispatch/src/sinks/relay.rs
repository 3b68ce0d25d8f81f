//! Secondary collector sink: the bare merged record POSTed as JSON to an
//! alternate backend.

use beacon_core::config::RelayConfig;
use beacon_core::models::{SinkOutcome, UsageRecord};
use beacon_core::traits::{HttpMethod, ISender, OutboundRequest};

use super::{APPLICATION_JSON, CONTENT_TYPE};

pub fn dispatch_relay(
    sender: &dyn ISender,
    config: &RelayConfig,
    record: &UsageRecord,
) -> SinkOutcome {
    if !config.enabled {
        return SinkOutcome::Skipped {
            reason: "relay sink disabled".to_string(),
        };
    }

    let body = match serde_json::to_string(record) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(sink = "relay", "telemetry encoding failed: {e}");
            return SinkOutcome::Failed {
                reason: format!("encoding error: {e}"),
            };
        }
    };

    let request = OutboundRequest {
        method: HttpMethod::Post,
        url: config.url.clone(),
        body: Some(body),
        headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
    };

    match sender.send(&request) {
        Ok(response) if response.is_success() => SinkOutcome::Delivered,
        Ok(response) => {
            tracing::warn!(sink = "relay", status = response.status, "relay rejected event");
            SinkOutcome::Failed {
                reason: format!("relay rejected event: HTTP {}", response.status),
            }
        }
        Err(e) => {
            tracing::warn!(sink = "relay", "telemetry send failed: {e}");
            SinkOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
