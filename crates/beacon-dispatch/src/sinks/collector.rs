//! Log-collector sink: the merged record inside a `{host, index,
//! sourcetype, event}` envelope, POSTed with token auth.

use beacon_core::config::CollectorConfig;
use beacon_core::models::{SinkOutcome, UsageRecord};
use beacon_core::traits::{HttpMethod, ISender, OutboundRequest};

use super::{APPLICATION_JSON, CONTENT_TYPE};
use crate::payload;

pub fn dispatch_collector(
    sender: &dyn ISender,
    config: &CollectorConfig,
    record: &UsageRecord,
) -> SinkOutcome {
    if !config.enabled {
        return SinkOutcome::Skipped {
            reason: "collector sink disabled".to_string(),
        };
    }
    let Some(token) = &config.token else {
        return SinkOutcome::Skipped {
            reason: "no collector token configured".to_string(),
        };
    };

    let envelope = payload::collector_envelope(config, record.clone());
    let body = match serde_json::to_string(&envelope) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(sink = "collector", "telemetry encoding failed: {e}");
            return SinkOutcome::Failed {
                reason: format!("encoding error: {e}"),
            };
        }
    };

    let request = OutboundRequest {
        method: HttpMethod::Post,
        url: config.url.clone(),
        body: Some(body),
        headers: vec![
            (
                "Authorization".to_string(),
                format!("{} {}", config.auth_scheme, token),
            ),
            (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
        ],
    };

    match sender.send(&request) {
        Ok(response) if response.is_success() => {
            tracing::debug!(
                sink = "collector",
                status = response.status,
                body = %response.body,
                "collector acknowledged event"
            );
            SinkOutcome::Delivered
        }
        Ok(response) => {
            // The collector answered but refused the event.
            tracing::warn!(
                sink = "collector",
                status = response.status,
                "collector rejected event"
            );
            SinkOutcome::Failed {
                reason: format!("collector rejected event: HTTP {}", response.status),
            }
        }
        Err(e) => {
            tracing::warn!(sink = "collector", "telemetry send failed: {e}");
            SinkOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
