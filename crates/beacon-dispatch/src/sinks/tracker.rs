//! Web-analytics tracker sink: the merged record as url-encoded query
//! pairs on a GET request. The response body carries nothing of interest
//! and is ignored.

use beacon_core::config::TrackerConfig;
use beacon_core::models::{BaseContext, SinkOutcome, UsageRecord};
use beacon_core::traits::{HttpMethod, ISender, OutboundRequest};

use crate::payload;

pub fn dispatch_tracker(
    sender: &dyn ISender,
    config: &TrackerConfig,
    base: &BaseContext,
    record: &UsageRecord,
) -> SinkOutcome {
    if !config.enabled {
        return SinkOutcome::Skipped {
            reason: "tracker sink disabled".to_string(),
        };
    }

    let url = match payload::tracker_url(config, base, record) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(sink = "tracker", "dropping telemetry event: {e}");
            return SinkOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    tracing::debug!(sink = "tracker", request = %url, "sending telemetry data");

    let request = OutboundRequest {
        method: HttpMethod::Get,
        url: url.into(),
        body: None,
        headers: Vec::new(),
    };

    match sender.send(&request) {
        Ok(_) => SinkOutcome::Delivered,
        Err(e) => {
            tracing::warn!(sink = "tracker", "telemetry send failed: {e}");
            SinkOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
