//! Blocking HTTP sender with a bounded request duration.

use std::time::Duration;

use beacon_core::errors::{BeaconResult, DispatchError};
use beacon_core::traits::{HttpMethod, ISender, OutboundRequest, SenderResponse};

/// Convert a reqwest failure into a transport error.
fn transport_err(reason: String) -> beacon_core::BeaconError {
    DispatchError::Transport { reason }.into()
}

/// The production `ISender`.
///
/// One attempt per request, no retry and no backoff; the request-duration
/// ceiling is enforced by the underlying client so a stalled receiver can
/// never block a pipeline step indefinitely.
#[derive(Debug)]
pub struct HttpSender {
    client: reqwest::blocking::Client,
}

impl HttpSender {
    /// Build a sender whose requests are bounded by `max_request_duration`.
    pub fn new(max_request_duration: Duration) -> BeaconResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(max_request_duration)
            .gzip(true)
            .build()
            .map_err(|e| transport_err(e.to_string()))?;

        Ok(Self { client })
    }
}

impl ISender for HttpSender {
    fn send(&self, request: &OutboundRequest) -> BeaconResult<SenderResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().map_err(|e| transport_err(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();

        Ok(SenderResponse { status, body })
    }
}
