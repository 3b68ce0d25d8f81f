//! Shared test double for the transport seam.

#![allow(dead_code)]

use std::sync::Mutex;

use beacon_core::errors::DispatchError;
use beacon_core::traits::{ISender, OutboundRequest, SenderResponse};
use beacon_core::BeaconResult;

/// Records every attempted request; optionally fails those whose URL
/// contains a marker, or answers with a fixed non-success status.
pub struct MockSender {
    requests: Mutex<Vec<OutboundRequest>>,
    fail_url_containing: Option<String>,
    status: u16,
}

impl MockSender {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_url_containing: None,
            status: 200,
        }
    }

    /// Fail every request whose URL contains `marker`. An empty marker
    /// fails everything.
    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_url_containing: Some(marker.to_string()),
            ..Self::new()
        }
    }

    /// Answer every request with the given status code.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::new()
        }
    }

    /// Everything attempted so far, failures included.
    pub fn recorded(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ISender for MockSender {
    fn send(&self, request: &OutboundRequest) -> BeaconResult<SenderResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(marker) = &self.fail_url_containing {
            if request.url.contains(marker.as_str()) {
                return Err(DispatchError::Transport {
                    reason: "connection refused".to_string(),
                }
                .into());
            }
        }

        Ok(SenderResponse {
            status: self.status,
            body: r#"{"text":"Success"}"#.to_string(),
        })
    }
}
