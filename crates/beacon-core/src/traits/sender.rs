use crate::errors::BeaconResult;

/// HTTP methods the dispatch pipeline issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// One outbound request, fully assembled by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Request body; absent for query-string sinks.
    pub body: Option<String>,
    /// Header name/value pairs, auth included.
    pub headers: Vec<(String, String)>,
}

/// What came back from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderResponse {
    pub status: u16,
    pub body: String,
}

impl SenderResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The sole transport abstraction. Every sink, and the HTTP log layer, goes
/// through one shared implementation of this trait.
pub trait ISender: Send + Sync {
    /// Issue a single request. One attempt, no retry; the implementation
    /// enforces the configured request-duration ceiling.
    fn send(&self, request: &OutboundRequest) -> BeaconResult<SenderResponse>;
}
