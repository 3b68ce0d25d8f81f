/// Telemetry dispatch errors.
///
/// Configuration absence is not represented here: missing env vars and
/// build constants resolve to defaults and are never an error.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("protocol error: {reason}")]
    Protocol { reason: String },

    #[error("encoding error: {reason}")]
    Encoding { reason: String },
}
