//! Error types for the beacon workspace.
//!
//! Telemetry is strictly best-effort: nothing in this module ever crosses
//! the boundary to the instrumented pipeline step. Errors exist so the
//! dispatch layer can classify failures before absorbing them.

mod dispatch_error;

pub use dispatch_error::DispatchError;

/// Umbrella error for all beacon crates.
#[derive(Debug, thiserror::Error)]
pub enum BeaconError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Result alias used across the workspace.
pub type BeaconResult<T> = Result<T, BeaconError>;
