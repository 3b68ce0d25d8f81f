//! Trait seams implemented outside the foundation crate.

pub mod sender;

pub use sender::{HttpMethod, ISender, OutboundRequest, SenderResponse};
