//! Transport layer: the reqwest-backed sender behind the `ISender` seam.

mod http_sender;

pub use http_sender::HttpSender;
