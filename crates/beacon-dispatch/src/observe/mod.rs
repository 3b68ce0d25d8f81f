//! Observability add-ons for the embedding runner.

mod http_layer;

pub use http_layer::HttpLogLayer;
