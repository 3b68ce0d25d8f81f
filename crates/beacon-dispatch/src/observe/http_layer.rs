//! HTTP forwarding of debug log events.
//!
//! A `tracing-subscriber` layer that mirrors debug-level events, augmented
//! with the anonymized URL hashes, to the relay backend for pipeline-run
//! monitoring. Best-effort: a failed forward is dropped, never surfaced.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use beacon_core::traits::{HttpMethod, ISender, OutboundRequest};

thread_local! {
    // Set while a forward is in flight. The transport logs too; without
    // this guard its events would recurse into another forward.
    static FORWARDING: Cell<bool> = const { Cell::new(false) };
}

/// Forwards debug events as JSON objects to a single HTTP endpoint.
pub struct HttpLogLayer {
    sender: Arc<dyn ISender>,
    url: String,
    pipeline_url_hash: String,
    build_url_hash: String,
}

impl HttpLogLayer {
    pub fn new(
        sender: Arc<dyn ISender>,
        url: impl Into<String>,
        pipeline_url_hash: impl Into<String>,
        build_url_hash: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            url: url.into(),
            pipeline_url_hash: pipeline_url_hash.into(),
            build_url_hash: build_url_hash.into(),
        }
    }

    fn forward(&self, mut fields: BTreeMap<String, String>) {
        fields.insert(
            "pipelineURLHash".to_string(),
            self.pipeline_url_hash.clone(),
        );
        fields.insert("buildURLHash".to_string(), self.build_url_hash.clone());

        let Ok(body) = serde_json::to_string(&fields) else {
            return;
        };

        let request = OutboundRequest {
            method: HttpMethod::Post,
            url: self.url.clone(),
            body: Some(body),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        };

        // A transport error and a refused event are both recoverable: the
        // entry is dropped and the pipeline keeps running.
        match self.sender.send(&request) {
            Ok(response) if response.is_success() => {}
            Ok(response) => {
                tracing::debug!(status = response.status, "log forward rejected");
            }
            Err(e) => {
                tracing::debug!("log forward failed: {e}");
            }
        }
    }
}

impl<S: Subscriber> Layer<S> for HttpLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::DEBUG {
            return;
        }
        if FORWARDING.with(|f| f.get()) {
            return;
        }

        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        FORWARDING.with(|f| f.set(true));
        self.forward(collector.fields);
        FORWARDING.with(|f| f.set(false));
    }
}

/// Collects an event's structured fields into string form.
#[derive(Default)]
struct FieldCollector {
    fields: BTreeMap<String, String>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{value:?}"));
    }
}
