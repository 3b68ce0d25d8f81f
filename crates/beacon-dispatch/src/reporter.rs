//! The caller-owned telemetry reporter.
//!
//! Replaces the draft design's process-wide mutable state: the reporter is
//! owned by the embedding runner, immutable after construction, and safe to
//! share across threads.

use std::sync::Arc;
use std::time::Duration;

use beacon_core::models::{BaseContext, CustomData, DispatchReport, SinkKind, SinkOutcome};
use beacon_core::traits::ISender;
use beacon_core::TelemetryConfig;

use crate::identity;
use crate::payload;
use crate::sinks;
use crate::transport::HttpSender;

const ALL_SINKS: [SinkKind; 3] = [SinkKind::Tracker, SinkKind::Collector, SinkKind::Relay];

/// Reports anonymized usage data for one pipeline run.
pub struct TelemetryReporter {
    config: TelemetryConfig,
    base: Option<BaseContext>,
    sender: Option<Arc<dyn ISender>>,
}

impl TelemetryReporter {
    /// Initialize reporting for one pipeline step.
    ///
    /// With `config.disabled` set, no identity is derived and no transport
    /// is constructed; every later [`send`](Self::send) is a no-op.
    pub fn new(config: TelemetryConfig, step_name: &str) -> Self {
        if config.disabled {
            tracing::info!("telemetry reporting deactivated");
            return Self {
                config,
                base: None,
                sender: None,
            };
        }

        let sender =
            match HttpSender::new(Duration::from_secs(config.max_request_duration_secs)) {
                Ok(sender) => Some(Arc::new(sender) as Arc<dyn ISender>),
                Err(e) => {
                    tracing::warn!("telemetry transport unavailable: {e}");
                    None
                }
            };

        let base = identity::build_base_context(&config, step_name);
        Self {
            config,
            base: Some(base),
            sender,
        }
    }

    /// Initialize with an injected transport. Used by embedders and tests.
    pub fn with_sender(
        config: TelemetryConfig,
        step_name: &str,
        sender: Arc<dyn ISender>,
    ) -> Self {
        if config.disabled {
            tracing::info!("telemetry reporting deactivated");
            return Self {
                config,
                base: None,
                sender: None,
            };
        }

        let base = identity::build_base_context(&config, step_name);
        Self {
            config,
            base: Some(base),
            sender: Some(sender),
        }
    }

    /// The immutable base context, absent when reporting is disabled.
    pub fn base_context(&self) -> Option<&BaseContext> {
        self.base.as_ref()
    }

    /// The transport shared by every sink, absent when reporting is
    /// disabled or the transport could not be constructed.
    pub fn sender(&self) -> Option<Arc<dyn ISender>> {
        self.sender.clone()
    }

    /// Merge `custom` with the base context and deliver to every configured
    /// sink independently, best-effort.
    ///
    /// Never returns an error and never panics; per-sink outcomes land in
    /// the returned report for the observability layer.
    pub fn send(&self, custom: &CustomData) -> DispatchReport {
        let mut report = DispatchReport::default();

        let Some(base) = &self.base else {
            // Disabled at initialization: zero network activity.
            for sink in ALL_SINKS {
                report.push(
                    sink,
                    SinkOutcome::Skipped {
                        reason: "telemetry disabled".to_string(),
                    },
                );
            }
            return report;
        };

        let Some(sender) = &self.sender else {
            for sink in ALL_SINKS {
                report.push(
                    sink,
                    SinkOutcome::Skipped {
                        reason: "transport unavailable".to_string(),
                    },
                );
            }
            return report;
        };

        let record = payload::assemble_record(base, custom);

        report.push(
            SinkKind::Tracker,
            sinks::dispatch_tracker(sender.as_ref(), &self.config.tracker, base, &record),
        );
        report.push(
            SinkKind::Collector,
            sinks::dispatch_collector(sender.as_ref(), &self.config.collector, &record),
        );
        report.push(
            SinkKind::Relay,
            sinks::dispatch_relay(sender.as_ref(), &self.config.relay, &record),
        );

        tracing::debug!(
            delivered = report.delivered(),
            attempted = report.attempted(),
            "telemetry dispatch complete"
        );

        report
    }
}
