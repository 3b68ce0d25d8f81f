use serde::{Deserialize, Serialize};

/// The three configured dispatch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Web-analytics tracker (query-string GET).
    Tracker,
    /// Log collector (JSON POST with token auth).
    Collector,
    /// Secondary collector (JSON POST, alternate backend).
    Relay,
}

impl SinkKind {
    /// Stable name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Tracker => "tracker",
            SinkKind::Collector => "collector",
            SinkKind::Relay => "relay",
        }
    }
}

/// Best-effort delivery outcome for one sink.
///
/// Failures are classified here instead of being discarded; nothing in this
/// type ever propagates to the instrumented pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkOutcome {
    /// The request was issued and the transport reported success.
    Delivered,
    /// The sink was not attempted.
    Skipped { reason: String },
    /// The attempt failed; the failure was logged and absorbed.
    Failed { reason: String },
}

impl SinkOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SinkOutcome::Delivered)
    }
}

/// One sink's outcome within a dispatch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkDelivery {
    pub sink: SinkKind,
    pub outcome: SinkOutcome,
}

/// Outcome of one `send` call across all sinks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub outcomes: Vec<SinkDelivery>,
}

impl DispatchReport {
    /// Record one sink's outcome.
    pub fn push(&mut self, sink: SinkKind, outcome: SinkOutcome) {
        self.outcomes.push(SinkDelivery { sink, outcome });
    }

    /// Number of sinks that acknowledged delivery.
    pub fn delivered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|d| d.outcome.is_delivered())
            .count()
    }

    /// Number of sinks that were actually attempted (delivered or failed).
    pub fn attempted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|d| !matches!(d.outcome, SinkOutcome::Skipped { .. }))
            .count()
    }

    /// The recorded outcome for a sink, if any.
    pub fn outcome_for(&self, sink: SinkKind) -> Option<&SinkOutcome> {
        self.outcomes
            .iter()
            .find(|d| d.sink == sink)
            .map(|d| &d.outcome)
    }
}
