//! Counters for layout activity, bridged into the logging module.

use std::time::Duration;

use serde_json::json;

use crate::logging::{LogEvent, LogLevel};

/// Accumulated layout activity for one container.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    passes: u64,
    children_placed: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self, placed: usize) {
        self.passes = self.passes.saturating_add(1);
        self.children_placed = self.children_placed.saturating_add(placed as u64);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            passes: self.passes,
            children_placed: self.children_placed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub passes: u64,
    pub children_placed: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::new(LogLevel::Info, target, "layout_metrics")
            .field("uptime_ms", json!(self.uptime_ms))
            .field("passes", json!(self.passes))
            .field("children_placed", json!(self.children_placed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_accumulate() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_pass(3);
        metrics.record_pass(5);

        let snapshot = metrics.snapshot(Duration::from_millis(42));
        assert_eq!(snapshot.passes, 2);
        assert_eq!(snapshot.children_placed, 8);
        assert_eq!(snapshot.uptime_ms, 42);
    }

    #[test]
    fn snapshot_converts_to_log_event() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_pass(1);

        let event = metrics
            .snapshot(Duration::from_millis(7))
            .to_log_event("panel");
        assert_eq!(event.message, "layout_metrics");
        assert_eq!(event.fields["passes"], 1);
        assert_eq!(event.fields["children_placed"], 1);
    }
}
