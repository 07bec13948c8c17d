use serde::Serialize;
use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

/// Counters accumulated over one dashboard session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub redraws: usize,
    pub focus_changes: usize,
    pub empty_comparisons: usize,
    pub hidden_inspectors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_redraw(&self) {
        self.update(|metrics| metrics.redraws += 1);
    }

    pub fn record_focus_change(&self) {
        self.update(|metrics| metrics.focus_changes += 1);
    }

    pub fn record_empty_comparison(&self) {
        self.update(|metrics| metrics.empty_comparisons += 1);
    }

    pub fn record_hidden_inspector(&self) {
        self.update(|metrics| metrics.hidden_inspectors += 1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }

    fn update(&self, apply: impl FnOnce(&mut MetricsSnapshot)) {
        if let Ok(mut metrics) = self.inner.lock() {
            apply(&mut metrics);
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
