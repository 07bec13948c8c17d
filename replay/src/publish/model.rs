use lcdash::dataset::PrimaryTable;
use lcdash::session::Redraw;
use lcdash::telemetry::MetricsSnapshot;
use lcdash::views::InspectorView;
use serde::Serialize;

/// One published line of a replayed session.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Frame {
    Primary {
        table: PrimaryTable,
    },
    Redraw {
        step: usize,
        #[serde(flatten)]
        redraw: Redraw,
    },
    Focus {
        step: usize,
        model: String,
        inspector: InspectorView,
    },
    Summary {
        metrics: MetricsSnapshot,
    },
}
