use crate::dataset::{PrimaryTable, SessionData};
use crate::prelude::SelectionState;
use crate::selection::{Resolution, SelectionResolver, StateExtractor};
use crate::session::config::SessionConfig;
use crate::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use crate::views::{ComparatorProjector, ComparatorTable, Focus, FocusTracker, InspectorView};
use serde::Serialize;

/// Where the session stands after the last widget event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NoSelection,
    SingleAutoSelected,
    MultiSelected,
}

impl From<&Resolution> for SessionPhase {
    fn from(resolution: &Resolution) -> Self {
        match resolution {
            Resolution::NoSelection => SessionPhase::NoSelection,
            Resolution::AutoSelected(_) => SessionPhase::SingleAutoSelected,
            Resolution::Selected(_) => SessionPhase::MultiSelected,
        }
    }
}

/// Both dependent views as produced by one state-change pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Redraw {
    pub phase: SessionPhase,
    pub selection: SelectionState,
    pub comparator: ComparatorTable,
    pub inspector: InspectorView,
}

/// Single entry point for widget state changes and manual focus changes.
pub struct Orchestrator {
    data: SessionData,
    config: SessionConfig,
    extractor: StateExtractor,
    focus: FocusTracker,
    phase: SessionPhase,
    candidates: Vec<String>,
    time_offset: i64,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Orchestrator {
    pub fn new(data: SessionData, config: SessionConfig) -> Self {
        let logger = LogManager::new("orchestrator");
        logger.record(&format!(
            "session started: {} models, base year {}, focus match {:?}",
            data.dataset().len(),
            config.base_year,
            config.focus_match
        ));
        Self {
            extractor: StateExtractor::new(config.base_year),
            focus: FocusTracker::new(config.focus_match),
            data,
            config,
            phase: SessionPhase::NoSelection,
            candidates: Vec::new(),
            time_offset: 0,
            logger,
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Table the primary chart is drawn from.
    pub fn primary_table(&self) -> PrimaryTable {
        PrimaryTable::build(self.data.dataset())
    }

    /// Redraw for the state the primary chart starts in.
    pub fn initial_redraw(&mut self) -> Redraw {
        let state = self.config.initial_state();
        self.on_state_change(Some(&state))
    }

    /// Rebuilds both dependent views from the widget's latest state. A null
    /// or blank state means the widget has nothing selected.
    pub fn on_state_change(&mut self, state: Option<&str>) -> Redraw {
        self.metrics.record_redraw();
        let dataset = self.data.dataset();

        let selection = self.extractor.extract(state, dataset);
        let resolution = if state.map_or(true, |raw| raw.trim().is_empty()) {
            Resolution::NoSelection
        } else {
            SelectionResolver::resolve(&selection, dataset)
        };
        let models = resolution.models();

        // Widget axis options are 1-based table columns; the projector wants
        // vocabulary positions.
        let comparator = ComparatorProjector::project(
            dataset,
            &models,
            selection.x_axis_index.saturating_sub(1),
            selection.y_axis_index.saturating_sub(1),
        );
        if comparator.is_empty() {
            self.metrics.record_empty_comparison();
        }

        let inspector = match self.focus.reconcile(&models) {
            Focus::Hidden => {
                self.logger.trace("inspector hidden: no resolved models");
                InspectorView::Hidden
            }
            Focus::Focused { model, .. } => self.inspect(&model, selection.time_offset, &models),
        };
        if inspector.is_hidden() {
            self.metrics.record_hidden_inspector();
        }

        self.phase = SessionPhase::from(&resolution);
        self.candidates = models;
        self.time_offset = selection.time_offset;
        self.logger.trace(&format!(
            "redraw phase={:?} models={} time={} axes=({}, {}) rows={}",
            self.phase,
            self.candidates.len(),
            selection.time_offset,
            selection.x_axis_index,
            selection.y_axis_index,
            comparator.rows.len()
        ));

        Redraw {
            phase: self.phase,
            selection,
            comparator,
            inspector,
        }
    }

    /// User picked another model in the inspector selector. Only the
    /// inspector is redrawn, at the time step of the last widget event.
    pub fn on_focus_change(&mut self, model: &str) -> InspectorView {
        self.metrics.record_focus_change();
        self.focus.set_focus(model);

        if self.candidates.is_empty() {
            self.logger
                .trace(&format!("focus '{model}' stored while inspector is hidden"));
            self.metrics.record_hidden_inspector();
            return InspectorView::Hidden;
        }
        if !self.candidates.iter().any(|name| name == model) {
            self.logger
                .warn(&format!("focus '{model}' is not among the current candidates"));
        }

        let candidates = self.candidates.clone();
        self.inspect(model, self.time_offset, &candidates)
    }

    fn inspect(&self, model: &str, time: i64, candidates: &[String]) -> InspectorView {
        let view = InspectorView::build(
            self.data.assets(),
            model,
            time,
            candidates,
            &self.config.viewport,
            self.config.panel_scale,
        );
        if view.image().is_none() {
            self.logger
                .trace(&format!("no image for '{model}' at time {time}"));
        }
        view
    }
}
