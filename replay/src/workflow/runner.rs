use crate::publish::{Frame, Publisher};
use anyhow::Context;
use lcdash::telemetry::MetricsSnapshot;
use lcdash::{Orchestrator, SessionConfig, SessionData};
use std::fs;
use std::path::Path;

/// One scripted interaction with the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    /// Widget reported a new state; `None` is a null state.
    State(Option<String>),
    /// User picked a model in the inspector selector.
    Focus(String),
}

/// Parses an events script: `focus <model>`, `clear`, or a raw widget state
/// per line. Blank lines and `#` comments are skipped.
pub fn parse_script(script: &str) -> Vec<ReplayEvent> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            if line == "clear" {
                ReplayEvent::State(None)
            } else if let Some(model) = line.strip_prefix("focus ") {
                ReplayEvent::Focus(model.trim().to_string())
            } else {
                ReplayEvent::State(Some(line.to_string()))
            }
        })
        .collect()
}

pub fn load_script<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ReplayEvent>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading events script {}", path_ref.display()))?;
    Ok(parse_script(&contents))
}

pub struct Runner {
    orchestrator: Orchestrator,
}

impl Runner {
    pub fn new(data: SessionData, config: SessionConfig) -> Self {
        Self {
            orchestrator: Orchestrator::new(data, config),
        }
    }

    #[cfg(test)]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Publishes the primary table and the initial redraw, then one frame per
    /// event, then a summary.
    pub fn execute(
        &mut self,
        events: &[ReplayEvent],
        publisher: &mut Publisher,
    ) -> anyhow::Result<MetricsSnapshot> {
        publisher
            .publish(&Frame::Primary {
                table: self.orchestrator.primary_table(),
            })
            .context("publishing primary table")?;
        let redraw = self.orchestrator.initial_redraw();
        publisher
            .publish(&Frame::Redraw { step: 0, redraw })
            .context("publishing initial redraw")?;

        for (index, event) in events.iter().enumerate() {
            let step = index + 1;
            let frame = match event {
                ReplayEvent::State(state) => Frame::Redraw {
                    step,
                    redraw: self.orchestrator.on_state_change(state.as_deref()),
                },
                ReplayEvent::Focus(model) => Frame::Focus {
                    step,
                    model: model.clone(),
                    inspector: self.orchestrator.on_focus_change(model),
                },
            };
            publisher
                .publish(&frame)
                .with_context(|| format!("publishing frame for event {step}"))?;
        }

        let metrics = self.orchestrator.metrics();
        publisher
            .publish(&Frame::Summary { metrics })
            .context("publishing summary")?;
        Ok(metrics)
    }
}
