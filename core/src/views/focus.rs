use serde::{Deserialize, Serialize};

/// How a remembered focus is found again in a new candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMatch {
    /// Keyed lookup by model name.
    #[default]
    Exact,
    /// Exact name first, otherwise the first candidate starting with it.
    Prefix,
}

/// Model shown in the image inspector. Survives redraws.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusState {
    pub focused_model: Option<String>,
}

/// Outcome of reconciling focus against the current candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Hidden,
    Focused { index: usize, model: String },
}

#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    state: FocusState,
    policy: FocusMatch,
}

impl FocusTracker {
    pub fn new(policy: FocusMatch) -> Self {
        Self {
            state: FocusState::default(),
            policy,
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.state.focused_model.as_deref()
    }

    /// Keeps the previous focus when it is still a candidate, otherwise
    /// falls back to the first candidate. No candidates clears focus.
    pub fn reconcile(&mut self, candidates: &[String]) -> Focus {
        if candidates.is_empty() {
            self.state.focused_model = None;
            return Focus::Hidden;
        }

        let index = self
            .state
            .focused_model
            .as_deref()
            .and_then(|previous| self.find(previous, candidates))
            .unwrap_or(0);
        let model = candidates[index].clone();
        self.state.focused_model = Some(model.clone());
        Focus::Focused { index, model }
    }

    /// User picked a model from the inspector selector.
    pub fn set_focus(&mut self, model: impl Into<String>) {
        self.state.focused_model = Some(model.into());
    }

    fn find(&self, previous: &str, candidates: &[String]) -> Option<usize> {
        let exact = candidates.iter().position(|name| name == previous);
        match self.policy {
            FocusMatch::Exact => exact,
            FocusMatch::Prefix => exact.or_else(|| {
                candidates
                    .iter()
                    .position(|name| name.starts_with(previous))
            }),
        }
    }
}
