use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Window size measured once by the host and handed to every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Panel dimensions for a dependent view, truncated like the page does.
    pub fn panel(&self, scale: f64) -> (u32, u32) {
        let scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
        (
            (self.width as f64 * scale) as u32,
            (self.height as f64 * scale) as u32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 630,
            height: 460,
        }
    }
}

/// Selection read out of one widget state. Rebuilt on every event.
///
/// Axis indices are the widget's 1-based column options; `100` is the
/// alphabetical sentinel and means "not a plottable numeric axis".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_models: BTreeSet<String>,
    pub time_offset: i64,
    pub x_axis_index: i64,
    pub y_axis_index: i64,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_models: BTreeSet::new(),
            time_offset: 0,
            x_axis_index: 1,
            y_axis_index: 2,
        }
    }
}

/// Typed view over a widget's opaque serialized state.
pub trait StateSource {
    /// Raw numeric time token, before the base year is removed.
    fn time_token(&self) -> Option<i64>;
    fn x_axis_token(&self) -> Option<AxisToken>;
    fn y_axis_token(&self) -> Option<AxisToken>;
    /// Whether `key` appears as a complete token of the state.
    fn contains_key(&self, key: &str) -> bool;
}

/// One axis option as the widget encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisToken {
    Time,
    Alphabetical,
    Column(i64),
}

/// Errors raised while building a dashboard session.
#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error("model '{model}' has {records} records but {assets} visual assets")]
    MisalignedAssets {
        model: String,
        records: usize,
        assets: usize,
    },
    #[error("model '{0}' has records but no visual assets")]
    MissingAssets(String),
    #[error("model '{0}' has visual assets but no records")]
    MissingRecords(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
