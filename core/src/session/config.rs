use crate::prelude::{DashboardError, DashboardResult, Viewport};
use crate::views::FocusMatch;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_BASE_YEAR: i64 = 1900;

/// Settings fixed for the lifetime of one dashboard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Year the widget shows for time step 0.
    pub base_year: i64,
    pub viewport: Viewport,
    /// Fraction of the viewport given to each panel.
    pub panel_scale: f64,
    pub focus_match: FocusMatch,
    /// State the primary chart is first drawn with; the stock state when unset.
    pub initial_state: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_year: DEFAULT_BASE_YEAR,
            viewport: Viewport::default(),
            panel_scale: 0.5,
            focus_match: FocusMatch::Exact,
            initial_state: None,
        }
    }
}

impl SessionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> DashboardResult<Self> {
        let config: SessionConfig = serde_yaml::from_str(contents)
            .map_err(|err| DashboardError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn initial_state(&self) -> String {
        self.initial_state
            .clone()
            .unwrap_or_else(|| stock_state(self.base_year))
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.panel_scale.is_finite() || self.panel_scale <= 0.0 {
            return Err(DashboardError::InvalidConfig(format!(
                "panel_scale must be positive, got {}",
                self.panel_scale
            )));
        }
        Ok(())
    }
}

/// Motion chart state with an alphabetical X axis, temperature on Y and the
/// clock at time step 0.
pub fn stock_state(base_year: i64) -> String {
    format!(
        concat!(
            r#"{{"xZoomedIn":false,"showTrails":true,"yZoomedDataMin":0,"yZoomedIn":false,"#,
            r#""xAxisOption":"_ALPHABETICAL","orderedByX":false,"xLambda":1,"#,
            r#""colorOption":"_UNIQUE_COLOR","nonSelectedAlpha":0.4,"playDuration":15000,"#,
            r#""xZoomedDataMax":3,"sizeOption":"5","iconKeySettings":[],"#,
            r#""duration":{{"multiplier":1,"timeUnit":"Y"}},"yZoomedDataMax":1,"#,
            r#""orderedByY":false,"iconType":"BUBBLE","xZoomedDataMin":0,"#,
            r#""dimensions":{{"iconDimensions":["dim0"]}},"time":"{}","#,
            r#""uniColorForNonSelected":false,"yLambda":1,"yAxisOption":"2"}}"#
        ),
        base_year
    )
}
