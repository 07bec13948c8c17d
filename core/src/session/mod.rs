pub mod config;
pub mod orchestrator;

pub use config::{stock_state, SessionConfig, DEFAULT_BASE_YEAR};
pub use orchestrator::{Orchestrator, Redraw, SessionPhase};
