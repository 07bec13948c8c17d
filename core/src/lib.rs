//! Selection synchronization for the liquid-crystal run dashboard.
//!
//! A motion chart over every simulated model reports its state as an opaque
//! string. The modules here read that state, decide which models the
//! dependent views should show, and build the scatter comparison and the
//! image inspector from the immutable run data.

pub mod dataset;
pub mod prelude;
pub mod selection;
pub mod session;
pub mod telemetry;
pub mod views;

pub use dataset::{AssetRef, Dataset, Field, Record, SessionData, VisualAssets};
pub use prelude::{DashboardError, DashboardResult, SelectionState, Viewport};
pub use session::{Orchestrator, Redraw, SessionConfig, SessionPhase};
