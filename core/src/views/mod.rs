//! Dependent views kept in step with the primary chart.

pub mod comparator;
pub mod focus;
pub mod image;

pub use comparator::{ComparatorProjector, ComparatorRow, ComparatorTable};
pub use focus::{Focus, FocusMatch, FocusState, FocusTracker};
pub use image::{ImageResolver, InspectorImage, InspectorView};
