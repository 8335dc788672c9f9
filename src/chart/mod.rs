//! Chart geometry model
//!
//! Everything in this module is pure: scales, axes, marks, legends,
//! annotations, and the selection-driven redraw are all computed into plain
//! data records from a [`Dataset`](crate::types::Dataset) plus the chart
//! configuration, with no rendering surface involved. The frontend applies
//! a finished scene to an egui painter in one pass.
//!
//! # Submodules
//!
//! - [`scale`] - Deterministic domain-to-range mappings (log, linear, band, ordinal color)
//! - [`axis`] - Tick and baseline specifications derived from scales
//! - [`marks`] - Shape binders producing one mark per record or category
//! - [`legend`] - Categorical legend entries in first-occurrence order
//! - [`annotations`] - Static callouts for the cases-vs-mask-use chart
//! - [`selection`] - The two-state selection machine driving the bar chart

pub mod annotations;
pub mod axis;
pub mod legend;
pub mod marks;
pub mod scale;
pub mod selection;

pub use annotations::CalloutMark;
pub use axis::{AxisOrientation, AxisSpec};
pub use legend::{build_legend, Legend, LegendEntry};
pub use marks::{
    build_bars, build_scatter, BarMark, BarScene, CircleMark, LabelMark, ScatterMetric,
    ScatterScene,
};
pub use scale::{BandScale, LinearScale, LogScale, OrdinalColorScale, Tick, CATEGORY10};
pub use selection::{SelectOutcome, SelectionDriver};
