//! Axis specifications
//!
//! An [`AxisSpec`] is the precomputed, surface-free description of one
//! axis: a baseline extent, tick positions/labels, and an optional title.
//! The frontend canvas turns a spec into painted lines and text.

use crate::chart::scale::{BandScale, LinearScale, LogScale, Tick};
use crate::types::MaskCategory;

/// Which chart edge the axis sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// Precomputed axis geometry in chart-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub orientation: AxisOrientation,
    /// Cross-axis position of the baseline (y for bottom axes, x for left)
    pub offset: f32,
    /// Baseline extent along the axis direction
    pub start: f32,
    pub end: f32,
    pub ticks: Vec<Tick>,
    /// Axis title, drawn centered beyond the tick labels
    pub title: Option<String>,
    /// Draw tick labels on the chart side of the baseline (bar category axis)
    pub labels_inside: bool,
}

impl AxisSpec {
    /// Bottom axis for a log x scale (scatter charts)
    pub fn bottom_log(scale: &LogScale, y: f32, title: impl Into<String>) -> Self {
        let (start, end) = scale.range();
        Self {
            orientation: AxisOrientation::Bottom,
            offset: y,
            start,
            end,
            ticks: scale.ticks(),
            title: Some(title.into()),
            labels_inside: false,
        }
    }

    /// Left axis for a linear y scale (scatter charts)
    pub fn left_linear(scale: &LinearScale, x: f32, title: impl Into<String>) -> Self {
        let (start, end) = scale.range();
        Self {
            orientation: AxisOrientation::Left,
            offset: x,
            // Reversed y ranges still describe the same baseline extent.
            start: start.min(end),
            end: start.max(end),
            ticks: scale.ticks(10),
            title: Some(title.into()),
            labels_inside: false,
        }
    }

    /// Bare zero-tick baseline for the bar chart's value axis
    pub fn bottom_zero_line(extent: (f32, f32), y: f32) -> Self {
        Self {
            orientation: AxisOrientation::Bottom,
            offset: y,
            start: extent.0,
            end: extent.1,
            ticks: Vec::new(),
            title: None,
            labels_inside: false,
        }
    }

    /// Category axis for the bar chart, labels drawn inside the chart so
    /// they stay readable over short bars.
    pub fn left_band(scale: &BandScale, x: f32) -> Self {
        let (r0, r1) = scale.range();
        let ticks = MaskCategory::ALL
            .iter()
            .map(|category| Tick {
                position: scale.center(*category),
                label: Some(category.label().to_string()),
            })
            .collect();
        Self {
            orientation: AxisOrientation::Left,
            offset: x,
            start: r0.min(r1),
            end: r0.max(r1),
            ticks,
            title: None,
            labels_inside: true,
        }
    }
}
