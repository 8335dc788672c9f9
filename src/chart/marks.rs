//! Shape binders: records and categories to visual marks
//!
//! A scene is the complete, plain-data description of one chart render:
//! every mark position, size, and color, plus axes, legend, and callouts.
//! Scenes are built once per dataset load (scatter) or per selection change
//! (bars) and applied to the rendering surface wholesale — no incremental
//! patching, no persistent mark identity across rebuilds.

use egui::{Color32, Pos2, Rect, Vec2};

use crate::chart::annotations::{build_callouts, CalloutMark};
use crate::chart::axis::AxisSpec;
use crate::chart::legend::{build_legend, Legend};
use crate::chart::scale::{BandScale, LinearScale, LogScale, OrdinalColorScale};
use crate::config::ChartConfig;
use crate::types::{Dataset, MaskCategory, StateRecord};

/// Fraction of the chart width where the bar chart's category labels sit,
/// clear of the shortest bars
pub const CATEGORY_AXIS_FRACTION: f32 = 0.2;

/// One scatter circle bound to a record
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMark {
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
    /// Index of the bound record within the dataset
    pub record_index: usize,
}

/// A state-code label drawn on top of its circle
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMark {
    pub position: Pos2,
    pub text: String,
}

/// One horizontal bar bound to a survey category
#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    /// Final bar geometry; the grow animation interpolates toward it
    pub rect: Rect,
    pub category: MaskCategory,
    /// The bound survey fraction
    pub value: f64,
}

/// Which metric the scatter chart plots on its y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterMetric {
    Deaths,
    MaskUse,
}

impl ScatterMetric {
    /// The record field this metric reads
    pub fn value(&self, record: &StateRecord) -> f64 {
        match self {
            ScatterMetric::Deaths => record.deaths,
            ScatterMetric::MaskUse => record.mask_use,
        }
    }

    /// Axis title for this metric
    pub fn axis_title(&self) -> &'static str {
        match self {
            ScatterMetric::Deaths => "Deaths",
            ScatterMetric::MaskUse => "Mask Uses in 100K",
        }
    }
}

/// Complete geometry of one scatter chart render.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterScene {
    pub circles: Vec<CircleMark>,
    /// Labels are painted after circles so they sit on top
    pub labels: Vec<LabelMark>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub legend: Legend,
    /// Static callouts; only the mask-use chart carries any
    pub callouts: Vec<CalloutMark>,
    /// Inner plotting size in pixels
    pub size: Vec2,
}

/// Bind one circle and one label per record, positioned via the scales.
///
/// Records whose position or radius would be undefined (cases outside the
/// log scale's domain, NaN metric or population) produce no marks.
pub fn build_scatter(
    dataset: &Dataset,
    metric: ScatterMetric,
    config: &ChartConfig,
) -> ScatterScene {
    let width = config.scatter_width();
    let height = config.scatter_height();

    let x = LogScale::new(config.cases_domain, (0.0, width));
    let y_domain = match metric {
        ScatterMetric::Deaths => config.deaths_domain,
        ScatterMetric::MaskUse => config.mask_use_domain,
    };
    let y = LinearScale::new(y_domain, (height, 0.0));
    let radius = LinearScale::from_extent(
        dataset.population_extent().unwrap_or((0.0, 1.0)),
        config.radius_range,
    );
    let colors = OrdinalColorScale::from_dataset(dataset);

    let mut circles = Vec::with_capacity(dataset.len());
    let mut labels = Vec::with_capacity(dataset.len());
    for (record_index, record) in dataset.records().iter().enumerate() {
        let metric_value = metric.value(record);
        if !x.is_defined_at(record.cases)
            || !metric_value.is_finite()
            || !record.population.is_finite()
        {
            tracing::debug!(state = %record.state, "skipping mark with undefined position");
            continue;
        }
        let center = Pos2::new(x.map(record.cases), y.map(metric_value));
        circles.push(CircleMark {
            center,
            radius: radius.map(record.population),
            fill: colors.color(&record.region),
            record_index,
        });
        labels.push(LabelMark {
            position: center,
            text: record.state_code.clone(),
        });
    }

    let callouts = match metric {
        ScatterMetric::MaskUse => build_callouts(dataset, &x, &y),
        ScatterMetric::Deaths => Vec::new(),
    };

    ScatterScene {
        circles,
        labels,
        x_axis: AxisSpec::bottom_log(&x, height, "Cases"),
        y_axis: AxisSpec::left_linear(&y, 0.0, metric.axis_title()),
        legend: build_legend(dataset, &colors),
        callouts,
        size: Vec2::new(width, height),
    }
}

/// Complete geometry of one bar chart render for a selected state.
#[derive(Debug, Clone, PartialEq)]
pub struct BarScene {
    /// Name of the state these bars were built for
    pub state: String,
    /// One bar per category, in [`MaskCategory::ALL`] order
    pub bars: Vec<BarMark>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    /// Pixel position of the zero line; bars grow away from it
    pub zero_x: f32,
    /// Inner plotting size in pixels
    pub size: Vec2,
}

/// Bind one bar per category for the selected record.
///
/// Sign policy: bars always grow away from zero, never crossing it. A
/// negative fraction's bar runs from its scaled value rightward to the
/// zero position; a non-negative one runs from zero rightward to its
/// scaled value. Categories whose fraction coerced to NaN produce no bar.
pub fn build_bars(record: &StateRecord, config: &ChartConfig) -> BarScene {
    let width = config.bar_width();
    let height = config.bar_height();

    let x = LinearScale::new((0.0, 1.0), (0.0, width));
    let y = BandScale::new((height, 0.0));
    let zero_x = x.map(0.0);

    let mut bars = Vec::with_capacity(MaskCategory::ALL.len());
    for category in MaskCategory::ALL {
        let value = record.mask_share(category);
        if !value.is_finite() {
            tracing::warn!(
                state = %record.state,
                category = category.label(),
                "skipping bar with undefined fraction"
            );
            continue;
        }
        let scaled = x.map(value);
        let left = scaled.min(zero_x);
        let bar_width = (scaled - zero_x).abs();
        bars.push(BarMark {
            rect: Rect::from_min_size(
                Pos2::new(left, y.position(category)),
                Vec2::new(bar_width, y.bandwidth()),
            ),
            category,
            value,
        });
    }

    BarScene {
        state: record.state.clone(),
        bars,
        x_axis: AxisSpec::bottom_zero_line((0.0, width), height),
        y_axis: AxisSpec::left_band(&y, width * CATEGORY_AXIS_FRACTION),
        zero_x,
        size: Vec2::new(width, height),
    }
}
