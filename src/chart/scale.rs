//! Scale builders: deterministic domain-to-range mappings
//!
//! Scales are built once per chart render from the full dataset's extent
//! (or from fixed literal domains) and never mutated. They are plain value
//! types so geometry stays testable without a rendering surface.

use crate::types::MaskCategory;
use egui::Color32;

/// The fixed 10-color categorical palette (d3 schemeCategory10 values).
///
/// Categories beyond ten wrap around the palette.
pub const CATEGORY10: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0xd6, 0x27, 0x28),
    Color32::from_rgb(0x94, 0x67, 0xbd),
    Color32::from_rgb(0x8c, 0x56, 0x4b),
    Color32::from_rgb(0xe3, 0x77, 0xc2),
    Color32::from_rgb(0x7f, 0x7f, 0x7f),
    Color32::from_rgb(0xbc, 0xbd, 0x22),
    Color32::from_rgb(0x17, 0xbe, 0xcf),
];

/// One axis tick: a pixel position plus an optional label
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f32,
    pub label: Option<String>,
}

/// Logarithmic scale over a strictly positive domain.
///
/// Behavior is undefined for values at or below zero; callers must guard
/// with [`LogScale::is_defined_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LogScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        debug_assert!(domain.0 > 0.0 && domain.1 > 0.0);
        Self { domain, range }
    }

    /// Whether the scale is defined for this value
    pub fn is_defined_at(&self, value: f64) -> bool {
        value > 0.0 && value.is_finite()
    }

    /// Map a domain value to its pixel position
    pub fn map(&self, value: f64) -> f32 {
        let span = self.domain.1.ln() - self.domain.0.ln();
        let t = if span == 0.0 {
            0.5
        } else {
            (value.ln() - self.domain.0.ln()) / span
        };
        self.range.0 + t as f32 * (self.range.1 - self.range.0)
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Decade-multiple ticks within the domain, labeled on decades only.
    pub fn ticks(&self) -> Vec<Tick> {
        let mut ticks = Vec::new();
        let lo_exp = self.domain.0.log10().floor() as i32;
        let hi_exp = self.domain.1.log10().ceil() as i32;
        for exp in lo_exp..=hi_exp {
            for mult in 1..=9 {
                let value = mult as f64 * 10f64.powi(exp);
                if value < self.domain.0 || value > self.domain.1 {
                    continue;
                }
                let label = (mult == 1).then(|| format_tick(value));
                ticks.push(Tick {
                    position: self.map(value),
                    label,
                });
            }
        }
        ticks
    }
}

/// Linear scale, either from a fixed literal domain or a data extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Build from a data-derived extent (e.g. the population radius scale)
    pub fn from_extent(extent: (f64, f64), range: (f32, f32)) -> Self {
        Self::new(extent, range)
    }

    /// Map a domain value to its pixel position
    pub fn map(&self, value: f64) -> f32 {
        let span = self.domain.1 - self.domain.0;
        let t = if span == 0.0 {
            0.5
        } else {
            (value - self.domain.0) / span
        };
        self.range.0 + t as f32 * (self.range.1 - self.range.0)
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Roughly `target` ticks on 1/2/5 steps, all labeled.
    pub fn ticks(&self, target: usize) -> Vec<Tick> {
        let span = self.domain.1 - self.domain.0;
        if span <= 0.0 || target == 0 {
            return Vec::new();
        }
        let raw_step = span / target as f64;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let normalized = raw_step / magnitude;
        let step = if normalized < 1.5 {
            1.0
        } else if normalized < 3.0 {
            2.0
        } else if normalized < 7.0 {
            5.0
        } else {
            10.0
        } * magnitude;

        let mut ticks = Vec::new();
        let mut value = (self.domain.0 / step).ceil() * step;
        while value <= self.domain.1 + step * 1e-6 {
            ticks.push(Tick {
                position: self.map(value),
                label: Some(format_tick(value)),
            });
            value += step;
        }
        ticks
    }
}

/// Band scale over the five fixed mask categories.
///
/// The range is given visually, `(chart height, 0)`; with a reversed range
/// the visual order is reversed from domain order, so ALWAYS sits in the
/// bottom band and NEVER in the top one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    range: (f32, f32),
}

impl BandScale {
    pub fn new(range: (f32, f32)) -> Self {
        Self { range }
    }

    /// Height of one category's slot
    pub fn bandwidth(&self) -> f32 {
        (self.range.1 - self.range.0).abs() / MaskCategory::ALL.len() as f32
    }

    /// Top edge of the category's slot
    pub fn position(&self, category: MaskCategory) -> f32 {
        let n = MaskCategory::ALL.len();
        let start = self.range.0.min(self.range.1);
        let step = self.bandwidth();
        if self.range.0 > self.range.1 {
            start + step * (n - 1 - category.index()) as f32
        } else {
            start + step * category.index() as f32
        }
    }

    /// Vertical center of the category's slot (tick label anchor)
    pub fn center(&self, category: MaskCategory) -> f32 {
        self.position(category) + self.bandwidth() / 2.0
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }
}

/// Ordinal color scale over categories in first-occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalColorScale {
    categories: Vec<String>,
}

impl OrdinalColorScale {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    /// Domain = distinct regions of the dataset, first-occurrence order
    pub fn from_dataset(dataset: &crate::types::Dataset) -> Self {
        Self::new(dataset.regions().into_iter().map(String::from).collect())
    }

    /// Color for a category; unknown categories fall back to gray
    pub fn color(&self, category: &str) -> Color32 {
        match self.categories.iter().position(|c| c == category) {
            Some(i) => CATEGORY10[i % CATEGORY10.len()],
            None => Color32::GRAY,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Compact tick label: 10000 -> "10k", 2500000 -> "2.5M"
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}M", trim_fraction(value / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{}k", trim_fraction(value / 1_000.0))
    } else {
        trim_fraction(value)
    }
}

fn trim_fraction(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
