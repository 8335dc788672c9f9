//! Core data model for the visualizer
//!
//! The dataset is a flat, ordered table of per-state records combining
//! COVID-19 case/death counts with mask-usage survey fractions. Records are
//! immutable after load; every chart derives its geometry from this model
//! plus the active scales.
//!
//! # Main Types
//!
//! - [`MaskCategory`] - The five ordered survey-response categories
//! - [`StateRecord`] - One state's combined case and survey record
//! - [`Dataset`] - Ordered, immutable sequence of records (source file order)

use serde::{Deserialize, Serialize};

/// The five mask-usage survey categories, in survey order.
///
/// The order is fixed and significant: the bar chart's band scale assigns
/// one slot per category in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskCategory {
    Always,
    Frequently,
    Sometimes,
    Rarely,
    Never,
}

impl MaskCategory {
    /// All categories in survey order
    pub const ALL: [MaskCategory; 5] = [
        MaskCategory::Always,
        MaskCategory::Frequently,
        MaskCategory::Sometimes,
        MaskCategory::Rarely,
        MaskCategory::Never,
    ];

    /// The column header / display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            MaskCategory::Always => "ALWAYS",
            MaskCategory::Frequently => "FREQUENTLY",
            MaskCategory::Sometimes => "SOMETIMES",
            MaskCategory::Rarely => "RARELY",
            MaskCategory::Never => "NEVER",
        }
    }

    /// Position of this category within [`MaskCategory::ALL`]
    pub fn index(&self) -> usize {
        match self {
            MaskCategory::Always => 0,
            MaskCategory::Frequently => 1,
            MaskCategory::Sometimes => 2,
            MaskCategory::Rarely => 3,
            MaskCategory::Never => 4,
        }
    }
}

/// One state's combined COVID-case and mask-survey record.
///
/// All numeric fields are coerced from CSV text at load time; malformed
/// cells coerce to `NaN` and are skipped by the shape binders. The five
/// survey fractions come straight from the survey and are not guaranteed
/// to sum to 1 after rounding; no validation is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Full state name (selection key, exact match)
    pub state: String,
    /// Two-letter state code, drawn as the mark label
    pub state_code: String,
    /// Census region, drives the categorical color scale
    pub region: String,
    /// Cumulative positive case count
    pub cases: f64,
    /// Cumulative death count
    pub deaths: f64,
    /// Mask uses per 100K survey metric
    pub mask_use: f64,
    /// State population
    pub population: f64,
    /// Survey fractions indexed by [`MaskCategory::index`]
    pub mask_shares: [f64; 5],
}

impl StateRecord {
    /// The survey fraction for one category
    pub fn mask_share(&self, category: MaskCategory) -> f64 {
        self.mask_shares[category.index()]
    }
}

/// Ordered, immutable sequence of [`StateRecord`] in source file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<StateRecord>,
}

impl Dataset {
    /// Wrap a record sequence, preserving its order
    pub fn new(records: Vec<StateRecord>) -> Self {
        Self { records }
    }

    /// All records in source order
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact, case-sensitive state name.
    ///
    /// No fuzzy matching and no fallback record: an unmatched name
    /// returns `None`.
    pub fn find_state(&self, name: &str) -> Option<&StateRecord> {
        self.records.iter().find(|r| r.state == name)
    }

    /// Distinct regions in first-occurrence order
    pub fn regions(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.region.as_str()) {
                seen.push(record.region.as_str());
            }
        }
        seen
    }

    /// State names in source order (populates the selection control)
    pub fn state_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.state.as_str()).collect()
    }

    /// (min, max) population over all records, ignoring NaN cells.
    ///
    /// Returns `None` when no record carries a finite population.
    pub fn population_extent(&self) -> Option<(f64, f64)> {
        let mut extent: Option<(f64, f64)> = None;
        for record in &self.records {
            let p = record.population;
            if !p.is_finite() {
                continue;
            }
            extent = Some(match extent {
                Some((lo, hi)) => (lo.min(p), hi.max(p)),
                None => (p, p),
            });
        }
        extent
    }
}
