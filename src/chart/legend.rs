//! Legend builder
//!
//! Enumerates the distinct regions actually present in the dataset (not a
//! fixed list) and produces one swatch-plus-label entry per region in
//! first-occurrence order, stacked vertically under a fixed title.

use egui::{Color32, Vec2};

use crate::chart::scale::OrdinalColorScale;
use crate::types::Dataset;

/// Vertical distance between legend rows, in pixels
pub const LEGEND_ROW_PITCH: f32 = 20.0;

/// One swatch + label pair
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color32,
}

/// A categorical legend: fixed title plus stacked entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
    /// Offset of the legend group from the chart origin
    pub origin: Vec2,
}

/// Build the region legend for a dataset.
pub fn build_legend(dataset: &Dataset, colors: &OrdinalColorScale) -> Legend {
    let entries = dataset
        .regions()
        .into_iter()
        .map(|region| LegendEntry {
            label: region.to_string(),
            color: colors.color(region),
        })
        .collect();

    Legend {
        title: "Region".to_string(),
        entries,
        origin: Vec2::new(20.0, 20.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::scale::CATEGORY10;
    use crate::types::StateRecord;

    fn record(state: &str, region: &str) -> StateRecord {
        StateRecord {
            state: state.to_string(),
            state_code: "XX".to_string(),
            region: region.to_string(),
            cases: 10_000.0,
            deaths: 100.0,
            mask_use: 500.0,
            population: 1e6,
            mask_shares: [0.5, 0.2, 0.15, 0.1, 0.05],
        }
    }

    #[test]
    fn test_legend_matches_distinct_regions_in_first_occurrence_order() {
        let dataset = Dataset::new(vec![
            record("Washington", "West"),
            record("Texas", "South"),
            record("Oregon", "West"),
            record("Maine", "Northeast"),
        ]);
        let colors = OrdinalColorScale::from_dataset(&dataset);
        let legend = build_legend(&dataset, &colors);

        assert_eq!(legend.title, "Region");
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["West", "South", "Northeast"]);
        assert_eq!(legend.entries[0].color, CATEGORY10[0]);
        assert_eq!(legend.entries[1].color, CATEGORY10[1]);
        assert_eq!(legend.entries[2].color, CATEGORY10[2]);
    }

    #[test]
    fn test_empty_dataset_yields_empty_legend() {
        let dataset = Dataset::default();
        let colors = OrdinalColorScale::from_dataset(&dataset);
        assert!(build_legend(&dataset, &colors).entries.is_empty());
    }
}
