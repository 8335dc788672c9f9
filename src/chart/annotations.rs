//! Static annotation callouts
//!
//! The cases-vs-mask-use chart carries three fixed callouts highlighting
//! New York, Vermont, and California. Each is anchored at the scaled
//! position of its target state with literal note text and fixed pixel
//! offsets; a callout whose target is absent from the dataset is skipped.

use egui::{Pos2, Vec2};

use crate::chart::scale::{LinearScale, LogScale};
use crate::types::Dataset;

/// Fixed description of one callout
pub struct CalloutSpec {
    pub target_state: &'static str,
    pub title: &'static str,
    pub label: &'static str,
    /// Nudge of the anchor away from the mark center
    pub anchor_nudge: Vec2,
    /// Offset of the note body from the anchor
    pub note_offset: Vec2,
}

/// The three callouts on the cases-vs-mask-use chart
pub const MASK_USE_CALLOUTS: [CalloutSpec; 3] = [
    CalloutSpec {
        target_state: "New York",
        title: "New York",
        label: "New York has the most positive cases in the US but does not \
                have the lowest nor highest mask useages",
        anchor_nudge: Vec2::new(-5.0, 10.0),
        note_offset: Vec2::new(-100.0, 50.0),
    },
    CalloutSpec {
        target_state: "Vermont",
        title: "Vermont",
        label: "Vermont has the lowest positive cases in the US but also a \
                significant high number of mask uses",
        anchor_nudge: Vec2::new(5.0, 0.0),
        note_offset: Vec2::new(30.0, 30.0),
    },
    CalloutSpec {
        target_state: "California",
        title: "California",
        label: "California has the highest mask uses in the US but they are \
                also the top 5 States for positive COVID-19 cases",
        anchor_nudge: Vec2::new(5.0, 0.0),
        note_offset: Vec2::new(50.0, 10.0),
    },
];

/// A positioned callout ready to paint
#[derive(Debug, Clone, PartialEq)]
pub struct CalloutMark {
    /// Connector start, next to the annotated mark
    pub anchor: Pos2,
    /// Note body position (connector end)
    pub note_pos: Pos2,
    pub title: &'static str,
    pub label: &'static str,
}

/// Position the fixed callouts against the active scatter scales.
pub fn build_callouts(dataset: &Dataset, x: &LogScale, y: &LinearScale) -> Vec<CalloutMark> {
    let mut marks = Vec::new();
    for spec in &MASK_USE_CALLOUTS {
        let Some(record) = dataset.find_state(spec.target_state) else {
            tracing::warn!(state = spec.target_state, "callout target not in dataset");
            continue;
        };
        if !x.is_defined_at(record.cases) || !record.mask_use.is_finite() {
            tracing::warn!(state = spec.target_state, "callout target has no position");
            continue;
        }
        let anchor =
            Pos2::new(x.map(record.cases), y.map(record.mask_use)) + spec.anchor_nudge;
        marks.push(CalloutMark {
            anchor,
            note_pos: anchor + spec.note_offset,
            title: spec.title,
            label: spec.label,
        });
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StateRecord;

    fn record(state: &str, cases: f64, mask_use: f64) -> StateRecord {
        StateRecord {
            state: state.to_string(),
            state_code: "XX".to_string(),
            region: "Northeast".to_string(),
            cases,
            deaths: 100.0,
            mask_use,
            population: 1e6,
            mask_shares: [0.5, 0.2, 0.15, 0.1, 0.05],
        }
    }

    fn scales() -> (LogScale, LinearScale) {
        (
            LogScale::new((5_000.0, 2_500_000.0), (0.0, 1390.0)),
            LinearScale::new((-50_000.0, 750_000.0), (940.0, 0.0)),
        )
    }

    #[test]
    fn test_all_targets_present() {
        let dataset = Dataset::new(vec![
            record("New York", 400_000.0, 300_000.0),
            record("Vermont", 6_000.0, 4_500.0),
            record("California", 700_000.0, 700_000.0),
        ]);
        let (x, y) = scales();
        let marks = build_callouts(&dataset, &x, &y);
        assert_eq!(marks.len(), 3);
        assert_eq!(marks[0].title, "New York");

        // The anchor carries the per-callout nudge.
        let ny = dataset.find_state("New York").unwrap();
        let expected = Pos2::new(x.map(ny.cases) - 5.0, y.map(ny.mask_use) + 10.0);
        assert_eq!(marks[0].anchor, expected);
        // And the note sits at the fixed offset from the anchor.
        assert_eq!(marks[0].note_pos, expected + Vec2::new(-100.0, 50.0));
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let dataset = Dataset::new(vec![record("Vermont", 6_000.0, 4_500.0)]);
        let (x, y) = scales();
        let marks = build_callouts(&dataset, &x, &y);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].title, "Vermont");
    }
}
