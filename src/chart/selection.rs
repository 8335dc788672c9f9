//! Selection state for the mask-preference bar chart
//!
//! The bar chart is driven entirely by the dropdown selection. The driver
//! holds the scene for the currently selected state, rebuilding it from
//! scratch on every successful selection. An unmatched name leaves the
//! current state untouched.

use crate::chart::marks::{build_bars, BarScene};
use crate::config::ChartConfig;
use crate::types::Dataset;

/// Result of a selection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The scene was torn down and rebuilt for the named state
    Redrawn,
    /// No record matched; the previous scene (if any) is still shown
    NotFound,
}

/// Owns the bar scene for the currently selected state.
#[derive(Debug, Default)]
pub struct SelectionDriver {
    scene: Option<BarScene>,
    /// Bumped on every rebuild so the frontend can restart the grow
    /// animation even when the same state is re-selected
    generation: u64,
}

impl SelectionDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self) -> bool {
        self.scene.is_some()
    }

    /// Name of the selected state, if any
    pub fn selected_state(&self) -> Option<&str> {
        self.scene.as_ref().map(|scene| scene.state.as_str())
    }

    pub fn scene(&self) -> Option<&BarScene> {
        self.scene.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resolve `name` against the dataset and rebuild the scene.
    ///
    /// Matching is exact and case sensitive. Re-selecting the current state
    /// still rebuilds, matching the teardown-and-rebuild redraw contract.
    pub fn select(&mut self, dataset: &Dataset, name: &str, config: &ChartConfig) -> SelectOutcome {
        let Some(record) = dataset.find_state(name) else {
            tracing::warn!(state = name, "selection matched no state record");
            return SelectOutcome::NotFound;
        };
        self.scene = Some(build_bars(record, config));
        self.generation = self.generation.wrapping_add(1);
        SelectOutcome::Redrawn
    }
}
