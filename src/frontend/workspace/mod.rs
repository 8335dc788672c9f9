//! Workspace module for the dockable chart panes
//!
//! The three charts are fixed singleton tabs in an egui_dock layout. The
//! pane kind doubles as the tab identity since no kind ever has more than
//! one instance.

pub mod tab_viewer;

use std::collections::HashMap;

use crate::chart::ScatterMetric;
use crate::config::AppConfig;
use crate::frontend::panes::mask_preference::MaskPreferencePaneState;
use crate::frontend::panes::scatter::ScatterPaneState;

/// Kind of chart pane; also the dock tab identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PaneKind {
    CasesDeaths,
    CasesMaskUse,
    MaskPreference,
}

impl PaneKind {
    pub const ALL: [PaneKind; 3] = [
        PaneKind::CasesDeaths,
        PaneKind::CasesMaskUse,
        PaneKind::MaskPreference,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PaneKind::CasesDeaths => "Cases vs Deaths",
            PaneKind::CasesMaskUse => "Cases vs Mask Use",
            PaneKind::MaskPreference => "Mask Preference",
        }
    }
}

/// Per-pane mutable state
pub enum PaneState {
    Scatter(ScatterPaneState),
    MaskPreference(MaskPreferencePaneState),
}

/// Dock layout plus the state behind each tab.
pub struct Workspace {
    pub dock_state: egui_dock::DockState<PaneKind>,
    pub panes: HashMap<PaneKind, PaneState>,
}

impl Workspace {
    /// Create the fixed three-tab layout, each pane fetching independently.
    pub fn new(config: &AppConfig) -> Self {
        let mut panes = HashMap::new();
        panes.insert(
            PaneKind::CasesDeaths,
            PaneState::Scatter(ScatterPaneState::new(ScatterMetric::Deaths, config)),
        );
        panes.insert(
            PaneKind::CasesMaskUse,
            PaneState::Scatter(ScatterPaneState::new(ScatterMetric::MaskUse, config)),
        );
        panes.insert(
            PaneKind::MaskPreference,
            PaneState::MaskPreference(MaskPreferencePaneState::new(config)),
        );

        Self {
            dock_state: egui_dock::DockState::new(PaneKind::ALL.to_vec()),
            panes,
        }
    }

    /// The mask-preference pane state, for the toolbar's selection control
    pub fn mask_pane(&self) -> Option<&MaskPreferencePaneState> {
        match self.panes.get(&PaneKind::MaskPreference) {
            Some(PaneState::MaskPreference(state)) => Some(state),
            _ => None,
        }
    }

    pub fn mask_pane_mut(&mut self) -> Option<&mut MaskPreferencePaneState> {
        match self.panes.get_mut(&PaneKind::MaskPreference) {
            Some(PaneState::MaskPreference(state)) => Some(state),
            _ => None,
        }
    }
}
