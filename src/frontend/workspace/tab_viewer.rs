//! TabViewer implementation for the workspace
//!
//! Dispatches rendering to individual pane modules based on PaneKind.

use std::collections::HashMap;

use egui::{Ui, WidgetText};

use crate::config::AppConfig;
use crate::frontend::panes;
use crate::frontend::state::AppAction;

use super::{PaneKind, PaneState};

/// Tab viewer that bridges egui_dock with the pane render functions.
pub struct WorkspaceTabViewer<'a> {
    pub config: &'a AppConfig,
    pub panes: &'a mut HashMap<PaneKind, PaneState>,
    pub actions: Vec<AppAction>,
}

impl egui_dock::TabViewer for WorkspaceTabViewer<'_> {
    type Tab = PaneKind;

    fn title(&mut self, tab: &mut PaneKind) -> WidgetText {
        WidgetText::from(tab.title())
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut PaneKind) {
        let Some(state) = self.panes.get_mut(tab) else {
            ui.label("Pane state not found");
            return;
        };

        let pane_actions = match state {
            PaneState::Scatter(s) => panes::scatter::render(s, self.config, ui),
            PaneState::MaskPreference(s) => panes::mask_preference::render(s, self.config, ui),
        };

        self.actions.extend(pane_actions);
    }

    fn closeable(&mut self, _tab: &mut PaneKind) -> bool {
        // The three charts are fixed
        false
    }
}
