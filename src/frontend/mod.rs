//! Frontend module
//!
//! The egui application shell: a toolbar carrying the title, the state
//! selection dropdown, and app-level controls, above an egui_dock area
//! with the three chart panes. Panes communicate upward through
//! [`AppAction`](state::AppAction) values collected each frame.

pub mod canvas;
pub mod panes;
pub mod state;
pub mod tooltip;
pub mod workspace;

use egui::Visuals;
use egui_dock::{DockArea, Style};

use crate::config::{AppConfig, AppState};
use crate::frontend::state::AppAction;
use crate::frontend::workspace::tab_viewer::WorkspaceTabViewer;
use crate::frontend::workspace::{PaneState, Workspace};

/// Placeholder text for the dropdown before any state is selected
const SELECT_PROMPT: &str = "Select a State";

/// Top-level application
pub struct MaskVizApp {
    config: AppConfig,
    app_state: AppState,
    workspace: Workspace,
}

impl MaskVizApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, app_state: AppState) -> Self {
        cc.egui_ctx.set_visuals(if app_state.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        let workspace = Workspace::new(&config);
        Self {
            config,
            app_state,
            workspace,
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) -> Vec<AppAction> {
        let mut actions = Vec::new();
        ui.horizontal(|ui| {
            ui.heading("COVID-19 Cases and Mask Usage by State");
            ui.separator();

            let names = self
                .workspace
                .mask_pane()
                .map(|pane| pane.state_names())
                .unwrap_or_default();
            let selected = self
                .workspace
                .mask_pane()
                .and_then(|pane| pane.selected_state().map(str::to_string));
            let dropdown = egui::ComboBox::from_id_salt("select-state")
                .selected_text(selected.as_deref().unwrap_or(SELECT_PROMPT));
            dropdown.show_ui(ui, |ui| {
                for name in &names {
                    let is_selected = selected.as_deref() == Some(name.as_str());
                    if ui.selectable_label(is_selected, name).clicked() {
                        actions.push(AppAction::SelectState(name.clone()));
                    }
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reload data").clicked() {
                    for kind in workspace::PaneKind::ALL {
                        actions.push(AppAction::Reload(kind));
                    }
                }
                let mut dark_mode = self.app_state.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                    actions.push(AppAction::SetDarkMode(dark_mode));
                }
            });
        });
        actions
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: AppAction) {
        match action {
            AppAction::SelectState(name) => {
                let chart = self.config.chart.clone();
                if let Some(pane) = self.workspace.mask_pane_mut() {
                    pane.select(&name, &chart);
                }
            }
            AppAction::Reload(kind) => match self.workspace.panes.get_mut(&kind) {
                Some(PaneState::Scatter(pane)) => pane.reload(&self.config),
                Some(PaneState::MaskPreference(pane)) => pane.reload(&self.config),
                None => {}
            },
            AppAction::SetDarkMode(dark_mode) => {
                self.app_state.dark_mode = dark_mode;
                ctx.set_visuals(if dark_mode {
                    Visuals::dark()
                } else {
                    Visuals::light()
                });
                if let Err(e) = self.app_state.save() {
                    tracing::warn!("Failed to save app state: {}", e);
                }
            }
        }
    }
}

impl eframe::App for MaskVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            actions.extend(self.toolbar(ui));
        });

        let Workspace { dock_state, panes } = &mut self.workspace;
        let mut viewer = WorkspaceTabViewer {
            config: &self.config,
            panes,
            actions: Vec::new(),
        };
        DockArea::new(dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut viewer);
        actions.extend(viewer.actions);

        for action in actions {
            self.handle_action(ctx, action);
        }
    }
}
