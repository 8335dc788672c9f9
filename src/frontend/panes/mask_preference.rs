//! Mask-preference bar chart pane
//!
//! Unlike the scatter panes this chart starts empty: it renders nothing
//! until the toolbar's state dropdown first picks a state. Every selection
//! tears the previous bars down and rebuilds the scene, restarting the
//! grow animation from the zero line.

use std::time::{Duration, Instant};

use egui::{Ui, Vec2};

use crate::chart::selection::{SelectOutcome, SelectionDriver};
use crate::config::{AppConfig, ChartConfig};
use crate::data::loader::{DatasetHandle, LoadStatus};
use crate::data::source::HttpCsvSource;
use crate::frontend::canvas::{hit_test_bars, ChartCanvas};
use crate::frontend::state::AppAction;
use crate::frontend::tooltip::{bar_tooltip, TooltipContent, TooltipState};
use crate::frontend::workspace::PaneKind;

/// State for the bar chart pane
pub struct MaskPreferencePaneState {
    handle: DatasetHandle,
    driver: SelectionDriver,
    tooltip: TooltipState,
    /// When the current grow animation started; `None` until first selection
    grow_started: Option<Instant>,
}

impl MaskPreferencePaneState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            handle: DatasetHandle::spawn(Box::new(HttpCsvSource::new(
                config.dataset_url.clone(),
            ))),
            driver: SelectionDriver::new(),
            tooltip: TooltipState::default(),
            grow_started: None,
        }
    }

    /// Drop the selection and start a fresh fetch.
    pub fn reload(&mut self, config: &AppConfig) {
        self.handle = DatasetHandle::spawn(Box::new(HttpCsvSource::new(
            config.dataset_url.clone(),
        )));
        self.driver = SelectionDriver::new();
        self.grow_started = None;
    }

    /// Apply a dropdown selection. Unmatched names leave the pane as is.
    pub fn select(&mut self, name: &str, chart: &ChartConfig) {
        let Some(dataset) = self.handle.dataset() else {
            tracing::warn!(state = name, "selection before dataset is ready");
            return;
        };
        if self.driver.select(dataset, name, chart) == SelectOutcome::Redrawn {
            self.grow_started = Some(Instant::now());
        }
    }

    /// State names for the dropdown, in dataset order
    pub fn state_names(&self) -> Vec<String> {
        self.handle
            .dataset()
            .map(|dataset| {
                dataset
                    .state_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn selected_state(&self) -> Option<&str> {
        self.driver.selected_state()
    }
}

pub fn render(
    state: &mut MaskPreferencePaneState,
    config: &AppConfig,
    ui: &mut Ui,
) -> Vec<AppAction> {
    let mut actions = Vec::new();
    state.handle.poll();

    match state.handle.status() {
        LoadStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading dataset...");
            });
            ui.ctx().request_repaint_after(Duration::from_millis(100));
        }
        LoadStatus::Failed(message) => {
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("Failed to load dataset: {message}"),
            );
            if ui.button("Retry").clicked() {
                actions.push(AppAction::Reload(PaneKind::MaskPreference));
            }
        }
        LoadStatus::Ready(_) => {
            let Some(scene) = state.driver.scene() else {
                ui.label("Select a state above to see its mask-use survey breakdown.");
                return actions;
            };
            let chart = &config.chart;

            let progress = match state.grow_started {
                Some(started) if chart.bar_growth_secs > 0.0 => {
                    (started.elapsed().as_secs_f32() / chart.bar_growth_secs).min(1.0)
                }
                _ => 1.0,
            };

            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let canvas = ChartCanvas::allocate(
                        ui,
                        Vec2::new(chart.canvas_width, chart.canvas_height),
                        &chart.bar_margins,
                    );
                    let text_color = ui.visuals().text_color();

                    let hovered_index = canvas
                        .pointer()
                        .and_then(|pointer| hit_test_bars(&scene.bars, pointer));

                    for (index, bar) in scene.bars.iter().enumerate() {
                        canvas.paint_bar(
                            bar,
                            scene.zero_x,
                            progress,
                            hovered_index == Some(index),
                        );
                    }
                    canvas.paint_axis(&scene.x_axis, text_color);
                    canvas.paint_axis(&scene.y_axis, text_color);

                    let hovered = hovered_index.and_then(|index| {
                        let bar = &scene.bars[index];
                        canvas.response.hover_pos().map(|anchor| TooltipContent {
                            text: bar_tooltip(bar.category, bar.value),
                            anchor,
                        })
                    });
                    let dt = ui.input(|i| i.stable_dt);
                    state.tooltip.update(
                        hovered,
                        dt,
                        chart.tooltip_fade_in_secs,
                        chart.tooltip_fade_out_secs,
                    );
                    state.tooltip.show(ui.ctx(), ui.id().with("tooltip"));
                    if state.tooltip.is_fading() {
                        ui.ctx().request_repaint();
                    }
                });

            if progress < 1.0 {
                ui.ctx().request_repaint();
            }
        }
    }

    actions
}
