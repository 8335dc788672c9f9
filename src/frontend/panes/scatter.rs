//! Scatter chart panes
//!
//! One pane state serves both scatter charts; the metric decides the y
//! axis, its fixed domain, and whether the static callouts are drawn. The
//! scene is built once when the dataset arrives and only rebuilt after a
//! reload, so every frame paints the same precomputed geometry.

use std::time::Duration;

use egui::{Ui, Vec2};

use crate::chart::marks::{build_scatter, ScatterMetric, ScatterScene};
use crate::config::AppConfig;
use crate::data::loader::{DatasetHandle, LoadStatus};
use crate::data::source::HttpCsvSource;
use crate::frontend::canvas::{hit_test_circles, ChartCanvas};
use crate::frontend::state::AppAction;
use crate::frontend::tooltip::{scatter_tooltip, TooltipContent, TooltipState};
use crate::frontend::workspace::PaneKind;

/// State for one scatter chart pane
pub struct ScatterPaneState {
    metric: ScatterMetric,
    handle: DatasetHandle,
    scene: Option<ScatterScene>,
    tooltip: TooltipState,
}

impl ScatterPaneState {
    pub fn new(metric: ScatterMetric, config: &AppConfig) -> Self {
        Self {
            metric,
            handle: DatasetHandle::spawn(Box::new(HttpCsvSource::new(
                config.dataset_url.clone(),
            ))),
            scene: None,
            tooltip: TooltipState::default(),
        }
    }

    /// Drop the scene and start a fresh fetch.
    pub fn reload(&mut self, config: &AppConfig) {
        self.handle = DatasetHandle::spawn(Box::new(HttpCsvSource::new(
            config.dataset_url.clone(),
        )));
        self.scene = None;
    }

    /// The pane kind this state renders under
    pub fn kind(&self) -> PaneKind {
        match self.metric {
            ScatterMetric::Deaths => PaneKind::CasesDeaths,
            ScatterMetric::MaskUse => PaneKind::CasesMaskUse,
        }
    }
}

pub fn render(state: &mut ScatterPaneState, config: &AppConfig, ui: &mut Ui) -> Vec<AppAction> {
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
                actions.push(AppAction::Reload(state.kind()));
            }
        }
        LoadStatus::Ready(dataset) => {
            if state.scene.is_none() {
                state.scene = Some(build_scatter(dataset, state.metric, &config.chart));
            }
            let Some(scene) = state.scene.as_ref() else {
                return actions;
            };
            let chart = &config.chart;

            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let canvas = ChartCanvas::allocate(
                        ui,
                        Vec2::new(chart.canvas_width, chart.canvas_height),
                        &chart.scatter_margins,
                    );
                    let text_color = ui.visuals().text_color();

                    let hovered_index = canvas
                        .pointer()
                        .and_then(|pointer| hit_test_circles(&scene.circles, pointer));

                    canvas.paint_axis(&scene.x_axis, text_color);
                    canvas.paint_axis(&scene.y_axis, text_color);
                    for (index, circle) in scene.circles.iter().enumerate() {
                        canvas.paint_circle(circle, hovered_index == Some(index));
                    }
                    for label in &scene.labels {
                        canvas.paint_label(label);
                    }
                    canvas.paint_legend(&scene.legend, text_color);
                    for callout in &scene.callouts {
                        canvas.paint_callout(callout, text_color);
                    }

                    let hovered = hovered_index.and_then(|index| {
                        let record_index = scene.circles[index].record_index;
                        canvas.response.hover_pos().map(|anchor| TooltipContent {
                            text: scatter_tooltip(&dataset.records()[record_index]),
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
        }
    }

    actions
}
