//! Hover tooltips
//!
//! Tooltip opacity fades linearly toward a fixed shown level while a mark
//! is hovered and back to zero when the pointer leaves, with a slower
//! fade-out than fade-in. The fade is cosmetic: hit testing and content
//! selection never depend on it.

use egui::{Align2, Context, Frame, Id, Order, Pos2};

use crate::types::{MaskCategory, StateRecord};

/// Opacity a fully faded-in tooltip settles at
pub const SHOWN_OPACITY: f32 = 0.9;

/// Offset of the tooltip body from the pointer
const POINTER_OFFSET: egui::Vec2 = egui::Vec2::new(16.0, 12.0);

/// What the tooltip currently says and where it is anchored
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub text: String,
    pub anchor: Pos2,
}

/// Per-pane tooltip fade state.
#[derive(Debug, Default)]
pub struct TooltipState {
    content: Option<TooltipContent>,
    opacity: f32,
}

impl TooltipState {
    /// Advance the fade by `dt` seconds.
    ///
    /// While `hovered` is `Some` the content is replaced immediately and
    /// opacity climbs toward [`SHOWN_OPACITY`]; otherwise it decays toward
    /// zero and the stale content is dropped once fully faded.
    pub fn update(&mut self, hovered: Option<TooltipContent>, dt: f32, fade_in: f32, fade_out: f32) {
        match hovered {
            Some(content) => {
                self.content = Some(content);
                let step = if fade_in > 0.0 {
                    SHOWN_OPACITY * dt / fade_in
                } else {
                    SHOWN_OPACITY
                };
                self.opacity = (self.opacity + step).min(SHOWN_OPACITY);
            }
            None => {
                let step = if fade_out > 0.0 {
                    SHOWN_OPACITY * dt / fade_out
                } else {
                    SHOWN_OPACITY
                };
                self.opacity = (self.opacity - step).max(0.0);
                if self.opacity == 0.0 {
                    self.content = None;
                }
            }
        }
    }

    pub fn visible(&self) -> bool {
        self.opacity > 0.0 && self.content.is_some()
    }

    /// Whether the fade is still moving and the pane should keep repainting
    pub fn is_fading(&self) -> bool {
        if self.content.is_some() {
            self.opacity < SHOWN_OPACITY
        } else {
            self.opacity > 0.0
        }
    }

    /// Paint the tooltip as a floating, non-interactable area.
    pub fn show(&self, ctx: &Context, id: Id) {
        let Some(content) = &self.content else {
            return;
        };
        if self.opacity <= 0.0 {
            return;
        }
        egui::Area::new(id)
            .order(Order::Tooltip)
            .fixed_pos(content.anchor + POINTER_OFFSET)
            .pivot(Align2::LEFT_TOP)
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_opacity(self.opacity);
                Frame::popup(&ctx.style()).show(ui, |ui| {
                    ui.label(&content.text);
                });
            });
    }
}

/// Round half away from zero, matching the displayed death counts.
fn round_half_up(value: f64) -> f64 {
    value.round()
}

/// Integer-style formatting with no separators
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Rounded integer formatting for noisy metrics
pub fn format_rounded(value: f64) -> String {
    format!("{}", round_half_up(value) as i64)
}

/// Tooltip body for a hovered scatter circle
pub fn scatter_tooltip(record: &StateRecord) -> String {
    format!(
        "State: {}\nCases: {}\nDeaths: {}\nMask Uses in 100K: {}\nPopulation: {}",
        record.state,
        format_plain(record.cases),
        format_rounded(record.deaths),
        format_plain(record.mask_use),
        format_plain(record.population),
    )
}

/// Tooltip body for a hovered bar
pub fn bar_tooltip(category: MaskCategory, value: f64) -> String {
    format!(
        "Mask Preference from 250K Survey {}: {}%",
        category.label(),
        format_rounded(value * 100.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StateRecord {
        StateRecord {
            state: "Ohio".to_string(),
            state_code: "OH".to_string(),
            region: "Midwest".to_string(),
            cases: 120_000.0,
            deaths: 1234.6,
            mask_use: 90_000.0,
            population: 11_700_000.0,
            mask_shares: [0.4, 0.25, 0.2, 0.1, 0.05],
        }
    }

    #[test]
    fn test_scatter_tooltip_rounds_deaths_only() {
        let text = scatter_tooltip(&record());
        assert!(text.contains("State: Ohio"));
        assert!(text.contains("Cases: 120000"));
        assert!(text.contains("Deaths: 1235"));
        assert!(text.contains("Mask Uses in 100K: 90000"));
        assert!(text.contains("Population: 11700000"));
    }

    #[test]
    fn test_bar_tooltip_percentage() {
        let text = bar_tooltip(MaskCategory::Sometimes, 0.157);
        assert_eq!(
            text,
            "Mask Preference from 250K Survey SOMETIMES: 16%"
        );
    }

    #[test]
    fn test_fade_in_reaches_shown_opacity() {
        let mut state = TooltipState::default();
        let content = TooltipContent {
            text: "x".to_string(),
            anchor: Pos2::ZERO,
        };
        // Five 0.05s frames cover the 0.2s fade-in and then clamp.
        for _ in 0..5 {
            state.update(Some(content.clone()), 0.05, 0.2, 0.5);
        }
        assert!((state.opacity - SHOWN_OPACITY).abs() < 1e-5);
        assert!(state.visible());
    }

    #[test]
    fn test_fade_out_is_slower_and_clears_content() {
        let mut state = TooltipState::default();
        let content = TooltipContent {
            text: "x".to_string(),
            anchor: Pos2::ZERO,
        };
        state.update(Some(content), 1.0, 0.2, 0.5);
        assert!(state.visible());

        // After half the fade-out window the tooltip is still partly shown.
        state.update(None, 0.25, 0.2, 0.5);
        assert!(state.visible());
        assert!(state.opacity < SHOWN_OPACITY);

        state.update(None, 0.3, 0.2, 0.5);
        assert!(!state.visible());
        assert!(state.content.is_none());
    }
}
