//! Chart canvas
//!
//! Bridges the pure scene geometry to egui's painter. The canvas allocates
//! a fixed-size region, offsets all chart-local coordinates by the margins,
//! and paints marks, axes, legends, and callouts in one pass per frame.
//! Hit testing runs against the same local coordinates the scenes were
//! built in, so geometry and interaction can never disagree.

use std::f32::consts::FRAC_PI_2;

use egui::{
    epaint::TextShape, Align2, Color32, FontId, Painter, Pos2, Rect, Response, Sense, Stroke,
    StrokeKind, Ui, Vec2,
};

use crate::chart::annotations::CalloutMark;
use crate::chart::axis::{AxisOrientation, AxisSpec};
use crate::chart::legend::{Legend, LEGEND_ROW_PITCH};
use crate::chart::marks::{BarMark, CircleMark, LabelMark};
use crate::config::Margins;

/// Fill color of the survey bars
pub const BAR_FILL: Color32 = Color32::from_rgb(255, 165, 0);

/// Stroke drawn around the hovered mark
const HOVER_STROKE: Stroke = Stroke {
    width: 2.0,
    color: Color32::BLACK,
};

const TICK_LENGTH: f32 = 6.0;
const CALLOUT_WRAP_WIDTH: f32 = 180.0;

/// An allocated drawing region with its chart-local origin.
pub struct ChartCanvas {
    pub response: Response,
    painter: Painter,
    origin: Pos2,
}

impl ChartCanvas {
    /// Allocate `outer` pixels and place the local origin inside the margins.
    pub fn allocate(ui: &mut Ui, outer: Vec2, margins: &Margins) -> Self {
        let (response, painter) = ui.allocate_painter(outer, Sense::hover());
        let origin = response.rect.min + Vec2::new(margins.left, margins.top);
        Self {
            response,
            painter,
            origin,
        }
    }

    /// Chart-local to screen coordinates
    fn to_screen(&self, local: Pos2) -> Pos2 {
        self.origin + local.to_vec2()
    }

    /// Pointer position in chart-local coordinates, if hovering the canvas
    pub fn pointer(&self) -> Option<Pos2> {
        self.response
            .hover_pos()
            .map(|screen| (screen - self.origin).to_pos2())
    }

    pub fn paint_circle(&self, mark: &CircleMark, outlined: bool) {
        let center = self.to_screen(mark.center);
        self.painter.circle_filled(center, mark.radius, mark.fill);
        if outlined {
            self.painter
                .circle(center, mark.radius, Color32::TRANSPARENT, HOVER_STROKE);
        }
    }

    pub fn paint_label(&self, mark: &LabelMark) {
        self.painter.text(
            self.to_screen(mark.position),
            Align2::CENTER_CENTER,
            &mark.text,
            FontId::proportional(10.0),
            Color32::WHITE,
        );
    }

    /// Paint a bar at animation `progress` in `[0, 1]`, growing away from
    /// the zero line toward its final extent.
    pub fn paint_bar(&self, mark: &BarMark, zero_x: f32, progress: f32, outlined: bool) {
        let full = mark.rect;
        let width = full.width() * progress.clamp(0.0, 1.0);
        let local = if full.min.x >= zero_x {
            Rect::from_min_size(full.min, Vec2::new(width, full.height()))
        } else {
            Rect::from_min_size(
                Pos2::new(zero_x - width, full.min.y),
                Vec2::new(width, full.height()),
            )
        };
        let rect = Rect::from_min_max(self.to_screen(local.min), self.to_screen(local.max));
        self.painter
            .rect_filled(rect, egui::CornerRadius::ZERO, BAR_FILL);
        if outlined {
            self.painter
                .rect_stroke(rect, egui::CornerRadius::ZERO, HOVER_STROKE, StrokeKind::Outside);
        }
    }

    /// Paint a baseline, its ticks and labels, and the optional title.
    pub fn paint_axis(&self, axis: &AxisSpec, color: Color32) {
        let stroke = Stroke::new(1.0, color);
        let label_font = FontId::proportional(12.0);
        match axis.orientation {
            AxisOrientation::Bottom => {
                let y = axis.offset;
                self.painter.line_segment(
                    [
                        self.to_screen(Pos2::new(axis.start, y)),
                        self.to_screen(Pos2::new(axis.end, y)),
                    ],
                    stroke,
                );
                for tick in &axis.ticks {
                    let x = tick.position;
                    self.painter.line_segment(
                        [
                            self.to_screen(Pos2::new(x, y)),
                            self.to_screen(Pos2::new(x, y + TICK_LENGTH)),
                        ],
                        stroke,
                    );
                    if let Some(label) = &tick.label {
                        self.painter.text(
                            self.to_screen(Pos2::new(x, y + TICK_LENGTH + 2.0)),
                            Align2::CENTER_TOP,
                            label,
                            label_font.clone(),
                            color,
                        );
                    }
                }
                if let Some(title) = &axis.title {
                    let mid = (axis.start + axis.end) / 2.0;
                    self.painter.text(
                        self.to_screen(Pos2::new(mid, y + 40.0)),
                        Align2::CENTER_CENTER,
                        title,
                        FontId::proportional(14.0),
                        color,
                    );
                }
            }
            AxisOrientation::Left => {
                let x = axis.offset;
                self.painter.line_segment(
                    [
                        self.to_screen(Pos2::new(x, axis.start)),
                        self.to_screen(Pos2::new(x, axis.end)),
                    ],
                    stroke,
                );
                for tick in &axis.ticks {
                    let y = tick.position;
                    self.painter.line_segment(
                        [
                            self.to_screen(Pos2::new(x - TICK_LENGTH, y)),
                            self.to_screen(Pos2::new(x, y)),
                        ],
                        stroke,
                    );
                    if let Some(label) = &tick.label {
                        if axis.labels_inside {
                            self.painter.text(
                                self.to_screen(Pos2::new(x + 10.0, y)),
                                Align2::LEFT_CENTER,
                                label,
                                label_font.clone(),
                                color,
                            );
                        } else {
                            self.painter.text(
                                self.to_screen(Pos2::new(x - TICK_LENGTH - 2.0, y)),
                                Align2::RIGHT_CENTER,
                                label,
                                label_font.clone(),
                                color,
                            );
                        }
                    }
                }
                if let Some(title) = &axis.title {
                    self.paint_rotated_title(title, x, (axis.start + axis.end) / 2.0, color);
                }
            }
        }
    }

    /// Left-axis titles run bottom to top, rotated a quarter turn.
    fn paint_rotated_title(&self, title: &str, axis_x: f32, mid_y: f32, color: Color32) {
        let galley = self
            .painter
            .layout_no_wrap(title.to_string(), FontId::proportional(14.0), color);
        let pos = self.to_screen(Pos2::new(axis_x - 60.0, mid_y + galley.size().x / 2.0));
        self.painter
            .add(TextShape::new(pos, galley, color).with_angle(-FRAC_PI_2));
    }

    pub fn paint_legend(&self, legend: &Legend, color: Color32) {
        let base = Pos2::new(legend.origin.x, legend.origin.y);
        self.painter.text(
            self.to_screen(base + Vec2::new(7.0, -8.0)),
            Align2::LEFT_BOTTOM,
            &legend.title,
            FontId::proportional(14.0),
            color,
        );
        for (row, entry) in legend.entries.iter().enumerate() {
            let y = base.y + 10.0 + row as f32 * LEGEND_ROW_PITCH;
            self.painter.circle_filled(
                self.to_screen(Pos2::new(base.x + 10.0, y)),
                4.0,
                entry.color,
            );
            self.painter.text(
                self.to_screen(Pos2::new(base.x + 25.0, y)),
                Align2::LEFT_CENTER,
                &entry.label,
                FontId::proportional(12.0),
                color,
            );
        }
    }

    pub fn paint_callout(&self, callout: &CalloutMark, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(callout.anchor), self.to_screen(callout.note_pos)],
            Stroke::new(1.0, color),
        );
        let note = self.to_screen(callout.note_pos);
        self.painter.text(
            note,
            Align2::LEFT_BOTTOM,
            callout.title,
            FontId::proportional(13.0),
            color,
        );
        let galley = self.painter.layout(
            callout.label.to_string(),
            FontId::proportional(12.0),
            color,
            CALLOUT_WRAP_WIDTH,
        );
        self.painter.galley(note + Vec2::new(0.0, 2.0), galley, color);
    }
}

/// Topmost circle under the pointer, in chart-local coordinates.
///
/// Later records paint over earlier ones, so the search runs back to front.
pub fn hit_test_circles(circles: &[CircleMark], pointer: Pos2) -> Option<usize> {
    circles
        .iter()
        .enumerate()
        .rev()
        .find(|(_, mark)| mark.center.distance(pointer) <= mark.radius)
        .map(|(index, _)| index)
}

/// Bar under the pointer, tested against the final (unanimated) extent.
pub fn hit_test_bars(bars: &[BarMark], pointer: Pos2) -> Option<usize> {
    bars.iter().position(|mark| mark.rect.contains(pointer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MaskCategory;

    fn circle(x: f32, y: f32, radius: f32) -> CircleMark {
        CircleMark {
            center: Pos2::new(x, y),
            radius,
            fill: Color32::RED,
            record_index: 0,
        }
    }

    #[test]
    fn test_circle_hit_prefers_topmost() {
        let circles = vec![circle(100.0, 100.0, 20.0), circle(105.0, 100.0, 20.0)];
        // Both circles cover this point; the later-painted one wins.
        assert_eq!(hit_test_circles(&circles, Pos2::new(100.0, 100.0)), Some(1));
        // Only the first covers far left of the overlap.
        assert_eq!(hit_test_circles(&circles, Pos2::new(82.0, 100.0)), Some(0));
        assert_eq!(hit_test_circles(&circles, Pos2::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_circle_hit_uses_mark_radius() {
        let circles = vec![circle(50.0, 50.0, 10.0)];
        assert_eq!(hit_test_circles(&circles, Pos2::new(59.9, 50.0)), Some(0));
        assert_eq!(hit_test_circles(&circles, Pos2::new(60.5, 50.0)), None);
    }

    #[test]
    fn test_bar_hit() {
        let bars = vec![BarMark {
            rect: Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(400.0, 180.0)),
            category: MaskCategory::Always,
            value: 0.4,
        }];
        assert_eq!(hit_test_bars(&bars, Pos2::new(200.0, 150.0)), Some(0));
        assert_eq!(hit_test_bars(&bars, Pos2::new(200.0, 300.0)), None);
    }
}
