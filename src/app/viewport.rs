//! Scene viewport: CPU painter over the projected draw list

use eframe::egui;
use crate::core::{DrawShape, Viewport};
use crate::theme::to_color32;
use super::ScatterApp;

/// Smallest radius worth painting
const MIN_RADIUS_PX: f32 = 0.5;

impl ScatterApp {
    pub(crate) fn render_scene(&self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
        let rect = response.rect;

        let viewport = Viewport::new(rect.width(), rect.height());

        // Far to near, so nearer meshes paint over farther ones
        for item in self.state.draw_list(viewport) {
            let center = rect.min + egui::vec2(item.center[0], item.center[1]);
            let extent = item.half_extent_px.max(MIN_RADIUS_PX);
            let color = to_color32(item.color);

            match item.shape {
                DrawShape::Circle => {
                    painter.circle_filled(center, extent, color);
                }
                DrawShape::Square => {
                    let square =
                        egui::Rect::from_center_size(center, egui::Vec2::splat(extent * 2.0));
                    painter.rect_filled(square, 0.0, color);
                }
            }
        }
    }
}
