//! Floating "Camera" panel with one slider per camera axis

use eframe::egui;
use crate::core::camera::Axis;
use crate::core::controls::{axis_label, slider_range, PANEL_TITLE};
use crate::core::PlotState;
use super::ScatterApp;

impl ScatterApp {
    pub(crate) fn render_camera_panel(&mut self, ctx: &egui::Context) {
        egui::Window::new(PANEL_TITLE)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 36.0))
            .default_open(true)
            .resizable(false)
            .show(ctx, |ui| {
                for &axis in Axis::ALL {
                    let mut value = self.state.controls.value(axis);
                    let response = ui.add(
                        egui::Slider::new(&mut value, slider_range())
                            .text(axis_label(axis))
                            .clamping(egui::SliderClamping::Always),
                    );
                    if response.changed() {
                        let PlotState { controls, camera, .. } = &mut self.state;
                        controls.set(axis, value, camera);
                    }
                }

                ui.separator();

                let mut marker = self.state.origin_marker_visible();
                if ui.checkbox(&mut marker, "Origin marker").changed() {
                    self.state.set_origin_marker_visible(marker);
                }
            });
    }
}
