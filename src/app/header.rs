//! Header bar with scene counts and frame rate

use std::collections::VecDeque;

use eframe::egui;
use crate::theme::colors;
use super::ScatterApp;

impl ScatterApp {
    pub(crate) fn render_header(&self, ui: &mut egui::Ui) {
        let report = &self.state.report;

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Options trades").color(colors::TEXT_PRIMARY));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_PRIMARY),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                if report.defects > 0 {
                    ui.label(
                        egui::RichText::new(format!("{} invalid", report.defects))
                            .color(egui::Color32::from_rgb(200, 100, 100)),
                    );
                    ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                }

                ui.label(
                    egui::RichText::new(format!("{} without delta", report.skipped))
                        .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!("{} spheres", report.emitted))
                        .color(colors::TEXT_MUTED),
                );
            });
        });
    }
}

const FPS_WINDOW: usize = 60;

/// FPS over the last [`FPS_WINDOW`] frame times (seconds)
pub struct FpsCounter {
    frames: VecDeque<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::with_capacity(FPS_WINDOW + 1),
        }
    }

    pub fn tick(&mut self, now: f64) {
        self.frames.push_back(now);
        if self.frames.len() > FPS_WINDOW {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
