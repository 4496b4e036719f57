//! Options scatter app
//!
//! The egui app that runs on both native and WASM platforms. All state lives
//! in one [`PlotState`] built at startup; the camera panel writes into it and
//! the viewport reads it every frame.

mod controls;
mod header;
mod viewport;

use eframe::egui;
use tracing::info;

use crate::core::{PlotState, TradeRecord};
use crate::theme::{colors, scene_visuals};

pub struct ScatterApp {
    pub(crate) state: PlotState,
    pub(crate) fps_counter: header::FpsCounter,
}

impl ScatterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, trades: &[TradeRecord]) -> Self {
        cc.egui_ctx.set_visuals(scene_visuals());

        let state = PlotState::init(trades);
        info!(spheres = state.spheres.len(), "Options scatter ready");

        Self {
            state,
            fps_counter: header::FpsCounter::new(),
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous repaint: the scene is redrawn every display refresh
        ctx.request_repaint();

        self.fps_counter.tick(ctx.input(|i| i.time));

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(4.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        // Floating panel, shown before the central panel so it stays on top
        self.render_camera_panel(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                self.render_scene(ui);
            });
    }
}
