//! Dark theme for the plot window and the floating camera panel

use egui::Color32;

use crate::core::Rgb;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);           // scene clear color
    pub const BG_PANEL: Color32 = Color32::from_rgb(26, 26, 26);          // floating panel
    pub const BG_HOVER: Color32 = Color32::from_rgb(48, 48, 48);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 235);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);

    // === Borders & slider accent ===
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);
    pub const ACCENT: Color32 = Color32::from_rgb(47, 161, 214);
}

/// Scene color to egui color (opaque)
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

pub fn scene_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.inactive.bg_fill = BG_HOVER;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.selection.bg_fill = ACCENT;

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
