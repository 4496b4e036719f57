//! Plot state and per-frame draw list
//!
//! [`PlotState::init`] is the one-time setup: configure the scales from the
//! full dataset, then build the scene. [`PlotState::draw_list`] is what the
//! render loop asks for every frame.

use glam::Vec3;
use tracing::info;

use super::camera::{Camera, Projected, Viewport};
use super::controls::CameraControls;
use super::scales::{Rgb, ScaleBank};
use super::scene::{
    BuildReport, Mesh, MeshId, Scene, SceneBuilder, Shape, ORIGIN_MARKER_COLOR,
    ORIGIN_MARKER_SIZE,
};
use super::trades::TradeRecord;

/// Everything the control panel and render loop share
pub struct PlotState {
    pub scene: Scene,
    pub camera: Camera,
    pub controls: CameraControls,
    pub spheres: Vec<MeshId>,
    pub origin_marker: MeshId,
    pub report: BuildReport,
}

impl PlotState {
    pub fn init(trades: &[TradeRecord]) -> Self {
        let scales = ScaleBank::from_trades(trades);

        let mut scene = Scene::new();
        let origin_marker = scene.add(Mesh::cube(
            Vec3::ZERO,
            ORIGIN_MARKER_SIZE,
            ORIGIN_MARKER_COLOR,
        ));
        let build = SceneBuilder::new(&scales).build(trades, &mut scene);

        info!(
            total = build.report.total,
            spheres = build.report.emitted,
            skipped = build.report.skipped,
            defects = build.report.defects,
            "Scene built"
        );

        let camera = Camera::default();
        let controls = CameraControls::from_camera(&camera);

        Self {
            scene,
            camera,
            controls,
            spheres: build.spheres,
            origin_marker,
            report: build.report,
        }
    }

    pub fn origin_marker_visible(&self) -> bool {
        self.scene
            .get(self.origin_marker)
            .is_some_and(|m| m.visible)
    }

    pub fn set_origin_marker_visible(&mut self, visible: bool) {
        if let Some(marker) = self.scene.get_mut(self.origin_marker) {
            marker.visible = visible;
        }
    }

    /// Visible meshes projected through the current camera, farthest first
    pub fn draw_list(&self, viewport: Viewport) -> Vec<DrawItem> {
        let mut items: Vec<DrawItem> = self
            .scene
            .meshes()
            .iter()
            .filter(|m| m.visible)
            .filter_map(|mesh| {
                let projected = self.camera.project(mesh.position, viewport)?;
                Some(DrawItem::new(mesh, projected))
            })
            .collect();
        items.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        items
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawShape {
    Circle,
    Square,
}

/// One mesh ready for the 2D painter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub shape: DrawShape,
    pub center: [f32; 2],
    /// Radius (circle) or half edge (square) in pixels
    pub half_extent_px: f32,
    pub depth: f32,
    pub color: Rgb,
}

impl DrawItem {
    fn new(mesh: &Mesh, projected: Projected) -> Self {
        let shape = match mesh.shape {
            Shape::Sphere { .. } => DrawShape::Circle,
            Shape::Cube { .. } => DrawShape::Square,
        };
        Self {
            shape,
            center: projected.screen,
            half_extent_px: mesh.half_extent() * projected.pixels_per_unit,
            depth: projected.depth,
            color: mesh.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::Axis;
    use crate::core::trades::{demo_trades, RawNumber};
    use approx::assert_relative_eq;

    fn trade(delta: &str, volume: f64, time: &str) -> TradeRecord {
        TradeRecord {
            delta: Some(RawNumber::Text(delta.to_string())),
            volume: Some(RawNumber::Number(volume)),
            created_time: time.to_string(),
            underlying_symbol: "SPY".to_string(),
        }
    }

    #[test]
    fn test_init_builds_marker_and_spheres() {
        let trades = vec![
            trade("1", 1.0, "2023-01-01"),
            trade("-1", 2.0, "2023-02-01"),
        ];
        let state = PlotState::init(&trades);
        assert_eq!(state.scene.len(), 3);
        assert_eq!(state.spheres.len(), 2);
        assert!(state.origin_marker_visible());
        assert_eq!(state.camera.position, Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_draw_list_is_far_to_near() {
        let state = PlotState::init(&demo_trades().unwrap());
        let items = state.draw_list(Viewport::new(1280.0, 720.0));
        assert!(!items.is_empty());
        for pair in items.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn test_hidden_marker_is_not_drawn() {
        let mut state = PlotState::init(&[]);
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(state.draw_list(vp).len(), 1);
        assert_eq!(state.draw_list(vp)[0].shape, DrawShape::Square);

        state.set_origin_marker_visible(false);
        assert!(state.draw_list(vp).is_empty());
    }

    #[test]
    fn test_next_frame_sees_slider_value() {
        let mut state = PlotState::init(&[]);
        let vp = Viewport::new(800.0, 600.0);
        let before = state.draw_list(vp)[0].center;
        assert_relative_eq!(before[0], 400.0);

        let PlotState { controls, camera, .. } = &mut state;
        controls.set(Axis::X, 10.0, camera);
        assert_eq!(state.camera.position.x, 10.0);

        // Marker at the origin now sits left of center
        let after = state.draw_list(vp)[0].center;
        let expected = state
            .camera
            .project(Vec3::ZERO, vp)
            .map(|p| p.screen[0])
            .unwrap();
        assert!(after[0] < 400.0);
        assert_relative_eq!(after[0], expected);
    }
}
