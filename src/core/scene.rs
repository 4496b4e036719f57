//! Retained scene: meshes added once, drawn every frame
//!
//! The scene builder walks the trades in order and turns each one with a
//! truthy delta into a sphere. The x position is a running cursor that starts
//! at `-N / 2` (N = all records, skipped ones included) and advances by one
//! per emitted sphere.

use glam::Vec3;
use tracing::{debug, warn};

use super::scales::{Rgb, ScaleBank};
use super::trades::TradeRecord;

/// Edge length of the origin marker cube
pub const ORIGIN_MARKER_SIZE: f32 = 1.0;
pub const ORIGIN_MARKER_COLOR: Rgb = [0x00, 0xff, 0x00];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Cube { size: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub shape: Shape,
    pub position: Vec3,
    pub color: Rgb,
    pub visible: bool,
}

impl Mesh {
    pub fn sphere(position: Vec3, radius: f32, color: Rgb) -> Self {
        Self {
            shape: Shape::Sphere { radius },
            position,
            color,
            visible: true,
        }
    }

    pub fn cube(position: Vec3, size: f32, color: Rgb) -> Self {
        Self {
            shape: Shape::Cube { size },
            position,
            color,
            visible: true,
        }
    }

    /// Half the on-screen footprint in world units
    pub fn half_extent(&self) -> f32 {
        match self.shape {
            Shape::Sphere { radius } => radius,
            Shape::Cube { size } => size * 0.5,
        }
    }
}

/// Handle into a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn get(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    pub fn get_mut(&mut self, id: MeshId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id.0)
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

/// What happened to the input records during a build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub total: usize,
    pub emitted: usize,
    /// Records without a truthy delta
    pub skipped: usize,
    /// Records with a delta that could not be encoded
    pub defects: usize,
}

/// Spheres registered into a scene, in data order
#[derive(Debug, Clone)]
pub struct SceneBuild {
    pub spheres: Vec<MeshId>,
    pub report: BuildReport,
}

/// Turns trades into spheres using an already-configured [`ScaleBank`]
pub struct SceneBuilder<'a> {
    scales: &'a ScaleBank,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(scales: &'a ScaleBank) -> Self {
        Self { scales }
    }

    pub fn build(&self, trades: &[TradeRecord], scene: &mut Scene) -> SceneBuild {
        let mut report = BuildReport {
            total: trades.len(),
            ..BuildReport::default()
        };
        let mut spheres = Vec::new();
        let mut x = -(trades.len() as f32) / 2.0;

        for (index, trade) in trades.iter().enumerate() {
            if !trade.has_delta() {
                report.skipped += 1;
                continue;
            }

            let enc = match self.scales.encode(trade) {
                Ok(enc) => enc,
                Err(defect) => {
                    warn!(index, symbol = %trade.underlying_symbol, %defect, "Skipping trade");
                    report.defects += 1;
                    continue;
                }
            };

            let position = Vec3::new(x, enc.y_offset, enc.z_depth);
            spheres.push(scene.add(Mesh::sphere(position, enc.radius, enc.color)));
            debug!(
                index,
                x = position.x,
                y = position.y,
                z = position.z,
                radius = enc.radius,
                "Sphere placed"
            );
            x += 1.0;
        }

        report.emitted = spheres.len();
        SceneBuild { spheres, report }
    }
}
