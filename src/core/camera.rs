//! Perspective camera with a fixed orientation
//!
//! The camera always looks down -Z with +Y up; only its position moves.

use glam::Vec3;

pub const DEFAULT_FOV_Y_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 50.0);

/// Camera position axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: &'static [Axis] = &[Axis::X, Axis::Y, Axis::Z];
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// A world point mapped onto the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Pixel position, origin at the top-left corner
    pub screen: [f32; 2],
    /// Distance in front of the camera along the view axis
    pub depth: f32,
    /// Pixels per world unit at this depth
    pub pixels_per_unit: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.position.x = value,
            Axis::Y => self.position.y = value,
            Axis::Z => self.position.z = value,
        }
    }

    fn focal(&self) -> f32 {
        1.0 / (self.fov_y * 0.5).tan()
    }

    /// Project a world point, `None` if it lies outside the near/far planes
    pub fn project(&self, point: Vec3, viewport: Viewport) -> Option<Projected> {
        let rel = point - self.position;
        let depth = -rel.z;
        if !(self.near..=self.far).contains(&depth) {
            return None;
        }

        let f = self.focal();
        let ndc_x = rel.x * f / (viewport.aspect() * depth);
        let ndc_y = rel.y * f / depth;
        let half_h = viewport.height * 0.5;

        Some(Projected {
            screen: [
                (ndc_x + 1.0) * 0.5 * viewport.width,
                (1.0 - ndc_y) * half_h,
            ],
            depth,
            pixels_per_unit: f / depth * half_h,
        })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            fov_y: DEFAULT_FOV_Y_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_camera_position() {
        let cam = Camera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_point_on_axis_projects_to_center() {
        let cam = Camera::default();
        let vp = Viewport::new(800.0, 600.0);
        let p = cam.project(Vec3::ZERO, vp).unwrap();
        assert_relative_eq!(p.screen[0], 400.0);
        assert_relative_eq!(p.screen[1], 300.0);
        assert_relative_eq!(p.depth, 50.0);
    }

    #[test]
    fn test_up_and_right_map_to_screen_directions() {
        let cam = Camera::default();
        let vp = Viewport::new(800.0, 600.0);
        let right = cam.project(Vec3::new(5.0, 0.0, 0.0), vp).unwrap();
        let up = cam.project(Vec3::new(0.0, 5.0, 0.0), vp).unwrap();
        assert!(right.screen[0] > 400.0);
        assert!(up.screen[1] < 300.0);
    }

    #[test]
    fn test_nearer_points_appear_larger() {
        let cam = Camera::default();
        let vp = Viewport::new(800.0, 600.0);
        let near = cam.project(Vec3::new(0.0, 0.0, 20.0), vp).unwrap();
        let far = cam.project(Vec3::new(0.0, 0.0, -20.0), vp).unwrap();
        assert!(near.pixels_per_unit > far.pixels_per_unit);
    }

    #[test]
    fn test_behind_camera_is_culled() {
        let cam = Camera::default();
        let vp = Viewport::new(800.0, 600.0);
        assert!(cam.project(Vec3::new(0.0, 0.0, 60.0), vp).is_none());
        assert!(cam.project(Vec3::new(0.0, 0.0, 50.0), vp).is_none());
        assert!(cam.project(Vec3::new(0.0, 0.0, -2000.0), vp).is_none());
    }

    #[test]
    fn test_set_axis() {
        let mut cam = Camera::default();
        cam.set_axis(Axis::X, 10.0);
        cam.set_axis(Axis::Y, -3.5);
        assert_eq!(cam.position, Vec3::new(10.0, -3.5, 50.0));
    }
}
