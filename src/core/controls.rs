//! Camera control panel model
//!
//! Holds the slider values shown in the "Camera" panel. Every change is
//! clamped to the slider range and written straight into the camera.

use std::ops::RangeInclusive;

use tracing::trace;

use super::camera::{Axis, Camera};

pub const PANEL_TITLE: &str = "Camera";
pub const SLIDER_MIN: f32 = -50.0;
pub const SLIDER_MAX: f32 = 50.0;

pub fn slider_range() -> RangeInclusive<f32> {
    SLIDER_MIN..=SLIDER_MAX
}

pub fn axis_label(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "X position",
        Axis::Y => "Y position",
        Axis::Z => "Z position",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraControls {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl CameraControls {
    /// Sliders pre-populated from the camera
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            x: camera.position.x,
            y: camera.position.y,
            z: camera.position.z,
        }
    }

    pub fn value_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    pub fn value(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Slider change handler
    pub fn set(&mut self, axis: Axis, value: f32, camera: &mut Camera) {
        let value = value.clamp(SLIDER_MIN, SLIDER_MAX);
        *self.value_mut(axis) = value;
        camera.set_axis(axis, value);
        trace!(?axis, value, "Camera moved");
    }
}
