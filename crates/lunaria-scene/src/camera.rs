//! Pointer mapping, camera pose, and the global light direction.
//!
//! World space follows screen conventions: x right, y down, z toward
//! the viewer. The camera orbits slightly with the pointer while
//! always looking at the origin.

use crate::math::{map_range, normalize, Vec3};

/// Horizontal camera sway at the viewport edges.
pub const CAMERA_SWAY_X: f32 = 140.0;
/// Vertical camera sway at the viewport edges.
pub const CAMERA_SWAY_Y: f32 = 80.0;
/// Camera distance from the row along +z.
pub const CAMERA_DISTANCE: f32 = 980.0;

/// Viewport size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// `min(width, height)`, the reference for moon sizes.
    pub fn min_extent(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// One pointer position sample in viewport pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of the viewport.
    pub fn centered(viewport: Viewport) -> Self {
        Self {
            x: viewport.width * 0.5,
            y: viewport.height * 0.5,
        }
    }

    /// Clamp into `[0, width] x [0, height]`.
    pub fn clamped(self, viewport: Viewport) -> Self {
        Self {
            x: self.x.clamp(0.0, viewport.width.max(0.0)),
            y: self.y.clamp(0.0, viewport.height.max(0.0)),
        }
    }

    /// Pointer mapped to `[-1, 1]` on both axes after clamping.
    pub fn normalized(self, viewport: Viewport) -> [f32; 2] {
        let p = self.clamped(viewport);
        [
            map_range(p.x, 0.0, viewport.width, -1.0, 1.0),
            map_range(p.y, 0.0, viewport.height, -1.0, 1.0),
        ]
    }
}

/// Look-at camera description handed to the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

/// Camera at `(mx * 140, my * 80, 980)` looking at the origin, y-down up vector.
pub fn camera_pose(mx: f32, my: f32) -> CameraPose {
    CameraPose {
        eye: [mx * CAMERA_SWAY_X, my * CAMERA_SWAY_Y, CAMERA_DISTANCE],
        target: [0.0, 0.0, 0.0],
        up: [0.0, 1.0, 0.0],
    }
}

/// Global light direction, nudged by the pointer and normalized.
pub fn light_direction(mx: f32, my: f32) -> Vec3 {
    normalize([0.9 + mx * 0.2, 0.15 + my * 0.2, 0.6])
}
