//! Row layout and per-moon instance generation.
//!
//! A [`MoonInstance`] is never stored across frames: it is recomputed
//! from (index, frame, pointer) every frame by [`moon_instance`].

use crate::math::{lerp, Vec3};
use crate::palette::grade_color;
use crate::phase::{phase_offset, wrap_phase};

/// Center-to-center spacing as a multiple of the base size.
pub const DEFAULT_SPACING_FACTOR: f32 = 1.75;
/// Exponent scale of the Gaussian size falloff.
pub const BELL_SHARPNESS: f32 = 1.6;
/// Center moons rise by this much (y is down, so negative).
pub const BELL_LIFT: f32 = -18.0;
/// Depth of the outermost and the center moons.
pub const DEPTH_RANGE: (f32, f32) = (-340.0, -60.0);
/// Size multiplier of the outermost and the center moons.
pub const SIZE_RANGE: (f32, f32) = (0.78, 1.55);
/// Base yaw of every moon, radians.
pub const BASE_YAW: f32 = 0.22;
/// Yaw wobble amplitude, radians.
pub const YAW_WOBBLE: f32 = 0.05;
/// Fixed pitch, radians.
pub const PITCH: f32 = -0.08;

/// Feature toggles distinguishing the graded scene from the classic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonOptions {
    /// Flip the terminator for moons left of center.
    pub mirror_terminator: bool,
    /// Tint by the fullness palette. Off means a white tint.
    pub color_grading: bool,
}

impl Default for MoonOptions {
    fn default() -> Self {
        Self {
            mirror_terminator: true,
            color_grading: true,
        }
    }
}

/// Horizontal layout of a centered row of `count` moons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub count: usize,
    pub base_size: f32,
    pub spacing: f32,
    pub start_x: f32,
}

impl RowLayout {
    /// Layout for a given base size and spacing factor.
    pub fn new(count: usize, base_size: f32, spacing_factor: f32) -> Self {
        let spacing = base_size * spacing_factor;
        let start_x = -((count.saturating_sub(1)) as f32 * spacing) / 2.0;
        Self {
            count,
            base_size,
            spacing,
            start_x,
        }
    }

    /// x position of moon `index`.
    pub fn x_at(&self, index: usize) -> f32 {
        self.start_x + index as f32 * self.spacing
    }

    /// Gaussian falloff for moon `index`, 1 at the row center.
    pub fn bell(&self, index: usize) -> f32 {
        bell_falloff(index, self.count)
    }
}

/// `exp(-d^2 * 1.6)` where `d = |i - mid| / mid`. A row of one is all center.
pub fn bell_falloff(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 1.0;
    }
    let mid = (count - 1) as f32 / 2.0;
    let d = (index as f32 - mid).abs() / mid;
    (-d * d * BELL_SHARPNESS).exp()
}

/// -1 left of the row center, +1 at or right of it.
pub fn facing_sign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Everything the backend needs to draw one shaded moon this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonInstance {
    pub index: usize,
    pub position: Vec3,
    /// Diameter in world units.
    pub size: f32,
    /// Phase on the `[0, 30)` scale.
    pub phase: f32,
    /// Rotation about y, radians.
    pub yaw: f32,
    /// Rotation about x, radians.
    pub pitch: f32,
    pub light_dir: Vec3,
    /// Albedo tint, each channel in `[0, 1]`.
    pub tint: Vec3,
    /// +1 or -1.
    pub facing: f32,
}

impl MoonInstance {
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }
}

/// Compute moon `index` of `layout` for this frame.
pub fn moon_instance(
    layout: &RowLayout,
    index: usize,
    scrub_phase: f32,
    frame: u64,
    light_dir: Vec3,
    options: MoonOptions,
) -> MoonInstance {
    let x = layout.x_at(index);
    let phase = wrap_phase(scrub_phase + phase_offset(index, layout.count));
    let bell = layout.bell(index);

    let wobble = (frame as f64 * 0.004 + index as f64).sin() as f32;

    let tint = if options.color_grading {
        grade_color(phase, index, frame)
    } else {
        [1.0, 1.0, 1.0]
    };

    let facing = if options.mirror_terminator {
        facing_sign(x)
    } else {
        1.0
    };

    MoonInstance {
        index,
        position: [x, BELL_LIFT * bell, lerp(DEPTH_RANGE.0, DEPTH_RANGE.1, bell)],
        size: layout.base_size * lerp(SIZE_RANGE.0, SIZE_RANGE.1, bell),
        phase,
        yaw: BASE_YAW + wobble * YAW_WOBBLE,
        pitch: PITCH,
        light_dir,
        tint,
        facing,
    }
}
