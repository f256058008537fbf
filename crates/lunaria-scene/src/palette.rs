//! Fullness-driven color grading for the moon albedo tint.
//!
//! Rules are evaluated top-down and the first rule whose threshold the
//! fullness strictly exceeds wins. A fullness exactly on a threshold
//! falls through to the next rule.

use crate::math::{lerp3, saturate3, Vec3};
use crate::phase::cycle_fullness;

pub const BASE_IVORY: Vec3 = [1.0, 0.97, 0.88];
pub const BLUE_TINT: Vec3 = [0.85, 0.92, 1.0];
pub const COPPER_TINT: Vec3 = [1.0, 0.85, 0.7];
pub const GRAY_SKY: Vec3 = [0.82, 0.87, 0.92];
pub const DARK_SHADOW: Vec3 = [0.6, 0.65, 0.7];

/// Amplitude of the shared per-moon color shimmer.
pub const COLOR_NOISE_AMPLITUDE: f32 = 0.05;

/// Color produced by a grading rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swatch {
    Blend { from: Vec3, to: Vec3, t: f32 },
    Flat(Vec3),
}

impl Swatch {
    pub fn color(&self) -> Vec3 {
        match *self {
            Swatch::Blend { from, to, t } => lerp3(from, to, t),
            Swatch::Flat(c) => c,
        }
    }
}

/// Applies `swatch` when fullness is strictly above `above`.
/// `above = None` always matches and ends the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeRule {
    pub above: Option<f32>,
    pub swatch: Swatch,
}

impl GradeRule {
    pub fn matches(&self, fullness: f32) -> bool {
        self.above.map_or(true, |threshold| fullness > threshold)
    }
}

pub const GRADE_RULES: [GradeRule; 4] = [
    GradeRule {
        above: Some(0.8),
        swatch: Swatch::Blend {
            from: BASE_IVORY,
            to: COPPER_TINT,
            t: 0.25,
        },
    },
    GradeRule {
        above: Some(0.5),
        swatch: Swatch::Blend {
            from: BASE_IVORY,
            to: GRAY_SKY,
            t: 0.5,
        },
    },
    GradeRule {
        above: Some(0.25),
        swatch: Swatch::Blend {
            from: GRAY_SKY,
            to: BLUE_TINT,
            t: 0.4,
        },
    },
    GradeRule {
        above: None,
        swatch: Swatch::Flat(DARK_SHADOW),
    },
];

/// Index into [`GRADE_RULES`] of the rule chosen for `fullness`.
pub fn select_rule(fullness: f32) -> usize {
    GRADE_RULES
        .iter()
        .position(|rule| rule.matches(fullness))
        .unwrap_or(GRADE_RULES.len() - 1)
}

/// Ungraded palette color for `fullness` in `[0, 1]`.
pub fn base_tint(fullness: f32) -> Vec3 {
    GRADE_RULES[select_rule(fullness)].swatch.color()
}

/// Shimmer shared by all three channels of moon `index` at `frame`.
pub fn color_noise(index: usize, frame: u64) -> f32 {
    ((index as f64 * 0.7 + frame as f64 * 0.01).sin() as f32) * COLOR_NOISE_AMPLITUDE
}

/// Final albedo tint for a moon at `phase` (0..30 scale), clamped to `[0, 1]`.
pub fn grade_color(phase: f32, index: usize, frame: u64) -> Vec3 {
    let base = base_tint(cycle_fullness(phase));
    let n = color_noise(index, frame);
    saturate3([base[0] + n, base[1] + n, base[2] + n])
}
