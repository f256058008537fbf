//! Moon row configuration types.

use serde::{Deserialize, Serialize};

/// Layout and grading of the row of phase-lit moons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of moons in the row (valid range: 1-64).
    pub moon_count: u32,
    /// Base moon diameter as a fraction of `min(width, height)` (valid range: 0.01-0.5).
    pub base_size_ratio: f32,
    /// Center-to-center spacing as a multiple of the base size (valid range: 0.5-4.0).
    pub spacing_factor: f32,
    /// Mirror the terminator for moons left of the row center.
    pub mirror_terminator: bool,
    /// Blend a per-moon albedo tint from the fullness palette.
    pub color_grading: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            moon_count: 30,
            base_size_ratio: 0.10,
            spacing_factor: 1.75,
            mirror_terminator: true,
            color_grading: true,
        }
    }
}
