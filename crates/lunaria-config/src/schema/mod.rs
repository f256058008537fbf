//! Configuration schema types for Lunaria.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Defaults reproduce the graded, mirrored, rim-lit 30-moon scene.

mod logging;
mod scene;
mod shading;
mod stars;
mod surface;
mod window;

pub use logging::*;
pub use scene::*;
pub use shading::*;
pub use stars::*;
pub use surface::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Moon count of the classic (ungraded) scene.
pub const CLASSIC_MOON_COUNT: u32 = 17;

/// Root configuration for Lunaria.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LunariaConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub stars: StarsConfig,
    pub shading: ShadingConfig,
    pub surface: SurfaceConfig,
    pub logging: LoggingConfig,
}

impl LunariaConfig {
    /// Switch to the classic scene: 17 untinted moons, no rim glow,
    /// no terminator mirroring, x-only star twinkle.
    pub fn apply_classic_preset(&mut self) {
        self.scene.moon_count = CLASSIC_MOON_COUNT;
        self.scene.mirror_terminator = false;
        self.scene.color_grading = false;
        self.shading.tint_and_rim = false;
        self.stars.twinkle = TwinkleMode::X;
    }
}

// =============================================================================
// Tests
// =============================================================================
