//! Procedural surface texture settings.

use serde::{Deserialize, Serialize};

/// Parameters for the cratered albedo map shared by every moon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Square texture edge in pixels (valid range: 16-4096).
    pub size: u32,
    /// Number of dark crater discs (valid range: 0-2000).
    pub crater_count: u32,
    /// Smallest crater diameter in pixels.
    pub crater_min: f32,
    /// Largest crater diameter in pixels.
    pub crater_max: f32,
    /// Crater darkening alpha out of 255.
    pub crater_alpha: u8,
    /// Noise frequency per pixel (valid range: 0.001-1.0).
    pub noise_scale: f32,
    pub seed: Option<u64>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            size: 512,
            crater_count: 170,
            crater_min: 6.0,
            crater_max: 55.0,
            crater_alpha: 35,
            noise_scale: 0.02,
            seed: None,
        }
    }
}
