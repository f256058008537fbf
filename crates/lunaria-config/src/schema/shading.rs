//! Lunar shading model coefficients.

use serde::{Deserialize, Serialize};

/// Coefficients fed to the moon fragment shader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Width of the soft terminator band (valid range: 0.001-0.5).
    pub edge: f32,
    /// Ambient floor on the unlit side (valid range: 0.0-1.0).
    pub earthshine: f32,
    /// Diffuse coefficient (valid range: 0.0-2.0).
    pub diffuse: f32,
    /// Specular coefficient (valid range: 0.0-2.0).
    pub specular: f32,
    /// Specular exponent (valid range: 1.0-256.0).
    pub shininess: f32,
    /// Multiply by the graded albedo tint and add the rim glow.
    pub tint_and_rim: bool,
    /// Rim glow color, linear RGB in 0.0-1.0.
    pub rim_color: [f32; 3],
    /// Rim glow strength (valid range: 0.0-2.0).
    pub rim_strength: f32,
    /// Rim falloff exponent (valid range: 0.5-8.0).
    pub rim_power: f32,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            edge: 0.018,
            earthshine: 0.20,
            diffuse: 0.95,
            specular: 0.55,
            shininess: 28.0,
            tint_and_rim: true,
            rim_color: [0.4, 0.7, 1.0],
            rim_strength: 0.6,
            rim_power: 3.0,
        }
    }
}
