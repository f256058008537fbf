//! Starfield configuration types.

use serde::{Deserialize, Serialize};

/// Which star coordinates feed the twinkle phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TwinkleMode {
    /// Phase from the x coordinate only.
    X,
    /// Phase from x + y.
    #[default]
    Xy,
}

/// Starfield settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    /// Stars generated per viewport size (valid range: 0-20000).
    pub count: u32,
    pub twinkle: TwinkleMode,
    /// Fixed RNG seed. Absent means a fresh field every run.
    pub seed: Option<u64>,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            count: 1600,
            twinkle: TwinkleMode::Xy,
            seed: None,
        }
    }
}
