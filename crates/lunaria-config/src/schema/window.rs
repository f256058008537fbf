//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window size and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 200-7680).
    pub width: u32,
    /// Initial logical height (valid range: 200-4320).
    pub height: u32,
    /// Present with FIFO (vsync) instead of immediate mode.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lunaria".into(),
            width: 1280,
            height: 800,
            vsync: true,
        }
    }
}
