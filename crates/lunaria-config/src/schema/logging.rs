//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Tracing targets of the workspace crates (the binary is `lunaria`).
pub const LOG_TARGETS: [&str; 4] = [
    "lunaria",
    "lunaria_config",
    "lunaria_scene",
    "lunaria_renderer",
];

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// One `tracing_subscriber` filter directive per workspace crate.
    pub fn directives(self) -> Vec<String> {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.as_str()))
            .collect()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Periodically log average FPS and frame time.
    pub show_fps: bool,
    /// Seconds between FPS reports (valid range: 0.5-600.0).
    pub fps_interval_secs: f32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            show_fps: false,
            fps_interval_secs: 5.0,
        }
    }
}
