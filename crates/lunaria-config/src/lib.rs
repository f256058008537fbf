//! Lunaria configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so a partial (or empty) config file yields the full scene.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lunaria_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LunariaConfig, CONFIG_SCHEMA_VERSION};

use lunaria_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default `config.toml` if none exists.
pub fn load_config() -> Result<LunariaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LunariaConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&LunariaConfig::default());
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"scene\""));
        assert!(json.contains("\"stars\""));
        assert!(json.contains("\"shading\""));
        assert!(json.contains("\"surface\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = LunariaConfig::default();
        let json = config_to_json(&config);
        let parsed: LunariaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.scene.moon_count, 30);
        assert_eq!(parsed.stars.count, 1600);
        assert_eq!(parsed.window.title, "Lunaria");
    }
}
