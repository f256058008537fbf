//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod scene;
mod shading;


use crate::schema::LunariaConfig;
use lunaria_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LunariaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_window(&mut errors, config);
    scene::validate_scene(&mut errors, config);
    scene::validate_stars(&mut errors, config);
    shading::validate_shading(&mut errors, config);
    misc::validate_surface(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
