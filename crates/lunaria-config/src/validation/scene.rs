//! Moon row and starfield validation.

use crate::schema::LunariaConfig;

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &LunariaConfig) {
    validate_range(errors, "scene.moon_count", config.scene.moon_count, 1, 64);
    validate_range_f32(
        errors,
        "scene.base_size_ratio",
        config.scene.base_size_ratio,
        0.01,
        0.5,
    );
    validate_range_f32(
        errors,
        "scene.spacing_factor",
        config.scene.spacing_factor,
        0.5,
        4.0,
    );
}

pub(crate) fn validate_stars(errors: &mut Vec<String>, config: &LunariaConfig) {
    validate_range(errors, "stars.count", config.stars.count, 0, 20_000);
}
