//! Window, surface texture, and logging validation.

use crate::schema::LunariaConfig;

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &LunariaConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
}

pub(crate) fn validate_surface(errors: &mut Vec<String>, config: &LunariaConfig) {
    let s = &config.surface;
    validate_range(errors, "surface.size", s.size, 16, 4096);
    validate_range(errors, "surface.crater_count", s.crater_count, 0, 2000);
    validate_range_f32(errors, "surface.crater_min", s.crater_min, 0.5, 1024.0);
    validate_range_f32(errors, "surface.crater_max", s.crater_max, 0.5, 1024.0);
    validate_range_f32(errors, "surface.noise_scale", s.noise_scale, 0.001, 1.0);
    if s.crater_min > s.crater_max {
        errors.push(format!(
            "surface.crater_min = {} exceeds surface.crater_max = {}",
            s.crater_min, s.crater_max
        ));
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &LunariaConfig) {
    validate_range_f32(
        errors,
        "logging.fps_interval_secs",
        config.logging.fps_interval_secs,
        0.5,
        600.0,
    );
}
