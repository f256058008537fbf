//! Shading coefficient validation.

use crate::schema::LunariaConfig;

use super::helpers::validate_range_f32;

pub(crate) fn validate_shading(errors: &mut Vec<String>, config: &LunariaConfig) {
    let s = &config.shading;
    validate_range_f32(errors, "shading.edge", s.edge, 0.001, 0.5);
    validate_range_f32(errors, "shading.earthshine", s.earthshine, 0.0, 1.0);
    validate_range_f32(errors, "shading.diffuse", s.diffuse, 0.0, 2.0);
    validate_range_f32(errors, "shading.specular", s.specular, 0.0, 2.0);
    validate_range_f32(errors, "shading.shininess", s.shininess, 1.0, 256.0);
    validate_range_f32(errors, "shading.rim_strength", s.rim_strength, 0.0, 2.0);
    validate_range_f32(errors, "shading.rim_power", s.rim_power, 0.5, 8.0);
    for (channel, value) in ["r", "g", "b"].iter().zip(s.rim_color) {
        validate_range_f32(
            errors,
            &format!("shading.rim_color.{channel}"),
            value,
            0.0,
            1.0,
        );
    }
}
