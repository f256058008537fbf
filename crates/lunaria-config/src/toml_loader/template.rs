//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r#"# Lunaria Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Lunaria"
# width = 1280           # 200-7680
# height = 800           # 200-4320
# vsync = true

[scene]
# moon_count = 30        # 1-64
# base_size_ratio = 0.10 # fraction of min(width, height), 0.01-0.5
# spacing_factor = 1.75  # multiple of base size, 0.5-4.0
# mirror_terminator = true
# color_grading = true

[stars]
# count = 1600           # 0-20000, regenerated on resize
# twinkle = "xy"         # xy, x
# seed = 1234

[shading]
# edge = 0.018           # terminator softness, 0.001-0.5
# earthshine = 0.20      # unlit ambient floor, 0.0-1.0
# diffuse = 0.95
# specular = 0.55
# shininess = 28.0
# tint_and_rim = true
# rim_color = [0.4, 0.7, 1.0]
# rim_strength = 0.6
# rim_power = 3.0

[surface]
# size = 512             # 16-4096
# crater_count = 170
# crater_min = 6.0       # diameter in pixels
# crater_max = 55.0
# crater_alpha = 35      # 0-255
# noise_scale = 0.02
# seed = 1234

[logging]
# level = "info"         # trace, debug, info, warn, error
# show_fps = false
# fps_interval_secs = 5.0
"#
    .to_string()
}
