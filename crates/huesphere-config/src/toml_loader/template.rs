//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Huesphere Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
title = "Huesphere"
# width = 1280
# height = 800
# startup_mode = "windowed"   # windowed, maximized, fullscreen
# cursor_visible = true

[sphere]
# tessellation = 32           # 1-1024, vertices = (N+1)^2

[texture]
# width = 256                 # 1-8192
# height = 256                # 1-8192

[camera]
# eye = [0.0, 0.0, 5.0]
# target = [0.0, 0.0, 0.0]
# up = [0.0, 1.0, 0.0]
# fov_y_degrees = 45.0        # 1-179
# near = 0.1
# far = 100.0

[render]
# clear_color = "#000000"
# vsync = true
# log_fps = false

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
