//! Window creation, scene generation, and renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use huesphere_config::schema::{StartupMode, WindowConfig};
use huesphere_procgen::{generate_hue_texture, generate_sphere_mesh};
use huesphere_renderer::RenderState;

use super::core::HuesphereApp;

impl HuesphereApp {
    /// Create the window, generate the scene, and upload it to the GPU.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window = match event_loop.create_window(window_attributes(&self.config.window)) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        window.set_cursor_visible(self.config.window.cursor_visible);

        let mesh = match generate_sphere_mesh(self.config.sphere.tessellation) {
            Ok(mesh) => mesh,
            Err(e) => {
                tracing::error!("Failed to generate sphere mesh: {e}");
                return false;
            }
        };
        tracing::info!(
            tessellation = mesh.tessellation,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Sphere mesh generated"
        );

        let texture = match generate_hue_texture(self.config.texture.width, self.config.texture.height)
        {
            Ok(texture) => texture,
            Err(e) => {
                tracing::error!("Failed to generate hue texture: {e}");
                return false;
            }
        };
        tracing::info!(
            width = texture.width,
            height = texture.height,
            "Hue texture generated"
        );

        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            &self.config,
            &mesh,
            &texture,
        ));

        match render_state {
            Ok(rs) => self.render_state = Some(rs),
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        true
    }
}

/// Window attributes from the `[window]` config section.
fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

    match config.startup_mode {
        StartupMode::Windowed => attrs,
        StartupMode::Maximized => attrs.with_maximized(true),
        StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_take_title_and_size() {
        let config = WindowConfig {
            title: "Rainbow".into(),
            width: 640,
            height: 480,
            ..WindowConfig::default()
        };
        let attrs = window_attributes(&config);
        assert_eq!(attrs.title, "Rainbow");
        assert_eq!(
            attrs.inner_size,
            Some(winit::dpi::Size::Logical(LogicalSize::new(640.0, 480.0)))
        );
        assert!(!attrs.maximized);
        assert!(attrs.fullscreen.is_none());
    }

    #[test]
    fn startup_modes_map_to_attributes() {
        let maximized = window_attributes(&WindowConfig {
            startup_mode: StartupMode::Maximized,
            ..WindowConfig::default()
        });
        assert!(maximized.maximized);

        let fullscreen = window_attributes(&WindowConfig {
            startup_mode: StartupMode::Fullscreen,
            ..WindowConfig::default()
        });
        assert!(fullscreen.fullscreen.is_some());
    }
}
