//! Window creation and renderer/scene initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use lunaria_common::LunariaError;
use lunaria_renderer::{RenderState, SurfaceSynth};
use lunaria_scene::{SceneContext, SceneSettings, Viewport};

use super::core::LunariaApp;

impl LunariaApp {
    /// Create the window, synthesize the moon surface, and bring up the
    /// GPU renderer and scene. On error nothing is stored and the event
    /// loop should exit.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> lunaria_common::Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| LunariaError::Window(e.to_string()))?;

        let surface_image = SurfaceSynth::from_config(&self.config.surface).generate();
        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            &self.config,
            &surface_image,
        ))?;

        let size = window.inner_size();
        let scene = SceneContext::new(
            SceneSettings::from_config(&self.config),
            Viewport::new(size.width, size.height),
        );
        tracing::info!(
            moons = scene.settings().moon_count,
            stars = scene.starfield().len(),
            "Scene ready ({}x{})",
            size.width,
            size.height
        );

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.scene = Some(scene);
        Ok(())
    }
}
