//! `LunariaApp` struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use lunaria_config::LunariaConfig;
use lunaria_renderer::{FrameClock, RenderState};
use lunaria_scene::{PointerSample, SceneContext};

/// Main application state.
pub struct LunariaApp {
    pub(super) config: LunariaConfig,
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) scene: Option<SceneContext>,
    /// Last cursor position in physical pixels. Stays at the origin until
    /// the cursor first moves over the window.
    pub(super) pointer: PointerSample,
    pub(super) clock: FrameClock,
    pub(super) should_exit: bool,
    pub(super) failed: bool,
}

impl LunariaApp {
    pub fn new(config: LunariaConfig) -> Self {
        Self {
            config,
            window: None,
            render_state: None,
            scene: None,
            pointer: PointerSample::default(),
            clock: FrameClock::new(),
            should_exit: false,
            failed: false,
        }
    }

    /// True if the app stopped because of an initialization or render error.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_idle() {
        let app = LunariaApp::new(LunariaConfig::default());
        assert!(app.window.is_none());
        assert!(app.render_state.is_none());
        assert!(app.scene.is_none());
        assert!(!app.should_exit);
        assert!(!app.failed());
        assert_eq!(app.clock.frame(), 0);
        assert_eq!(app.pointer, PointerSample::new(0.0, 0.0));
    }
}
