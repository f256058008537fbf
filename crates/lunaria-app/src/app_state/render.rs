//! Per-frame rendering and FPS reporting.

use std::time::Duration;

use lunaria_scene::{FrameInput, Viewport};

use super::core::LunariaApp;

impl LunariaApp {
    /// Render one frame. A minimized window renders nothing and does not
    /// advance the frame counter.
    pub(super) fn render(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return;
        }
        let (Some(rs), Some(scene)) = (self.render_state.as_mut(), self.scene.as_ref()) else {
            return;
        };

        let input = FrameInput {
            pointer: self.pointer,
            viewport: Viewport::new(size.width, size.height),
            frame: self.clock.frame(),
        };

        match rs.render_scene(scene, &input) {
            Ok(true) => {
                self.clock.tick();
                self.report_fps();
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Render error: {e}");
                self.failed = true;
                self.should_exit = true;
            }
        }
    }

    fn report_fps(&mut self) {
        if !self.config.logging.show_fps {
            return;
        }
        let interval = Duration::from_secs_f32(self.config.logging.fps_interval_secs);
        if self.clock.report_due(interval) {
            tracing::info!(
                "{:.1} fps ({:.2} ms/frame, frame {})",
                self.clock.fps(),
                self.clock.frame_time_ms(),
                self.clock.frame()
            );
        }
    }
}
