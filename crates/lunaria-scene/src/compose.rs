//! Per-frame scene composition.
//!
//! [`SceneContext`] owns the only persistent scene state (the starfield).
//! [`SceneContext::compose`] derives everything else from a [`FrameInput`]
//! and hands it to a [`DrawSink`] in draw order: frame setup, stars, moons.

use lunaria_config::schema::TwinkleMode;
use lunaria_config::LunariaConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::{camera_pose, light_direction, CameraPose, PointerSample, Viewport};
use crate::math::Vec3;
use crate::moon::{moon_instance, MoonInstance, MoonOptions, RowLayout};
use crate::phase::scrub_phase;
use crate::stars::{StarDraw, Starfield};

/// Receiver of one frame's draw calls. Implemented by the GPU backend.
pub trait DrawSink {
    /// Called once per frame before any draw.
    fn begin_frame(&mut self, camera: &CameraPose, light_dir: Vec3);

    fn draw_star(&mut self, star: &StarDraw);

    fn draw_moon(&mut self, moon: &MoonInstance);
}

/// Everything a frame depends on besides the starfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub pointer: PointerSample,
    pub viewport: Viewport,
    /// Frames presented so far.
    pub frame: u64,
}

/// Scene parameters resolved from config.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub moon_count: usize,
    pub base_size_ratio: f32,
    pub spacing_factor: f32,
    pub options: MoonOptions,
    pub star_count: usize,
    pub twinkle: TwinkleMode,
    pub star_seed: Option<u64>,
}

impl SceneSettings {
    pub fn from_config(config: &LunariaConfig) -> Self {
        Self {
            moon_count: config.scene.moon_count as usize,
            base_size_ratio: config.scene.base_size_ratio,
            spacing_factor: config.scene.spacing_factor,
            options: MoonOptions {
                mirror_terminator: config.scene.mirror_terminator,
                color_grading: config.scene.color_grading,
            },
            star_count: config.stars.count as usize,
            twinkle: config.stars.twinkle,
            star_seed: config.stars.seed,
        }
    }

    /// Row layout for a viewport: base size is a fraction of its smaller side.
    pub fn layout(&self, viewport: Viewport) -> RowLayout {
        RowLayout::new(
            self.moon_count,
            viewport.min_extent() * self.base_size_ratio,
            self.spacing_factor,
        )
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self::from_config(&LunariaConfig::default())
    }
}

/// Process-wide scene state, built once at startup.
pub struct SceneContext {
    settings: SceneSettings,
    starfield: Starfield,
    viewport: Viewport,
    rng: StdRng,
}

impl SceneContext {
    pub fn new(settings: SceneSettings, viewport: Viewport) -> Self {
        let rng = match settings.star_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut ctx = Self {
            settings,
            starfield: Starfield::default(),
            viewport,
            rng,
        };
        ctx.regenerate_stars();
        ctx
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the starfield for a new viewport size.
    ///
    /// Empty viewports (minimized window) keep the previous stars.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            tracing::debug!("Ignoring resize to empty viewport");
            return;
        }
        self.viewport = viewport;
        self.regenerate_stars();
    }

    fn regenerate_stars(&mut self) {
        if self.viewport.is_empty() {
            self.starfield = Starfield::default();
            return;
        }
        self.starfield = Starfield::generate(self.settings.star_count, self.viewport, &mut self.rng);
        tracing::debug!(
            stars = self.starfield.len(),
            width = self.viewport.width,
            height = self.viewport.height,
            "Starfield generated"
        );
    }

    /// Emit one frame into `sink`.
    pub fn compose(&self, input: &FrameInput, sink: &mut dyn DrawSink) {
        let viewport = input.viewport;
        let pointer = input.pointer.clamped(viewport);
        let [mx, my] = pointer.normalized(viewport);

        let camera = camera_pose(mx, my);
        let light_dir = light_direction(mx, my);
        sink.begin_frame(&camera, light_dir);

        for star in self.starfield.draws(input.frame, self.settings.twinkle) {
            sink.draw_star(&star);
        }

        let layout = self.settings.layout(viewport);
        let scrub = scrub_phase(pointer.x, viewport.width);
        for index in 0..layout.count {
            let moon = moon_instance(
                &layout,
                index,
                scrub,
                input.frame,
                light_dir,
                self.settings.options,
            );
            sink.draw_moon(&moon);
        }
    }
}
