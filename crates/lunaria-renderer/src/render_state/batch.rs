//! CPU-side collection of one frame's draw calls.

use lunaria_scene::math::Vec3;
use lunaria_scene::{CameraPose, DrawSink, MoonInstance, StarDraw};

use crate::moon::MoonInstanceRaw;
use crate::sphere::matrix::{look_at, Mat4, IDENTITY};
use crate::stars::StarInstanceRaw;

/// Receives the composer's draw calls and packs them into instance data.
///
/// Each star and each moon arrives as its own draw call; they are
/// submitted as two instanced draws.
#[derive(Debug, Clone)]
pub struct FrameBatch {
    view: Mat4,
    light_dir: Vec3,
    stars: Vec<StarInstanceRaw>,
    moons: Vec<MoonInstanceRaw>,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self {
            view: IDENTITY,
            light_dir: [0.0, 0.0, 1.0],
            stars: Vec::new(),
            moons: Vec::new(),
        }
    }

    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    pub fn light_dir(&self) -> Vec3 {
        self.light_dir
    }

    pub fn stars(&self) -> &[StarInstanceRaw] {
        &self.stars
    }

    pub fn moons(&self) -> &[MoonInstanceRaw] {
        &self.moons
    }
}

impl Default for FrameBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSink for FrameBatch {
    fn begin_frame(&mut self, camera: &CameraPose, light_dir: Vec3) {
        self.stars.clear();
        self.moons.clear();
        self.view = look_at(camera.eye, camera.target, camera.up);
        self.light_dir = light_dir;
    }

    fn draw_star(&mut self, star: &StarDraw) {
        self.stars.push(StarInstanceRaw::from_draw(star));
    }

    fn draw_moon(&mut self, moon: &MoonInstance) {
        self.moons.push(MoonInstanceRaw::from_instance(moon));
    }
}
