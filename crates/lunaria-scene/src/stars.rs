//! Background starfield: generated once per viewport size, twinkled per frame.

use lunaria_config::schema::TwinkleMode;
use rand::Rng;

use crate::camera::Viewport;
use crate::math::Vec3;

/// Horizontal spread as a multiple of the viewport width.
pub const SPREAD_X: f32 = 2.4;
/// Vertical spread as a multiple of the viewport height.
pub const SPREAD_Y: f32 = 2.0;
/// Depth band, far to near.
pub const DEPTH_BAND: (f32, f32) = (-3200.0, -900.0);
pub const RADIUS_RANGE: (f32, f32) = (0.6, 2.0);
pub const BRIGHTNESS_RANGE: (f32, f32) = (140.0, 255.0);

/// One static star. Never moves after generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub radius: f32,
    /// Base gray level in `[140, 255)`.
    pub base_brightness: f32,
}

/// A star ready to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarDraw {
    pub position: Vec3,
    pub radius: f32,
    /// Gray level in `[0, 255]`.
    pub brightness: f32,
}

impl StarDraw {
    /// Gray level mapped to `[0, 1]`.
    pub fn gray(&self) -> f32 {
        self.brightness / 255.0
    }
}

/// Twinkle multiplier in `[0.5, 1.0]`.
pub fn twinkle(star: &Star, frame: u64, mode: TwinkleMode) -> f32 {
    let mut arg = frame as f64 * 0.02 + star.position[0] as f64 * 0.001;
    if mode == TwinkleMode::Xy {
        arg += star.position[1] as f64 * 0.001;
    }
    0.75 + 0.25 * arg.sin() as f32
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Generate `count` stars spread around a viewport of the given size.
    pub fn generate<R: Rng + ?Sized>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        let w = viewport.width;
        let h = viewport.height;
        let stars = (0..count)
            .map(|_| Star {
                position: [
                    sample(rng, -SPREAD_X * w, SPREAD_X * w),
                    sample(rng, -SPREAD_Y * h, SPREAD_Y * h),
                    sample(rng, DEPTH_BAND.0, DEPTH_BAND.1),
                ],
                radius: sample(rng, RADIUS_RANGE.0, RADIUS_RANGE.1),
                base_brightness: sample(rng, BRIGHTNESS_RANGE.0, BRIGHTNESS_RANGE.1),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Per-frame draw list, in generation order.
    pub fn draws(&self, frame: u64, mode: TwinkleMode) -> impl Iterator<Item = StarDraw> + '_ {
        self.stars.iter().map(move |star| StarDraw {
            position: star.position,
            radius: star.radius,
            brightness: (star.base_brightness * twinkle(star, frame, mode)).clamp(0.0, 255.0),
        })
    }
}

// Empty ranges (zero-size viewport) collapse to the lower bound.
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
