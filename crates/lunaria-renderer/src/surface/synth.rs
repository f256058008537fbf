//! Cratered gray albedo map.

use std::path::Path;

use image::{Rgba, RgbaImage};
use lunaria_config::schema::SurfaceConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::noise::ValueNoise;
use crate::gpu::RendererError;

/// Gray level where the noise is 0.
pub const BASE_GRAY: f32 = 150.0;
/// Gray range spanned by the noise.
pub const GRAY_RANGE: f32 = 90.0;

/// Texture synthesis parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSynth {
    pub size: u32,
    pub crater_count: u32,
    /// Diameter range in pixels, `[min, max)`.
    pub crater_min: f32,
    pub crater_max: f32,
    /// Black crater fill alpha out of 255.
    pub crater_alpha: u8,
    pub noise_scale: f32,
    pub seed: Option<u64>,
}

impl SurfaceSynth {
    pub fn from_config(config: &SurfaceConfig) -> Self {
        Self {
            size: config.size,
            crater_count: config.crater_count,
            crater_min: config.crater_min,
            crater_max: config.crater_max,
            crater_alpha: config.crater_alpha,
            noise_scale: config.noise_scale,
            seed: config.seed,
        }
    }

    /// Generate the texture, seeded from config or from entropy.
    pub fn generate(&self) -> RgbaImage {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> RgbaImage {
        let size = self.size.max(1);
        let noise = ValueNoise::new(rng);

        let mut img = RgbaImage::from_fn(size, size, |x, y| {
            let n = noise.sample(x as f32 * self.noise_scale, y as f32 * self.noise_scale);
            let v = (BASE_GRAY + n * GRAY_RANGE).round().clamp(0.0, 255.0) as u8;
            Rgba([v, v, v, 255])
        });

        let extent = size as f32;
        let alpha = self.crater_alpha as f32 / 255.0;
        for _ in 0..self.crater_count {
            let cx = rng.gen_range(0.0..extent);
            let cy = rng.gen_range(0.0..extent);
            let diameter = if self.crater_max > self.crater_min {
                rng.gen_range(self.crater_min..self.crater_max)
            } else {
                self.crater_min
            };
            darken_disc(&mut img, cx, cy, diameter * 0.5, alpha);
        }

        tracing::info!(
            size,
            craters = self.crater_count,
            "Surface texture synthesized"
        );
        img
    }

    /// Generate and write the texture as PNG.
    pub fn export_png(&self, path: &Path) -> Result<RgbaImage, RendererError> {
        let img = self.generate();
        img.save_with_format(path, image::ImageFormat::Png)?;
        tracing::info!(
            "Surface texture written to {} ({}x{})",
            path.display(),
            img.width(),
            img.height()
        );
        Ok(img)
    }
}

impl Default for SurfaceSynth {
    fn default() -> Self {
        Self::from_config(&SurfaceConfig::default())
    }
}

/// Blend black over a disc at `alpha`, with a one-pixel anti-aliased rim.
/// Alpha is left untouched.
pub fn darken_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, alpha: f32) {
    if radius <= 0.0 || alpha <= 0.0 {
        return;
    }
    let (w, h) = img.dimensions();
    let x0 = (cx - radius - 1.0).floor().max(0.0) as u32;
    let y0 = (cy - radius - 1.0).floor().max(0.0) as u32;
    let x1 = ((cx + radius + 1.0).ceil().max(0.0) as u32).min(w);
    let y1 = ((cy + radius + 1.0).ceil().max(0.0) as u32).min(h);

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let keep = 1.0 - alpha * coverage;
            let px = img.get_pixel_mut(x, y);
            for c in &mut px.0[..3] {
                *c = (*c as f32 * keep).round() as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SurfaceSynth {
        SurfaceSynth {
            size: 64,
            seed: Some(seed),
            ..SurfaceSynth::default()
        }
    }

    #[test]
    fn defaults_follow_config() {
        let s = SurfaceSynth::default();
        assert_eq!(s.size, 512);
        assert_eq!(s.crater_count, 170);
        assert_eq!(s.crater_alpha, 35);
        assert!((s.noise_scale - 0.02).abs() < f32::EPSILON);
    }

    #[test]
    fn gray_opaque_within_noise_band_without_craters() {
        let synth = SurfaceSynth {
            crater_count: 0,
            ..seeded(3)
        };
        let img = synth.generate();
        assert_eq!(img.dimensions(), (64, 64));
        for p in img.pixels() {
            assert_eq!(p[0], p[1]);
            assert_eq!(p[1], p[2]);
            assert_eq!(p[3], 255);
            assert!((150..=240).contains(&p[0]));
        }
    }

    #[test]
    fn craters_only_darken() {
        let plain = SurfaceSynth {
            crater_count: 0,
            ..seeded(8)
        }
        .generate();
        let cratered = seeded(8).generate();
        let mut darker = 0;
        for (a, b) in plain.pixels().zip(cratered.pixels()) {
            assert!(b[0] <= a[0]);
            assert_eq!(b[3], 255);
            if b[0] < a[0] {
                darker += 1;
            }
        }
        assert!(darker > 0);
    }

    #[test]
    fn same_seed_same_texture() {
        assert_eq!(seeded(21).generate(), seeded(21).generate());
    }

    #[test]
    fn disc_darkens_center_not_far_corner() {
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([200, 200, 200, 255]));
        darken_disc(&mut img, 16.0, 16.0, 5.0, 0.5);
        assert_eq!(img.get_pixel(16, 16)[0], 100);
        assert_eq!(img.get_pixel(0, 0)[0], 200);
        assert_eq!(img.get_pixel(16, 16)[3], 255);
    }

    #[test]
    fn disc_near_border_is_clipped() {
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([100, 100, 100, 255]));
        darken_disc(&mut img, 0.0, 7.9, 20.0, 1.0);
        assert!(img.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn export_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.png");
        let img = seeded(1).export_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, img);
    }
}
