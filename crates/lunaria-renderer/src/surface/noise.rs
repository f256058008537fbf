//! Seeded multi-octave value noise with cosine interpolation.

use rand::Rng;

const TABLE_SIZE: usize = 4096;
const TABLE_MASK: i64 = TABLE_SIZE as i64 - 1;

/// 2D lattice value noise, output in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ValueNoise {
    table: Vec<f32>,
    octaves: u32,
    falloff: f32,
}

impl ValueNoise {
    pub const DEFAULT_OCTAVES: u32 = 4;
    pub const DEFAULT_FALLOFF: f32 = 0.5;

    /// Fill the lattice table from `rng`: four octaves, half amplitude each.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let table = (0..TABLE_SIZE).map(|_| rng.gen::<f32>()).collect();
        Self {
            table,
            octaves: Self::DEFAULT_OCTAVES,
            falloff: Self::DEFAULT_FALLOFF,
        }
    }

    /// Override octave count (at least 1) and per-octave amplitude falloff.
    pub fn with_detail(mut self, octaves: u32, falloff: f32) -> Self {
        self.octaves = octaves.max(1);
        self.falloff = falloff.clamp(0.0, 1.0);
        self
    }

    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let mut sum = 0.0;
        let mut norm = 0.0;
        let mut amp = 0.5;
        let mut freq = 1.0;
        for _ in 0..self.octaves {
            sum += self.octave(x * freq, y * freq) * amp;
            norm += amp;
            amp *= self.falloff;
            freq *= 2.0;
        }
        if norm > 0.0 {
            (sum / norm).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    fn octave(&self, x: f32, y: f32) -> f32 {
        let xf = x.floor();
        let yf = y.floor();
        let (xi, yi) = (xf as i64, yf as i64);
        let tx = cosine_ease(x - xf);
        let ty = cosine_ease(y - yf);

        let v00 = self.lattice(xi, yi);
        let v10 = self.lattice(xi + 1, yi);
        let v01 = self.lattice(xi, yi + 1);
        let v11 = self.lattice(xi + 1, yi + 1);

        let top = v00 + (v10 - v00) * tx;
        let bottom = v01 + (v11 - v01) * tx;
        top + (bottom - top) * ty
    }

    fn lattice(&self, xi: i64, yi: i64) -> f32 {
        let h = xi
            .wrapping_mul(73_856_093)
            .wrapping_add(yi.wrapping_mul(19_349_663));
        self.table[(h & TABLE_MASK) as usize]
    }
}

fn cosine_ease(t: f32) -> f32 {
    0.5 * (1.0 - (t * std::f32::consts::PI).cos())
}
