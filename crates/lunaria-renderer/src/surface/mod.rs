//! Procedural albedo map shared by every moon: generated once on the
//! CPU, uploaded once, never mutated.

mod noise;
mod synth;
mod texture;

pub use noise::ValueNoise;
pub use synth::*;
pub use texture::SurfaceTexture;
