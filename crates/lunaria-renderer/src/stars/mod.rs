//! Starfield rendering: instanced 6×6 spheres with an emissive gray.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
