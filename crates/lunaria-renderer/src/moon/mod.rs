//! Moon rendering: instanced 72×72 spheres shaded by the phase model.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
