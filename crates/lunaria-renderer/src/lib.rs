pub mod gpu;
pub mod moon;
pub mod perf;
pub mod render_state;
mod shaders;
pub mod sphere;
pub mod stars;
pub mod surface;

pub use gpu::{GpuContext, RendererError};
pub use perf::FrameClock;
pub use render_state::{FrameBatch, RenderState};
pub use surface::{SurfaceSynth, ValueNoise};
