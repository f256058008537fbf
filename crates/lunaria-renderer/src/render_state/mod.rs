mod batch;
mod helpers;
mod state;

pub use batch::FrameBatch;
pub use state::RenderState;
