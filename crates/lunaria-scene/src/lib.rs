//! GPU-free core of the lunar phase display.
//!
//! Everything here is a pure function of (moon index, frame count,
//! pointer sample) plus the star set, so it can be tested without a
//! window or device. The renderer crate consumes it through [`DrawSink`].

pub mod camera;
pub mod compose;
pub mod math;
pub mod moon;
pub mod palette;
pub mod phase;
pub mod shading;
pub mod stars;

pub use camera::{CameraPose, PointerSample, Viewport};
pub use compose::{DrawSink, FrameInput, SceneContext, SceneSettings};
pub use moon::{MoonInstance, MoonOptions, RowLayout};
pub use shading::{ShadingParams, SurfacePoint};
pub use stars::{Star, StarDraw, Starfield};
