//! Sphere geometry shared by the moon and star pipelines: mesh
//! generation and MVP math.

pub mod matrix;
mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
