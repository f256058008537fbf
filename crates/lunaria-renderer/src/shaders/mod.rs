//! WGSL sources for the moon and star pipelines.

pub(crate) const MOON_WGSL: &str = include_str!("moon.wgsl");
pub(crate) const STAR_WGSL: &str = include_str!("star.wgsl");
