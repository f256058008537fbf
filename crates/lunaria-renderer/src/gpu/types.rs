use lunaria_common::LunariaError;

/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("texture error: {0}")]
    TextureError(String),
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<image::ImageError> for RendererError {
    fn from(e: image::ImageError) -> Self {
        RendererError::TextureError(e.to_string())
    }
}

impl From<RendererError> for LunariaError {
    fn from(e: RendererError) -> Self {
        match e {
            RendererError::TextureError(msg) => LunariaError::Texture(msg),
            other => LunariaError::Renderer(other.to_string()),
        }
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    /// A minimized window reports a zero extent.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
