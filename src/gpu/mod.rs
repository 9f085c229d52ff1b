//! GPU resource management: device/surface initialization and textures.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment and planet texture upload.
pub mod texture;
