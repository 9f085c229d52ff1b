use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera with a fixed orientation.
///
/// Navigation only ever moves [`eye`](Self::eye); the view direction is set
/// once from the configured look-at point and left alone, so planets
/// approached along +Z stay centered.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Camera {
    /// Build a camera from options and an initial aspect ratio.
    ///
    /// A look-at point equal to the start position falls back to looking
    /// down -Z.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        let eye = Vec3::from(options.start_position);
        let forward = (Vec3::from(options.look_at) - eye)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);
        Self {
            eye,
            forward,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Update the aspect ratio after a resize. Zero-height surfaces are
    /// ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }

    /// Projection matrix. `perspective_rh` already uses the [0,1] depth
    /// range wgpu expects.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4Swizzles;

    use super::*;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::from_options(&CameraOptions::default(), 1.5);
        assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 15_000.0));
        assert!((camera.forward - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn degenerate_look_at_falls_back() {
        let options = CameraOptions {
            look_at: [0.0, 0.0, 15_000.0],
            ..CameraOptions::default()
        };
        let camera = Camera::from_options(&options, 1.0);
        assert_eq!(camera.forward, Vec3::NEG_Z);
    }

    #[test]
    fn point_ahead_projects_to_center() {
        let camera = Camera::from_options(&CameraOptions::default(), 1.0);
        let clip = camera.build_matrix() * Vec3::ZERO.extend(1.0);
        let ndc = clip.xyz() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn zero_height_resize_keeps_aspect() {
        let mut camera = Camera::from_options(&CameraOptions::default(), 2.0);
        camera.set_viewport(800, 0);
        assert_eq!(camera.aspect, 2.0);
        camera.set_viewport(800, 400);
        assert_eq!(camera.aspect, 2.0);
        camera.set_viewport(300, 600);
        assert_eq!(camera.aspect, 0.5);
    }
}
