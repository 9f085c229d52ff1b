use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and starting pose.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance. Must cover the whole system.
    pub zfar: f32,
    /// Camera position before any navigation.
    pub start_position: [f32; 3],
    /// Point the camera faces. The view direction never changes after
    /// start-up; navigation only translates the camera.
    pub look_at: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 1.0,
            zfar: 100_000.0,
            start_position: [0.0, 0.0, 15_000.0],
            look_at: [0.0, 0.0, 0.0],
        }
    }
}
