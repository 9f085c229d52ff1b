//! Engine: the GPU-free [`SceneView`] and the [`SolarSystemEngine`] that
//! renders it.

mod core;
mod scene_view;

pub use self::core::SolarSystemEngine;
pub use self::scene_view::{FrameUpdate, SceneView};
