//! Camera model and screen-space picking rays.

/// Perspective camera and GPU uniform types.
pub mod core;
/// Screen-to-world rays and ray-sphere intersection.
pub mod ray;
