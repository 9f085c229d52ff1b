//! Shared utilities: easing curves and frame timing.

pub mod easing;
/// Frame delta measurement and FPS smoothing.
pub mod frame_timing;
