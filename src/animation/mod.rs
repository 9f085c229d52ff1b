//! Camera transition animation.
//!
//! The navigation controller hands a [`TransitionRequest`] to a
//! [`TransitionEngine`] and advances it once per frame. [`CameraTween`] is
//! the default engine.

pub mod tween;

pub use tween::{
    CameraTween, TransitionEngine, TransitionRequest, TransitionStep,
};
