//! Input handling: event types and the input processor that converts raw
//! window events into navigation commands.

/// Platform-agnostic input events.
pub mod event;
/// Cursor tracking and press/release click synthesis.
pub(crate) mod mouse;
/// Converts raw events into navigation commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, InputResponse};
