//! Converts raw platform events into navigation commands.
//!
//! The `InputProcessor` owns the transient pointer state (cursor position
//! and whether the primary button is held). It is the only thing that sits
//! between raw window events and the navigation controller.

use super::event::{InputEvent, MouseButton};
use super::mouse::PointerState;
use crate::navigation::NavigationCommand;
use crate::picking::Picker;

/// Result of feeding one event to the [`InputProcessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputResponse {
    /// Command to hand to the navigation controller, if any.
    pub command: Option<NavigationCommand>,
    /// Whether the host should suppress its default handling of the event
    /// (page scrolling, for wheel events).
    pub consumed: bool,
}

impl InputResponse {
    const IGNORED: Self = Self {
        command: None,
        consumed: false,
    };
}

/// Converts raw window events into [`NavigationCommand`]s.
///
/// # Usage
///
/// ```ignore
/// let response = input.handle_event(event, &picker);
/// if let Some(command) = response.command {
///     controller.handle_command(command, camera.eye)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    pointer: PointerState,
}

impl InputProcessor {
    /// Create a processor with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.pointer.position
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.pointer.is_pressed()
    }

    /// Release the mouse button without producing a click, e.g. when the
    /// window loses focus mid-press.
    pub fn release_mouse_state(&mut self) {
        self.pointer.release();
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `picker` resolves click positions to point-of-interest indices.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        picker: &Picker<'_>,
    ) -> InputResponse {
        match event {
            InputEvent::Wheel { delta_y } => InputResponse {
                command: wheel_command(delta_y),
                consumed: true,
            },
            InputEvent::CursorMoved { x, y } => {
                self.pointer.handle_mouse_position(x, y);
                InputResponse::IGNORED
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, picker)
            }
            InputEvent::Click { x, y } => click(picker, x, y),
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        picker: &Picker<'_>,
    ) -> InputResponse {
        if button != MouseButton::Left {
            return InputResponse::IGNORED;
        }
        if pressed {
            self.pointer.handle_mouse_down();
            return InputResponse::IGNORED;
        }
        match self.pointer.handle_mouse_up() {
            Some((x, y)) => click(picker, x, y),
            None => InputResponse::IGNORED,
        }
    }
}

fn wheel_command(delta_y: f32) -> Option<NavigationCommand> {
    if delta_y > 0.0 {
        Some(NavigationCommand::Advance)
    } else if delta_y < 0.0 {
        Some(NavigationCommand::Retreat)
    } else {
        None
    }
}

fn click(picker: &Picker<'_>, x: f32, y: f32) -> InputResponse {
    let command = picker
        .pick_at(x, y)
        .map(|index| NavigationCommand::Select { index });
    if let Some(command) = command {
        log::debug!("click at ({x}, {y}) -> {command:?}");
    }
    InputResponse {
        command,
        consumed: false,
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::Camera;
    use crate::camera::ray::{Sphere, Viewport};
    use crate::options::CameraOptions;
    use crate::picking::HitRegistry;

    /// One planet dead ahead of the default camera, registered as index 2.
    fn registry() -> HitRegistry {
        let mut registry = HitRegistry::new();
        registry.register(2, Sphere::new(Vec3::new(0.0, 0.0, -1000.0), 500.0));
        registry
    }

    fn picker(registry: &HitRegistry) -> Picker<'_> {
        let camera = Camera::from_options(&CameraOptions::default(), 1.0);
        Picker {
            registry,
            view_proj: camera.build_matrix(),
            viewport: Viewport::new(400.0, 400.0),
        }
    }

    #[test]
    fn wheel_maps_to_advance_and_retreat() {
        let registry = HitRegistry::new();
        let picker = picker(&registry);
        let mut input = InputProcessor::new();

        let down = input.handle_event(InputEvent::Wheel { delta_y: 3.0 }, &picker);
        assert_eq!(down.command, Some(NavigationCommand::Advance));
        assert!(down.consumed);

        let up = input.handle_event(InputEvent::Wheel { delta_y: -1.0 }, &picker);
        assert_eq!(up.command, Some(NavigationCommand::Retreat));

        let zero = input.handle_event(InputEvent::Wheel { delta_y: 0.0 }, &picker);
        assert_eq!(zero.command, None);
        assert!(zero.consumed);
    }

    #[test]
    fn click_on_planet_selects_it() {
        let registry = registry();
        let picker = picker(&registry);
        let mut input = InputProcessor::new();
        let response =
            input.handle_event(InputEvent::Click { x: 200.0, y: 200.0 }, &picker);
        assert_eq!(
            response.command,
            Some(NavigationCommand::Select { index: 2 })
        );
        assert!(!response.consumed);
    }

    #[test]
    fn click_on_empty_space_does_nothing() {
        let registry = registry();
        let picker = picker(&registry);
        let mut input = InputProcessor::new();
        let response =
            input.handle_event(InputEvent::Click { x: 5.0, y: 5.0 }, &picker);
        assert_eq!(response, InputResponse::default());
    }

    #[test]
    fn unloaded_planet_is_not_selectable() {
        let registry = HitRegistry::new();
        let picker = picker(&registry);
        let mut input = InputProcessor::new();
        let response =
            input.handle_event(InputEvent::Click { x: 200.0, y: 200.0 }, &picker);
        assert_eq!(response.command, None);
    }

    #[test]
    fn press_release_synthesizes_click_at_cursor() {
        let registry = registry();
        let picker = picker(&registry);
        let mut input = InputProcessor::new();

        let moved = input
            .handle_event(InputEvent::CursorMoved { x: 200.0, y: 200.0 }, &picker);
        assert_eq!(moved.command, None);
        assert_eq!(input.mouse_pos(), (200.0, 200.0));

        let press = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        };
        assert_eq!(input.handle_event(press, &picker).command, None);
        assert!(input.mouse_pressed());

        let release = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        };
        assert_eq!(
            input.handle_event(release, &picker).command,
            Some(NavigationCommand::Select { index: 2 })
        );
        assert!(!input.mouse_pressed());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let registry = registry();
        let picker = picker(&registry);
        let mut input = InputProcessor::new();
        let _ = input
            .handle_event(InputEvent::CursorMoved { x: 200.0, y: 200.0 }, &picker);
        let release = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        };
        assert_eq!(input.handle_event(release, &picker).command, None);
    }

    #[test]
    fn non_primary_buttons_never_click() {
        let registry = registry();
        let picker = picker(&registry);
        let mut input = InputProcessor::new();
        let _ = input
            .handle_event(InputEvent::CursorMoved { x: 200.0, y: 200.0 }, &picker);
        for button in [MouseButton::Right, MouseButton::Middle, MouseButton::Other]
        {
            for pressed in [true, false] {
                let event = InputEvent::MouseButton { button, pressed };
                assert_eq!(input.handle_event(event, &picker).command, None);
            }
        }
    }

    #[test]
    fn released_state_suppresses_click() {
        let registry = registry();
        let picker = picker(&registry);
        let mut input = InputProcessor::new();
        let press = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        };
        let _ = input.handle_event(press, &picker);
        input.release_mouse_state();
        let release = InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        };
        assert_eq!(input.handle_event(release, &picker).command, None);
    }
}
