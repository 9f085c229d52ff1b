/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`NavigationCommand`](crate::NavigationCommand)
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Vertical wheel motion, browser convention.
    Wheel {
        /// Positive when scrolling down (advance), negative when scrolling
        /// up (retreat).
        delta_y: f32,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A completed click, for hosts that already do click detection.
    Click {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (back, forward, extra). Never produces a click.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit wheel delta. winit reports positive y for scrolling
    /// up, so the sign is flipped. Pixel deltas keep their magnitude; line
    /// deltas are only ever compared against zero.
    #[must_use]
    pub fn from_wheel(delta: winit::event::MouseScrollDelta) -> Self {
        let delta_y = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => -y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
        };
        Self::Wheel { delta_y }
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use super::*;

    #[test]
    fn only_primary_winit_button_maps_to_left() {
        assert_eq!(
            MouseButton::from(winit::event::MouseButton::Left),
            MouseButton::Left
        );
        for button in [
            winit::event::MouseButton::Back,
            winit::event::MouseButton::Forward,
            winit::event::MouseButton::Other(7),
        ] {
            assert_eq!(MouseButton::from(button), MouseButton::Other);
        }
    }

    #[test]
    fn wheel_up_is_negative_delta() {
        let event = InputEvent::from_wheel(
            winit::event::MouseScrollDelta::LineDelta(0.0, 1.0),
        );
        assert_eq!(event, InputEvent::Wheel { delta_y: -1.0 });
    }
}
