/// Tracks cursor position and the primary button so a press followed by a
/// release can be reported as a click.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    pub(crate) position: (f32, f32),
    pressed: bool,
}

impl PointerState {
    pub(crate) fn handle_mouse_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }

    pub(crate) fn handle_mouse_down(&mut self) {
        self.pressed = true;
    }

    /// Returns the click position if this release ends a press.
    pub(crate) fn handle_mouse_up(&mut self) -> Option<(f32, f32)> {
        let was_pressed = std::mem::take(&mut self.pressed);
        was_pressed.then_some(self.position)
    }

    /// Forget a press without producing a click.
    pub(crate) fn release(&mut self) {
        self.pressed = false;
    }

    pub(crate) fn is_pressed(&self) -> bool {
        self.pressed
    }
}
