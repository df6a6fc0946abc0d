use winit::event::{ElementState, MouseButton};

/// Accumulates raw pointer motion between frames. Deltas come from the
/// device rather than the cursor, so rotation keeps going while the cursor is
/// grabbed at the window edge.
#[derive(Default)]
pub struct MouseTracker {
    pending_x: f64,
    pending_y: f64,
}

impl MouseTracker {
    #[must_use]
    pub fn new() -> Self {
        Self { pending_x: 0.0, pending_y: 0.0 }
    }

    pub fn add_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_x += delta_x;
        self.pending_y += delta_y;
    }

    /// Returns `(x_offset, y_offset)` gathered since the previous call, with y
    /// reversed: device y grows downwards.
    pub fn take_offsets(&mut self) -> (f32, f32) {
        let result = (self.pending_x as f32, -self.pending_y as f32);
        self.reset();
        result
    }

    pub fn reset(&mut self) {
        self.pending_x = 0.0;
        self.pending_y = 0.0;
    }
}

#[must_use]
pub fn describe_button(button: MouseButton, state: ElementState) -> String {
    let name = match button {
        MouseButton::Left => "Left",
        MouseButton::Middle => "Middle",
        MouseButton::Right => "Right",
        _ => return "Unhandled mouse button event".to_string(),
    };
    let action = match state {
        ElementState::Pressed => "pressed",
        ElementState::Released => "released",
    };
    format!("{name} mouse button {action}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_nothing_moved() {
        let mut system_under_test = MouseTracker::new();
        assert_eq!(system_under_test.take_offsets(), (0.0, 0.0));
    }

    #[test]
    fn test_motion_accumulates_until_taken() {
        let mut system_under_test = MouseTracker::new();

        system_under_test.add_motion(10.0, -10.0);
        system_under_test.add_motion(-4.0, 3.0);

        assert_eq!(system_under_test.take_offsets(), (6.0, 7.0));
        assert_eq!(system_under_test.take_offsets(), (0.0, 0.0));
    }

    #[test]
    fn test_motion_is_unbounded() {
        let mut system_under_test = MouseTracker::new();

        for _ in 0..1000 {
            system_under_test.add_motion(-5.0, 0.0);
        }

        assert_eq!(system_under_test.take_offsets(), (-5000.0, 0.0));
    }

    #[test]
    fn test_reset_drops_pending_motion() {
        let mut system_under_test = MouseTracker::new();
        system_under_test.add_motion(100.0, 100.0);

        system_under_test.reset();

        assert_eq!(system_under_test.take_offsets(), (0.0, 0.0));
    }

    #[rstest]
    #[case(MouseButton::Left, ElementState::Pressed, "Left mouse button pressed")]
    #[case(MouseButton::Left, ElementState::Released, "Left mouse button released")]
    #[case(MouseButton::Middle, ElementState::Pressed, "Middle mouse button pressed")]
    #[case(MouseButton::Right, ElementState::Released, "Right mouse button released")]
    #[case(MouseButton::Back, ElementState::Pressed, "Unhandled mouse button event")]
    #[case(MouseButton::Other(7), ElementState::Released, "Unhandled mouse button event")]
    fn test_describe_button(#[case] button: MouseButton, #[case] state: ElementState, #[case] expected: &str) {
        assert_eq!(describe_button(button, state), expected);
    }
}
