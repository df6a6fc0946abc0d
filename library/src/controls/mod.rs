pub mod keyboard;
pub mod mouse;

use crate::scene::camera::{Camera, Movement, Projection};
use crate::scene::container::Container;
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Exit,
    Move(Movement),
    ShowOverlay,
    HideOverlay,
    PauseLightOrbit,
    ResumeLightOrbit,
    Orthographic,
    Perspective,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reaction {
    Continue,
    Exit,
}

/// Mutates camera or scene state right away; `elapsed` scales movement.
pub fn apply(command: Command, camera: &mut Camera, scene: &mut Container, elapsed: Duration) -> Reaction {
    match command {
        Command::Exit => return Reaction::Exit,
        Command::Move(direction) => camera.process_keyboard(direction, elapsed.as_secs_f32()),
        Command::ShowOverlay => scene.set_overlay_visible(true),
        Command::HideOverlay => scene.set_overlay_visible(false),
        Command::PauseLightOrbit => scene.set_light_orbit_paused(true),
        Command::ResumeLightOrbit => scene.set_light_orbit_paused(false),
        Command::Orthographic => camera.set_projection(Projection::Orthographic),
        Command::Perspective => camera.set_projection(Projection::Perspective),
    }
    Reaction::Continue
}

/// Applies commands in order; an exit request stops the remaining ones.
pub fn apply_all(commands: &[Command], camera: &mut Camera, scene: &mut Container, elapsed: Duration) -> Reaction {
    for command in commands {
        if apply(*command, camera, scene, elapsed) == Reaction::Exit {
            return Reaction::Exit;
        }
    }
    Reaction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::alias::Point;
    use cgmath::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[must_use]
    fn make_state() -> (Camera, Container) {
        (Camera::new(Point::new(0.0, 0.0, 3.0)), Container::new())
    }

    #[test]
    fn test_exit() {
        let (mut camera, mut scene) = make_state();

        assert_eq!(apply(Command::Exit, &mut camera, &mut scene, Duration::ZERO), Reaction::Exit);
    }

    #[test]
    fn test_move_scales_with_elapsed_time() {
        let (mut camera, mut scene) = make_state();

        let reaction = apply(Command::Move(Movement::Forward), &mut camera, &mut scene, Duration::from_millis(400));

        assert_eq!(reaction, Reaction::Continue);
        assert_abs_diff_eq!(camera.position(), Point::new(0.0, 0.0, 2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_toggles() {
        let (mut camera, mut scene) = make_state();

        apply(Command::HideOverlay, &mut camera, &mut scene, Duration::ZERO);
        apply(Command::PauseLightOrbit, &mut camera, &mut scene, Duration::ZERO);
        apply(Command::Orthographic, &mut camera, &mut scene, Duration::ZERO);

        assert_eq!(scene.overlay_visible(), false);
        assert_eq!(scene.light_orbit_paused(), true);
        assert_eq!(camera.projection(), Projection::Orthographic);

        apply(Command::ShowOverlay, &mut camera, &mut scene, Duration::ZERO);
        apply(Command::ResumeLightOrbit, &mut camera, &mut scene, Duration::ZERO);
        apply(Command::Perspective, &mut camera, &mut scene, Duration::ZERO);

        assert_eq!(scene.overlay_visible(), true);
        assert_eq!(scene.light_orbit_paused(), false);
        assert_eq!(camera.projection(), Projection::Perspective);
    }

    #[test]
    fn test_toggles_are_idempotent() {
        let (mut camera, mut scene) = make_state();

        apply_all(&[Command::HideOverlay, Command::HideOverlay], &mut camera, &mut scene, Duration::ZERO);

        assert_eq!(scene.overlay_visible(), false);
    }

    #[test]
    fn test_last_toggle_wins() {
        let (mut camera, mut scene) = make_state();

        apply_all(&[Command::ShowOverlay, Command::HideOverlay], &mut camera, &mut scene, Duration::ZERO);

        assert_eq!(scene.overlay_visible(), false);
    }

    #[test]
    fn test_commands_with_movement_are_distinct_set_members() {
        let system_under_test: HashSet<Command> = [
            Command::Move(Movement::Forward),
            Command::Move(Movement::Backward),
            Command::Move(Movement::Forward),
            Command::Exit,
        ].into_iter().collect();

        assert_eq!(system_under_test.len(), 3);
        assert!(system_under_test.contains(&Command::Move(Movement::Backward)));
    }

    #[test]
    fn test_exit_stops_remaining_commands() {
        let (mut camera, mut scene) = make_state();

        let reaction = apply_all(&[Command::Exit, Command::HideOverlay], &mut camera, &mut scene, Duration::ZERO);

        assert_eq!(reaction, Reaction::Exit);
        assert_eq!(scene.overlay_visible(), true);
    }
}
