use crate::world::make_still_life;
use log::info;
use std::sync::Arc;
use std::time::Instant;
use still_life::controls::keyboard::KeyboardState;
use still_life::controls::mouse::{describe_button, MouseTracker};
use still_life::controls::Reaction;
use still_life::settings::Settings;
use still_life::utils::frame_clock::FrameClock;
use still_life::Engine;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::window::Window;

const FRAME_CLOCK_SAMPLES: usize = 1;
const PIXELS_PER_SCROLL_LINE: f64 = 20.0;

pub(super) struct Sandbox {
    engine: Engine,
    keyboard: KeyboardState,
    mouse: MouseTracker,
    frame_clock: FrameClock,
    focused: bool,
}

impl Sandbox {
    pub(super) fn on_window_resized(&mut self, new_size: PhysicalSize<u32>) {
        self.engine.handle_window_resize(new_size);
    }

    #[must_use]
    pub(super) fn on_redraw(&mut self, window: Arc<Window>) -> Reaction {
        let elapsed = self.frame_clock.tick();

        let (x_offset, y_offset) = self.mouse.take_offsets();
        self.engine.camera().process_mouse_movement(x_offset, y_offset);

        let commands = self.keyboard.commands();
        if Reaction::Exit == self.engine.apply_commands(&commands, elapsed) {
            return Reaction::Exit;
        }
        self.engine.scene().advance(elapsed);

        self.engine.render(|| {
            window.pre_present_notify();
        });
        Reaction::Continue
    }

    pub(super) fn on_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.focused {
            self.mouse.add_motion(delta.0, delta.1);
        }
    }

    pub(super) fn on_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        info!("{}", describe_button(button, state));
    }

    pub(super) fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_SCROLL_LINE) as f32,
        };
        self.engine.camera().process_mouse_scroll(lines);
    }

    pub(super) fn on_keyboard_event(&mut self, event: &KeyEvent) {
        self.keyboard.handle_key_event(event);
    }

    pub(super) fn on_focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        if false == focused {
            self.keyboard.release_all();
            self.mouse.reset();
        }
    }

    pub(super) fn new(window: Arc<Window>, settings: &Settings) -> anyhow::Result<Self> {
        let start = Instant::now();

        let camera = settings.camera.make_camera();
        let scene = make_still_life(settings)?;

        let engine = pollster::block_on(Engine::new(window, scene, camera))?;

        info!("sandbox initialized in {} seconds", start.elapsed().as_secs_f64());

        Ok(Self {
            engine,
            keyboard: KeyboardState::new(),
            mouse: MouseTracker::new(),
            frame_clock: FrameClock::new(FRAME_CLOCK_SAMPLES),
            focused: true,
        })
    }
}
