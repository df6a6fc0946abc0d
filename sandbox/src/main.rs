mod sandbox;
mod world;

use crate::sandbox::Sandbox;
use anyhow::{anyhow, Context};
use log::{error, info, trace, warn};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use still_life::controls::Reaction;
use still_life::settings::{Settings, DEFAULT_SETTINGS_PATH};
use still_life::Engine;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{CursorGrabMode, Window, WindowId};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(Engine::get_reasonable_log_filter())).init();

    let resource_root = executable_directory().inspect_err(|e| error!("{e:#}"))?;
    info!("resource directory: {}", resource_root.display());
    let settings_path = env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| resource_root.join(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load_or_default(&settings_path).inspect_err(|e| error!("{e}"))?.with_resource_root(&resource_root);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut application = Application::new(settings);
    event_loop.run_app(&mut application)?;

    match application.startup_failure.take() {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}

fn executable_directory() -> anyhow::Result<PathBuf> {
    let executable = env::current_exe().context("could not locate the executable")?;
    executable.parent().map(Path::to_path_buf).ok_or_else(|| anyhow!("executable {} has no parent directory", executable.display()))
}

struct Application {
    settings: Settings,
    window: Option<Arc<Window>>,
    sandbox: Option<Sandbox>,
    startup_failure: Option<anyhow::Error>,
}

impl Application {
    #[must_use]
    fn new(settings: Settings) -> Self {
        Self { settings, window: None, sandbox: None, startup_failure: None }
    }

    fn fail_startup(&mut self, event_loop: &ActiveEventLoop, failure: anyhow::Error) {
        error!("startup failed: {failure:#}");
        self.startup_failure = Some(failure);
        event_loop.exit();
    }
}

fn capture_cursor(window: &Window) {
    let grab = window.set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(error) = grab {
        warn!("failed to grab the cursor: {error}");
    }
    window.set_cursor_visible(false);
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_settings = &self.settings.window;
        let window_creation
            = event_loop.create_window(Window::default_attributes()
                .with_title(window_settings.title.clone())
                .with_inner_size(LogicalSize::new(window_settings.width, window_settings.height)));

        let window = match window_creation {
            Ok(ware) => Arc::new(ware),
            Err(error) => {
                self.fail_startup(event_loop, anyhow::Error::new(error).context("could not create the window"));
                return;
            }
        };
        self.window = Some(window.clone());
        capture_cursor(&window);

        match Sandbox::new(window.clone(), &self.settings) {
            Ok(sandbox) => {
                self.sandbox = Some(sandbox);
                window.request_redraw();
            }
            Err(error) => self.fail_startup(event_loop, error),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(sandbox) = self.sandbox.as_mut() else {
            if let WindowEvent::CloseRequested = event {
                event_loop.exit();
            }
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                trace!("exiting the loop via close request");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                sandbox.on_window_resized(new_size);
            }
            WindowEvent::ScaleFactorChanged { scale_factor: new_scale_factor, .. } => {
                info!("window scale factor changed to {:?}", new_scale_factor);
            }
            WindowEvent::Focused(focused) => {
                sandbox.on_focus_changed(focused);
            }
            WindowEvent::RedrawRequested => {
                if let Some(window) = self.window.as_ref() {
                    if Reaction::Exit == sandbox.on_redraw(window.clone()) {
                        trace!("exiting the loop via exit command");
                        event_loop.exit();
                        return;
                    }
                    window.request_redraw();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                sandbox.on_mouse_button(state, button);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                sandbox.on_mouse_wheel(delta);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                sandbox.on_keyboard_event(&event);
            }
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        let Some(sandbox) = self.sandbox.as_mut() else {
            return;
        };
        if let DeviceEvent::MouseMotion { delta } = event {
            sandbox.on_mouse_motion(delta);
        }
    }
}
