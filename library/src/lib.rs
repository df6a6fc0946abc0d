#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]

pub mod controls;
pub mod geometry;
pub mod mesh;
pub mod scene;
pub mod settings;
pub mod utils;
mod gpu;

use crate::controls::{Command, Reaction};
use crate::gpu::context::Context;
use crate::gpu::frame_buffer_size::FrameBufferSize;
use crate::gpu::render::Renderer;
use crate::scene::camera::Camera;
use crate::scene::container::Container;
use crate::utils::frame_clock::FrameClock;
use crate::utils::time_throttled_logger::TimeThrottledLogger;
use log::{info, warn, Level};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use wgpu::{Adapter, Trace};
use winit::window::Window;

const DEVICE_LABEL: &str = "Still Life Library";

const FPS_MEASUREMENT_SAMPLES: usize = 15;
const FPS_WRITE_INTERVAL: Duration = Duration::from_secs(2);

pub struct Engine {
    /*Our code is single-threaded, but the device lost callback
    has to be Send + Sync, hence the atomic flag.*/
    device_was_lost: Arc<AtomicBool>,

    window_pixels_size: winit::dpi::PhysicalSize<u32>,
    ignore_render_requests: bool,

    context: Rc<Context>,

    window_output_surface: wgpu::Surface<'static>,
    window_surface_format: wgpu::TextureFormat,

    renderer: Renderer,

    fps_measurer: FrameClock,
    performance_reporter: TimeThrottledLogger,
}

#[derive(Error, Debug)]
pub enum EngineInstantiationError {
    #[error("failed to create window surface: {what:?}")]
    SurfaceCreationError {
        what: String,
    },
    #[error("failed to request adapter: {what:?}")]
    AdapterRequisitionError{
        what: String,
    },
    #[error("failed to select device: {what:?}")]
    DeviceSelectionError {
        what: String,
    },
    #[error("surface is incompatible with the device")]
    SurfaceCompatibilityError
    ,
    #[error("internal error: {what:?}")]
    InternalError {
        what: String,
    },
}

/// Shader program failures; `what` carries the driver's diagnostic text.
#[derive(Error, Debug, PartialEq)]
pub enum ShaderError {
    #[error("failed to compile shader module '{label}': {what}")]
    Compilation {
        label: String,
        what: String,
    },
    #[error("failed to link shader program: {what}")]
    Linking {
        what: String,
    },
}

impl Engine {
    #[must_use]
    pub fn get_reasonable_log_filter() -> &'static str {
        "wgpu=warn,naga=warn,info"
    }

    /// Every mesh, texture and object in `scene` is uploaded here; lights,
    /// toggles and the camera stay mutable through [`Engine::scene`] and
    /// [`Engine::camera`].
    pub async fn new(window: Arc<Window>, scene: Container, camera: Camera) -> Result<Engine, EngineInstantiationError> {
        let wgpu_instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            flags: wgpu::InstanceFlags::empty(),
            ..Default::default()
        });

        let window_pixels_size = window.inner_size();
        let window_surface = wgpu_instance.create_surface(window.clone())
            .map_err(|e| EngineInstantiationError::SurfaceCreationError{what: e.to_string()})?;

        let graphics_adapter = wgpu_instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&window_surface),
                ..Default::default()
            })
            .await
            .map_err(|error| EngineInstantiationError::AdapterRequisitionError{what: error.to_string()})?;

        log_adapter_info(&graphics_adapter);

        let (graphics_device, commands_queue) = graphics_adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some(DEVICE_LABEL),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: Trace::Off,
            })
            .await
            .map_err(|e| EngineInstantiationError::DeviceSelectionError {what: e.to_string()})?;

        let surface_capabilities = window_surface.get_capabilities(&graphics_adapter);
        let output_surface_format = select_surface_format(&surface_capabilities.formats)
            .ok_or(EngineInstantiationError::SurfaceCompatibilityError)?;

        let device_was_lost_flag = Arc::new(AtomicBool::new(false));

        let lost_device_handler = {
            let device_was_lost = Arc::clone(&device_was_lost_flag);
            move |reason, message| {
                warn!("device was lost: {:?}, {}", reason, message);
                device_was_lost.store(true, Ordering::SeqCst);
            }
        };
        graphics_device.set_device_lost_callback(lost_device_handler);

        let context = Rc::new(Context::new(graphics_device, commands_queue));

        let frame_buffer_size = FrameBufferSize::from_window(window_pixels_size);
        let renderer
            = Renderer::new(
                context.clone(),
                scene,
                camera,
                output_surface_format,
                frame_buffer_size,
            )
            .await
            .map_err(|e| EngineInstantiationError::InternalError {what: format!("{e:#}")})?;

        let ware = Engine {
            device_was_lost: device_was_lost_flag.clone(),
            context: context.clone(),
            window_pixels_size,
            ignore_render_requests: window_pixels_size.width == 0 || window_pixels_size.height == 0,
            window_output_surface: window_surface,
            window_surface_format: output_surface_format,
            renderer,

            fps_measurer: FrameClock::new(FPS_MEASUREMENT_SAMPLES),
            performance_reporter: TimeThrottledLogger::new(FPS_WRITE_INTERVAL, Level::Info),
        };

        if false == ware.ignore_render_requests {
            ware.configure_surface();
        }

        Ok(ware)
    }

    fn configure_surface(&self) {
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.window_surface_format,
            view_formats: vec![self.window_surface_format],
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            width: self.window_pixels_size.width,
            height: self.window_pixels_size.height,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 1,
        };

        self.window_output_surface.configure(self.context.device(), &surface_config);
    }

    fn configure_render(&mut self) {
        self.renderer.set_output_size(FrameBufferSize::from_window(self.window_pixels_size));
    }

    pub fn handle_window_resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            info!("window resized to zero, will not respond to render requests");
            self.ignore_render_requests = true;
            return;
        }

        let was_ignoring = self.ignore_render_requests;
        if was_ignoring {
            info!("window resized, will respond to render requests");
            self.ignore_render_requests = false;
        }

        if new_size == self.window_pixels_size && false == was_ignoring {
            return;
        }
        info!("window resized to {}x{}", new_size.width, new_size.height);
        self.window_pixels_size = new_size;
        self.configure_surface();
        self.configure_render();
    }

    #[must_use]
    pub fn device_was_lost(&self) -> bool {
        self.device_was_lost.load(Ordering::SeqCst)
    }

    pub fn render<Code: Fn()>(&mut self, pre_present_notify: Code) {
        if self.ignore_render_requests || self.device_was_lost() {
            return;
        }

        let surface_texture = match self.window_output_surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                warn!("surface is outdated, reconfiguring");
                self.configure_surface();
                return;
            }
            Err(error) => {
                warn!("failed to acquire next image in the swapchain: {error}");
                return;
            }
        };

        self.renderer.present(&surface_texture);

        pre_present_notify();
        surface_texture.present();

        self.fps_measurer.tick();
        self.write_performance_report();
    }

    fn write_performance_report(&mut self) {
        let Some(fps) = self.fps_measurer.frames_per_second() else {
            return;
        };
        self.performance_reporter.do_write(|| format!("CPU observed FPS: {fps:.1}"));
    }

    #[must_use]
    pub fn camera(&mut self) -> &mut Camera {
        self.renderer.camera()
    }

    #[must_use]
    pub fn scene(&mut self) -> &mut Container {
        self.renderer.scene()
    }

    /// Runs this frame's input commands against the camera and the scene.
    pub fn apply_commands(&mut self, commands: &[Command], elapsed: Duration) -> Reaction {
        let (camera, scene) = self.renderer.camera_and_scene();
        controls::apply_all(commands, camera, scene, elapsed)
    }
}

/// Prefers a linear format: colours are written to the surface exactly as
/// computed, without sRGB re-encoding.
#[must_use]
fn select_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats.iter().copied().find(|format| false == format.is_srgb()).or_else(|| formats.first().copied())
}

fn log_adapter_info(adapter: &Adapter) {
    let adapter_info = adapter.get_info();
    info!(
        "Adapter Info:\n\
         Name: {}\n\
         Backend: {:?}\n\
         Vendor: {:#x}\n\
         Device: {:#x}\n\
         Device Type: {:?}\n\
         Driver: {:?}\n\
         Driver Info: {:?}",
        adapter_info.name,
        adapter_info.backend,
        adapter_info.vendor,
        adapter_info.device,
        adapter_info.device_type,
        adapter_info.driver,
        adapter_info.driver_info,
    );
}
