use crate::gpu::context::Context;
use crate::gpu::frame_buffer_size::FrameBufferSize;
use crate::scene::texture_warehouse::MipChain;
use crate::ShaderError;
use std::rc::Rc;
use wgpu::util::DeviceExt;
use wgpu::BufferUsages;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub(crate) const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

const BYTES_PER_TEXEL: u32 = 4;

pub(crate) struct Resources {
    context: Rc<Context>,
}

impl Resources {
    #[must_use]
    pub(crate) fn new(context: Rc<Context>) -> Self {
        Self { context }
    }

    /// Compiles WGSL inside a validation scope so broken code surfaces as an
    /// error instead of the device's uncaptured-error panic.
    pub(crate) async fn create_shader_module(&self, label: &str, shader_source_code: &str) -> Result<wgpu::ShaderModule, ShaderError> {
        let device = self.context.device();
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(shader_source_code.into()),
        });
        match device.pop_error_scope().await {
            Some(error) => Err(ShaderError::Compilation { label: label.to_string(), what: error.to_string() }),
            None => Ok(module),
        }
    }

    #[must_use]
    pub(crate) fn create_buffer(&self, label: &str, usage: BufferUsages, buffer_data: &[u8]) -> Rc<wgpu::Buffer> {
        let buffer = self.context.device().create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: buffer_data,
            usage,
        });
        Rc::new(buffer)
    }

    #[must_use]
    pub(super) fn create_uniform_buffer(&self, label: &str, buffer_data: &[u8]) -> Rc<wgpu::Buffer> {
        self.create_buffer(label, BufferUsages::UNIFORM | BufferUsages::COPY_DST, buffer_data)
    }

    #[must_use]
    pub(super) fn create_vertex_buffer(&self, label: &str, buffer_data: &[u8]) -> Rc<wgpu::Buffer> {
        self.create_buffer(label, BufferUsages::VERTEX, buffer_data)
    }

    #[must_use]
    pub(super) fn create_index_buffer(&self, label: &str, buffer_data: &[u8]) -> Rc<wgpu::Buffer> {
        self.create_buffer(label, BufferUsages::INDEX, buffer_data)
    }

    #[must_use]
    pub(super) fn create_sampler(&self, label: &str) -> wgpu::Sampler {
        self.context.device().create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        })
    }

    /// Uploads every level of the chain; image rows go top to bottom, so
    /// texture coordinate v = 0 addresses the top row.
    #[must_use]
    pub(super) fn create_texture(&self, label: &str, source: &MipChain) -> wgpu::Texture {
        let texture = self.context.device().create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d { width: source.width(), height: source.height(), depth_or_array_layers: 1 },
            mip_level_count: source.levels().len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in source.levels().iter().enumerate() {
            let (width, height) = level.dimensions();
            self.context.queue().write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                level.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(BYTES_PER_TEXEL * width),
                    rows_per_image: Some(height),
                },
                wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
            );
        }

        texture
    }

    #[must_use]
    pub(super) fn create_depth_texture(&self, label: &str, size: FrameBufferSize) -> wgpu::Texture {
        self.context.device().create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d { width: size.width(), height: size.height(), depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
    }
}
