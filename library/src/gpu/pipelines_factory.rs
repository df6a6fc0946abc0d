use crate::gpu::context::Context;
use crate::gpu::gpu_vertex::GpuVertex;
use crate::gpu::resources::DEPTH_FORMAT;
use crate::ShaderError;
use std::rc::Rc;

pub(crate) struct PipelinesFactory {
    context: Rc<Context>,
    presentation_format: wgpu::TextureFormat,
}

impl PipelinesFactory {
    const RASTERIZATION_PIPELINE_LABEL: &'static str = "rasterization pipeline";

    #[must_use]
    pub(crate) fn new(context: Rc<Context>, presentation_format: wgpu::TextureFormat) -> Self {
        Self { context, presentation_format }
    }

    /// Entry points and bind group layouts are derived from the module; a
    /// mismatch between stages is reported as a linking failure.
    pub(super) async fn create_rasterization_pipeline(&self, module: &wgpu::ShaderModule) -> Result<wgpu::RenderPipeline, ShaderError> {
        let device = self.context.device();
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(Self::RASTERIZATION_PIPELINE_LABEL),
            layout: None,
            vertex: wgpu::VertexState {
                module,
                entry_point: None,
                compilation_options: Default::default(),
                buffers: &[GpuVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module,
                entry_point: None,
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.presentation_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        match device.pop_error_scope().await {
            Some(error) => Err(ShaderError::Linking { what: error.to_string() }),
            None => Ok(pipeline),
        }
    }
}
