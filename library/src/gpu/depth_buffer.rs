use crate::gpu::frame_buffer_size::FrameBufferSize;
use crate::gpu::resources::Resources;

pub(super) struct DepthBuffer {
    view: wgpu::TextureView,
    size: FrameBufferSize,
}

impl DepthBuffer {
    const CLEAR_DEPTH: f32 = 1.0;

    #[must_use]
    pub(super) fn new(resources: &Resources, size: FrameBufferSize) -> Self {
        let texture = resources.create_depth_texture("depth buffer", size);
        Self { view: texture.create_view(&wgpu::TextureViewDescriptor::default()), size }
    }

    #[must_use]
    pub(super) fn size(&self) -> FrameBufferSize {
        self.size
    }

    #[must_use]
    pub(super) fn attachment(&self) -> wgpu::RenderPassDepthStencilAttachment<'_> {
        wgpu::RenderPassDepthStencilAttachment {
            view: &self.view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(Self::CLEAR_DEPTH),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }
    }
}
