use crate::gpu::bind_group_builder::BindGroupBuilder;
use wgpu::{BindGroup, RenderPass};

/// The Phong render pipeline with its per-frame group. Group 0 is shared by
/// every draw; group 1 is bound per object by the caller.
pub(super) struct PhongPipeline {
    pipeline: wgpu::RenderPipeline,
    frame_group: Option<BindGroup>,
}

impl PhongPipeline {
    pub(super) const FRAME_GROUP_INDEX: u32 = 0;
    pub(super) const OBJECT_GROUP_INDEX: u32 = 1;

    #[must_use]
    pub(super) fn new(pipeline: wgpu::RenderPipeline) -> Self {
        Self { pipeline, frame_group: None }
    }

    #[must_use]
    pub(super) fn frame_group_builder(&self) -> BindGroupBuilder<'static> {
        let layout = self.pipeline.get_bind_group_layout(Self::FRAME_GROUP_INDEX);
        BindGroupBuilder::new(Self::FRAME_GROUP_INDEX, Some("phong frame group"), layout)
    }

    #[must_use]
    pub(super) fn object_group_builder(&self) -> BindGroupBuilder<'static> {
        let layout = self.pipeline.get_bind_group_layout(Self::OBJECT_GROUP_INDEX);
        BindGroupBuilder::new(Self::OBJECT_GROUP_INDEX, Some("phong object group"), layout)
    }

    pub(super) fn commit_frame_group(&mut self, device: &wgpu::Device, bind_group_builder: BindGroupBuilder) {
        assert_eq!(bind_group_builder.index(), Self::FRAME_GROUP_INDEX, "not a frame group");
        self.frame_group = Some(bind_group_builder.make_bind_group(device));
    }

    pub(super) fn set_into_pass(&self, pass: &mut RenderPass) {
        pass.set_pipeline(&self.pipeline);
        let Some(frame_group) = self.frame_group.as_ref() else {
            panic!("frame group must be committed before drawing");
        };
        pass.set_bind_group(Self::FRAME_GROUP_INDEX, frame_group, &[]);
    }

    pub(super) fn set_object_group(&self, pass: &mut RenderPass, object_group: &BindGroup) {
        pass.set_bind_group(Self::OBJECT_GROUP_INDEX, object_group, &[]);
    }
}
