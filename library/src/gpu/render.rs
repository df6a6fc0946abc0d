use crate::gpu::bitmap_textures::BitmapTextures;
use crate::gpu::context::Context;
use crate::gpu::depth_buffer::DepthBuffer;
use crate::gpu::frame_buffer_size::FrameBufferSize;
use crate::gpu::gpu_vertex::GpuVertex;
use crate::gpu::phong_pipeline::PhongPipeline;
use crate::gpu::pipelines_factory::PipelinesFactory;
use crate::gpu::resources::Resources;
use crate::gpu::uniforms::{FrameUniforms, ObjectUniforms};
use crate::mesh::mesh_data::MeshData;
use crate::scene::camera::Camera;
use crate::scene::container::Container;
use std::rc::Rc;
use wgpu::StoreOp;

pub(crate) struct Renderer {
    context: Rc<Context>,
    resources: Resources,
    frame_uniforms: Rc<wgpu::Buffer>,
    pipeline: PhongPipeline,
    depth_buffer: DepthBuffer,
    meshes: Vec<MeshBuffers>,
    draw_items: Vec<DrawItem>,
    scene: Container,
    camera: Camera,
}

struct MeshBuffers {
    vertices: Rc<wgpu::Buffer>,
    indices: Option<Rc<wgpu::Buffer>>,
    element_count: u32,
}

struct DrawItem {
    mesh: usize,
    uniforms: Rc<wgpu::Buffer>,
    bind_group: wgpu::BindGroup,
}

impl Renderer {
    /// Uploads every mesh, texture and object registered in the scene so far;
    /// the set of drawn objects is fixed from here on.
    pub(crate) async fn new(
        context: Rc<Context>,
        scene: Container,
        camera: Camera,
        presentation_format: wgpu::TextureFormat,
        frame_buffer_size: FrameBufferSize,
    )
    -> anyhow::Result<Self> {
        let resources = Resources::new(context.clone());

        let shader_module = resources.create_shader_module("phong shader", CODE_FOR_GPU).await?;
        let pipeline = PipelinesFactory::new(context.clone(), presentation_format)
            .create_rasterization_pipeline(&shader_module)
            .await?;
        let mut pipeline = PhongPipeline::new(pipeline);

        let frame_uniforms = FrameUniforms::new(&camera, &scene, frame_buffer_size.aspect());
        let frame_uniforms = resources.create_uniform_buffer("frame uniforms", bytemuck::bytes_of(&frame_uniforms));
        Self::setup_frame_bindings(&context, &frame_uniforms, &mut pipeline);

        let meshes = scene.meshes().iter().enumerate().map(|(index, mesh)| Self::upload_mesh(&resources, index, mesh)).collect();
        let draw_items = Self::create_draw_items(&context, &resources, &pipeline, &scene);

        let depth_buffer = DepthBuffer::new(&resources, frame_buffer_size);

        Ok(Self {
            context,
            resources,
            frame_uniforms,
            pipeline,
            depth_buffer,
            meshes,
            draw_items,
            scene,
            camera,
        })
    }

    fn setup_frame_bindings(context: &Context, frame_uniforms: &Rc<wgpu::Buffer>, pipeline: &mut PhongPipeline) {
        let mut bind_group_builder = pipeline.frame_group_builder();
        bind_group_builder
            .set_buffer_entry(0, frame_uniforms.clone())
        ;
        pipeline.commit_frame_group(context.device(), bind_group_builder);
    }

    #[must_use]
    fn upload_mesh(resources: &Resources, index: usize, mesh: &MeshData) -> MeshBuffers {
        let vertices = GpuVertex::expand(mesh);
        MeshBuffers {
            vertices: resources.create_vertex_buffer(&format!("mesh {index} vertices"), bytemuck::cast_slice(&vertices)),
            indices: mesh.indices().map(|indices| resources.create_index_buffer(&format!("mesh {index} indices"), bytemuck::cast_slice(indices))),
            element_count: mesh.element_count() as u32,
        }
    }

    #[must_use]
    fn create_draw_items(context: &Context, resources: &Resources, pipeline: &PhongPipeline, scene: &Container) -> Vec<DrawItem> {
        let textures = BitmapTextures::new(resources, scene.texture_warehouse());
        scene.objects().iter().enumerate().map(|(index, object)| {
            let mesh_attributes = scene.mesh(object.mesh()).attributes();
            let uniforms = ObjectUniforms::new(object, mesh_attributes);
            let uniforms = resources.create_uniform_buffer(&format!("object {index} uniforms"), bytemuck::bytes_of(&uniforms));

            let mut bind_group_builder = pipeline.object_group_builder();
            bind_group_builder
                .set_buffer_entry(0, uniforms.clone())
                .set_texture_entry(1, textures.view(object.diffuse_texture()))
                .set_sampler_entry(2, textures.sampler())
                .set_texture_entry(3, textures.view(object.overlay_texture()))
            ;

            DrawItem { mesh: object.mesh().0, uniforms, bind_group: bind_group_builder.make_bind_group(context.device()) }
        })
        .collect()
    }

    pub(crate) fn set_output_size(&mut self, new_size: FrameBufferSize) {
        if new_size != self.depth_buffer.size() {
            self.depth_buffer = DepthBuffer::new(&self.resources, new_size);
        }
    }

    fn write_uniforms(&self) {
        let queue = self.context.queue();

        let frame_uniforms = FrameUniforms::new(&self.camera, &self.scene, self.depth_buffer.size().aspect());
        queue.write_buffer(&self.frame_uniforms, 0, bytemuck::bytes_of(&frame_uniforms));

        for (item, object) in self.draw_items.iter().zip(self.scene.objects()) {
            let mesh_attributes = self.scene.mesh(object.mesh()).attributes();
            let object_uniforms = ObjectUniforms::new(object, mesh_attributes);
            queue.write_buffer(&item.uniforms, 0, bytemuck::bytes_of(&object_uniforms));
        }
    }

    pub(crate) fn present(&mut self, surface_texture: &wgpu::SurfaceTexture) {
        self.write_uniforms();

        let view = surface_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let render_pass_descriptor = wgpu::RenderPassDescriptor {
            label: Some("rasterization pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0, }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(self.depth_buffer.attachment()),
            occlusion_query_set: None,
            timestamp_writes: None,
        };

        let mut encoder = self.context.create_command_encoder("rasterization pass encoder"); {
            let mut rasterization_pass = encoder.begin_render_pass(&render_pass_descriptor);
            self.pipeline.set_into_pass(&mut rasterization_pass);

            for item in &self.draw_items {
                let mesh = &self.meshes[item.mesh];
                if 0 == mesh.element_count {
                    continue;
                }
                self.pipeline.set_object_group(&mut rasterization_pass, &item.bind_group);
                rasterization_pass.set_vertex_buffer(0, mesh.vertices.slice(..));
                match &mesh.indices {
                    Some(indices) => {
                        rasterization_pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint16);
                        rasterization_pass.draw_indexed(0..mesh.element_count, 0, 0..1);
                    }
                    None => rasterization_pass.draw(0..mesh.element_count, 0..1),
                }
            }
        }
        self.context.submit(encoder);
    }

    #[must_use]
    pub(crate) fn camera(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[must_use]
    pub(crate) fn scene(&mut self) -> &mut Container {
        &mut self.scene
    }

    #[must_use]
    pub(crate) fn camera_and_scene(&mut self) -> (&mut Camera, &mut Container) {
        (&mut self.camera, &mut self.scene)
    }
}

pub(crate) const CODE_FOR_GPU: &str = include_str!("../../assets/shaders/phong.wgsl");
