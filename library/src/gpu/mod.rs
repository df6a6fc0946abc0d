pub(crate) mod context;
pub(crate) mod frame_buffer_size;
pub(crate) mod render;
pub(crate) mod resources;

mod bind_group_builder;
mod bitmap_textures;
mod depth_buffer;
mod gpu_vertex;
mod phong_pipeline;
mod pipelines_factory;
mod uniforms;
