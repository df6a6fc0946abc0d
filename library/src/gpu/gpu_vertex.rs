use crate::mesh::mesh_data::MeshData;
use bytemuck::{Pod, Zeroable};

/// The single vertex format every mesh is uploaded in; attributes a mesh
/// lacks carry the defaults of `Vertex`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(super) struct GpuVertex {
    position: [f32; 3],
    normal: [f32; 3],
    color: [f32; 4],
    texture_coordinate: [f32; 2],
}

impl GpuVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x4,
        3 => Float32x2,
    ];

    #[must_use]
    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    #[must_use]
    pub(super) fn expand(mesh: &MeshData) -> Vec<GpuVertex> {
        (0..mesh.vertex_count())
            .map(|index| {
                let vertex = mesh.vertex(index);
                let color = vertex.color();
                GpuVertex {
                    position: vertex.position().into(),
                    normal: vertex.normal().into(),
                    color: [color.red, color.green, color.blue, color.alpha],
                    texture_coordinate: vertex.texture_coordinate().into(),
                }
            })
            .collect()
    }
}
