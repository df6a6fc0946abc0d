pub mod circle;
pub mod cuboid;
pub mod cylinder;
pub mod mesh_data;
pub mod plane;
pub mod pyramid;
pub mod vertex_attributes;
