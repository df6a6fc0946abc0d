pub mod camera;
pub mod container;
pub mod light;
pub mod material;
pub mod scene_object;
pub mod texture_warehouse;
