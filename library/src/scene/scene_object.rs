use crate::geometry::transform::Transformation;
use crate::scene::container::MeshSlot;
use crate::scene::material::Material;
use crate::scene::texture_warehouse::TextureSlot;

/// A placed instance of a registered mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneObject {
    mesh: MeshSlot,
    transformation: Transformation,
    material: Material,
    diffuse_texture: Option<TextureSlot>,
    overlay_texture: Option<TextureSlot>,
}

impl SceneObject {
    #[must_use]
    pub fn new(mesh: MeshSlot) -> Self {
        SceneObject {
            mesh,
            transformation: Transformation::identity(),
            material: Material::default(),
            diffuse_texture: None,
            overlay_texture: None,
        }
    }

    #[must_use]
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = transformation;
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    #[must_use]
    pub fn with_texture(mut self, texture: TextureSlot) -> Self {
        self.diffuse_texture = Some(texture);
        self
    }

    /// Second texture blended over the diffuse one while the scene's overlay is visible.
    #[must_use]
    pub fn with_overlay(mut self, texture: TextureSlot) -> Self {
        self.overlay_texture = Some(texture);
        self
    }

    #[must_use]
    pub fn mesh(&self) -> MeshSlot {
        self.mesh
    }

    #[must_use]
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    #[must_use]
    pub fn diffuse_texture(&self) -> Option<TextureSlot> {
        self.diffuse_texture
    }

    #[must_use]
    pub fn overlay_texture(&self) -> Option<TextureSlot> {
        self.overlay_texture
    }
}
