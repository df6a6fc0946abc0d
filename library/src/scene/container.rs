use crate::mesh::mesh_data::{MeshData, MeshError};
use crate::scene::light::SceneLight;
use crate::scene::scene_object::SceneObject;
use crate::scene::texture_warehouse::TextureWarehouse;
use palette::Srgb;
use std::time::Duration;

pub const MAX_LIGHTS: usize = 2;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct MeshSlot(pub(crate) usize);

impl From<usize> for MeshSlot {
    fn from(value: usize) -> Self {
        MeshSlot(value)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct ObjectIndex(pub(crate) usize);

impl From<usize> for ObjectIndex {
    fn from(value: usize) -> Self {
        ObjectIndex(value)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct LightIndex(pub(crate) usize);

impl From<usize> for LightIndex {
    fn from(value: usize) -> Self {
        LightIndex(value)
    }
}

/// Application state shared by input handling and rendering: what is drawn,
/// how it is lit, and the user toggles.
pub struct Container {
    meshes: Vec<MeshData>,
    textures: TextureWarehouse,
    objects: Vec<SceneObject>,
    lights: Vec<SceneLight>,
    ambient: Srgb,

    overlay_visible: bool,
    light_orbit_paused: bool,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            textures: TextureWarehouse::new(),
            objects: Vec::new(),
            lights: Vec::new(),
            ambient: Srgb::new(1.0, 1.0, 1.0),
            overlay_visible: true,
            light_orbit_paused: false,
        }
    }

    pub fn add_mesh(&mut self, mesh: MeshData) -> Result<MeshSlot, MeshError> {
        mesh.validate()?;
        Ok(Container::push_indexed(&mut self.meshes, |_| mesh))
    }

    pub fn add_object(&mut self, object: SceneObject) -> ObjectIndex {
        assert!(object.mesh().0 < self.meshes.len(), "object references an unknown mesh");
        if let Some(texture) = object.diffuse_texture() {
            assert!(texture.0 < self.textures.count(), "object references an unknown texture");
        }
        if let Some(texture) = object.overlay_texture() {
            assert!(texture.0 < self.textures.count(), "object references an unknown overlay");
        }
        Container::push_indexed(&mut self.objects, |_| object)
    }

    pub fn add_light(&mut self, light: SceneLight) -> LightIndex {
        assert!(self.lights.len() < MAX_LIGHTS, "at most {MAX_LIGHTS} lights are supported");
        Container::push_indexed(&mut self.lights, |_| light)
    }

    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        assert!((0.0..=1.0).contains(&r));
        assert!((0.0..=1.0).contains(&g));
        assert!((0.0..=1.0).contains(&b));
        self.ambient = Srgb::new(r, g, b);
    }

    #[must_use]
    fn push_indexed<Object, Index, Constructor>(container: &mut Vec<Object>, create_object: Constructor) -> Index
    where
        Index: From<usize> + Copy,
        Constructor: FnOnce(Index) -> Object,
    {
        let index = Index::from(container.len());
        let object = create_object(index);
        container.push(object);
        index
    }

    /// Moves orbiting lights along their paths unless orbiting is paused.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.light_orbit_paused {
            return;
        }
        for light in self.lights.iter_mut() {
            light.advance(elapsed);
        }
    }

    pub fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    pub fn set_light_orbit_paused(&mut self, paused: bool) {
        self.light_orbit_paused = paused;
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    #[must_use]
    pub fn light_orbit_paused(&self) -> bool {
        self.light_orbit_paused
    }

    #[must_use]
    pub fn textures(&mut self) -> &mut TextureWarehouse {
        &mut self.textures
    }

    #[must_use]
    pub(crate) fn texture_warehouse(&self) -> &TextureWarehouse {
        &self.textures
    }

    #[must_use]
    pub fn mesh(&self, slot: MeshSlot) -> &MeshData {
        &self.meshes[slot.0]
    }

    #[must_use]
    pub(crate) fn meshes(&self) -> &[MeshData] {
        &self.meshes
    }

    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    #[must_use]
    pub fn lights(&self) -> &[SceneLight] {
        &self.lights
    }

    #[must_use]
    pub fn light(&self, index: LightIndex) -> &SceneLight {
        &self.lights[index.0]
    }

    #[must_use]
    pub fn ambient(&self) -> Srgb {
        self.ambient
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
