use crate::geometry::alias::Point;
use crate::scene::camera::Camera;
use crate::scene::container::{Container, MAX_LIGHTS};
use crate::scene::scene_object::SceneObject;
use crate::mesh::vertex_attributes::VertexAttributes;
use bytemuck::{Pod, Zeroable};
use palette::Srgb;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(super) struct GpuLight {
    position: [f32; 4],
    /// Colour premultiplied by intensity; `w` is unused.
    radiance: [f32; 4],
}

/// Mirrors `FrameUniforms` in the shader; written once per frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(super) struct FrameUniforms {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    view_position: [f32; 4],
    ambient: [f32; 4],
    /// x: overlay visible, y: active light count.
    switches: [u32; 4],
    lights: [GpuLight; MAX_LIGHTS],
}

impl FrameUniforms {
    #[must_use]
    pub(super) fn new(camera: &Camera, scene: &Container, aspect: f32) -> Self {
        let mut lights = [GpuLight::zeroed(); MAX_LIGHTS];
        for (target, source) in lights.iter_mut().zip(scene.lights()) {
            let light = source.light();
            *target = GpuLight {
                position: homogeneous_point(light.position()),
                radiance: scaled_color(light.color(), light.intensity()),
            };
        }

        Self {
            view: camera.view_matrix().into(),
            projection: camera.projection_matrix(aspect).into(),
            view_position: homogeneous_point(camera.position()),
            ambient: scaled_color(scene.ambient(), 1.0),
            switches: [u32::from(scene.overlay_visible()), scene.lights().len() as u32, 0, 0],
            lights,
        }
    }
}

/// Mirrors `ObjectUniforms` in the shader; one buffer per scene object.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub(super) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    /// ambient, diffuse, specular strengths and shininess.
    material: [f32; 4],
    tint: [f32; 4],
    /// x: lit, y: textured, z: has overlay.
    flags: [u32; 4],
}

impl ObjectUniforms {
    #[must_use]
    pub(super) fn new(object: &SceneObject, mesh_attributes: VertexAttributes) -> Self {
        let material = object.material();
        let has_uvs = mesh_attributes.contains(VertexAttributes::TEXTURE_COORDINATE);
        Self {
            model: object.transformation().model_matrix().into(),
            normal_matrix: object.transformation().normal_matrix().into(),
            material: [material.ambient_strength(), material.diffuse_strength(), material.specular_strength(), material.shininess()],
            tint: scaled_color(material.tint(), 1.0),
            flags: [
                u32::from(mesh_attributes.contains(VertexAttributes::NORMAL)),
                u32::from(has_uvs && object.diffuse_texture().is_some()),
                u32::from(has_uvs && object.overlay_texture().is_some()),
                0,
            ],
        }
    }
}

#[must_use]
fn homogeneous_point(point: Point) -> [f32; 4] {
    [point.x, point.y, point.z, 1.0]
}

#[must_use]
fn scaled_color(color: Srgb, scale: f32) -> [f32; 4] {
    [color.red * scale, color.green * scale, color.blue * scale, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::transform::Transformation;
    use crate::mesh::cuboid::Cuboid;
    use crate::scene::light::{Orbit, PointLight, SceneLight};
    use crate::scene::material::Material;
    use crate::scene::texture_warehouse::TextureSlot;
    use cgmath::{Matrix4, Vector3};
    use image::RgbaImage;

    #[test]
    fn test_sizes_match_shader_layout() {
        assert_eq!(size_of::<GpuLight>(), 32);
        assert_eq!(size_of::<FrameUniforms>(), 240);
        assert_eq!(size_of::<ObjectUniforms>(), 176);
    }

    #[must_use]
    fn make_scene_with_cube() -> (Container, SceneObject) {
        let mut scene = Container::new();
        let mesh = scene.add_mesh(Cuboid::from_extent(Point::new(0.0, 1.0, 0.0), 1.0, 1.0, 1.0).faceted_mesh()).unwrap();
        let texture = scene.textures().add(RgbaImage::new(2, 2));
        let object = SceneObject::new(mesh).with_texture(texture);
        (scene, object)
    }

    #[test]
    fn test_frame_uniforms_lights() {
        let (mut scene, _) = make_scene_with_cube();
        scene.add_light(SceneLight::fixed(PointLight::new(Point::new(1.0, 2.0, 3.0)).with_color(1.0, 0.5, 0.0).with_intensity(2.0)));
        scene.add_light(SceneLight::orbiting(PointLight::new(Point::new(0.0, 0.0, 0.0)), Orbit::new(Point::new(0.0, 0.0, 0.0), 3.0, 30.0)));
        scene.set_overlay_visible(false);

        let system_under_test = FrameUniforms::new(&Camera::default(), &scene, 1.0);

        assert_eq!(system_under_test.switches, [0, 2, 0, 0]);
        assert_eq!(system_under_test.lights[0].position, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(system_under_test.lights[0].radiance, [2.0, 1.0, 0.0, 1.0]);
        assert_eq!(system_under_test.ambient, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_frame_uniforms_unused_light_slots_stay_dark() {
        let (scene, _) = make_scene_with_cube();

        let system_under_test = FrameUniforms::new(&Camera::default(), &scene, 1.0);

        assert_eq!(system_under_test.switches[1], 0);
        assert_eq!(system_under_test.lights, [GpuLight::zeroed(); MAX_LIGHTS]);
    }

    #[test]
    fn test_frame_uniforms_camera() {
        let (scene, _) = make_scene_with_cube();
        let camera = Camera::new(Point::new(0.0, 0.0, 3.0));

        let system_under_test = FrameUniforms::new(&camera, &scene, 2.0);

        assert_eq!(system_under_test.view_position, [0.0, 0.0, 3.0, 1.0]);
        let expected_view: [[f32; 4]; 4] = camera.view_matrix().into();
        let expected_projection: [[f32; 4]; 4] = camera.projection_matrix(2.0).into();
        assert_eq!(system_under_test.view, expected_view);
        assert_eq!(system_under_test.projection, expected_projection);
    }

    #[test]
    fn test_object_uniforms_flags() {
        let (_, object) = make_scene_with_cube();

        let lit_textured = ObjectUniforms::new(&object, VertexAttributes::lit_textured());
        let colored = ObjectUniforms::new(&object, VertexAttributes::colored());
        let with_overlay = ObjectUniforms::new(&object.clone().with_overlay(TextureSlot(0)), VertexAttributes::lit_textured());

        assert_eq!(lit_textured.flags, [1, 1, 0, 0]);
        assert_eq!(colored.flags, [0, 0, 0, 0]);
        assert_eq!(with_overlay.flags, [1, 1, 1, 0]);
    }

    #[test]
    fn test_object_uniforms_material_and_model() {
        let (_, object) = make_scene_with_cube();
        let translation = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let material = Material::new().with_tint(0.5, 0.25, 1.0).with_shininess(64.0);
        let object = object.with_material(material).with_transformation(Transformation::new(translation));

        let system_under_test = ObjectUniforms::new(&object, VertexAttributes::lit_textured());

        assert_eq!(system_under_test.material, [0.1, 1.0, 0.5, 64.0]);
        assert_eq!(system_under_test.tint, [0.5, 0.25, 1.0, 1.0]);
        let expected_model: [[f32; 4]; 4] = translation.into();
        assert_eq!(system_under_test.model, expected_model);
    }
}
