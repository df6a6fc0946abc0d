use cgmath::Deg;
use still_life::geometry::alias::{Point, Vector};
use still_life::geometry::axis::Axis;
use still_life::geometry::transform::{Affine, Transformation};
use still_life::mesh::circle::Circle;
use still_life::mesh::cuboid::Cuboid;
use still_life::mesh::cylinder::Cylinder;
use still_life::mesh::plane::Plane;
use still_life::mesh::pyramid::Pyramid;
use still_life::mesh::vertex_attributes::VertexAttributes;
use still_life::scene::container::Container;
use still_life::scene::light::{Orbit, PointLight, SceneLight};
use still_life::scene::material::Material;
use still_life::scene::scene_object::SceneObject;
use still_life::settings::Settings;

const TABLE_TOP_Y: f32 = -0.5;

/// Spice jars, a pepper mill, a mug on a coaster and a paperweight on a
/// wooden table, lit by an orbiting key light and a static fill light.
pub(super) fn make_still_life(settings: &Settings) -> anyhow::Result<Container> {
    let mut scene = Container::new();

    let wood = scene.textures().load(&settings.textures.table)?;
    let label = scene.textures().load(&settings.textures.label)?;
    let hat = scene.textures().load(&settings.textures.hat)?;

    let table = scene.add_mesh(Plane::floor(Point::new(0.0, TABLE_TOP_Y, 0.0), 4.0, 3.0).with_texture_repeat(2.0).mesh())?;
    scene.add_object(SceneObject::new(table)
        .with_texture(wood)
        .with_material(Material::new().with_specular_strength(0.2).with_shininess(8.0)));

    let basil = scene.add_mesh(Cuboid::new(
        Point::new(2.0, 1.3, 0.7),
        Point::new(1.0, 1.3, 0.2),
        Point::new(1.0, TABLE_TOP_Y, 0.2),
        Point::new(2.0, TABLE_TOP_Y, 0.7),
        1.0).faceted_mesh())?;
    scene.add_object(SceneObject::new(basil)
        .with_texture(label)
        .with_material(Material::new().with_tint(0.45, 0.75, 0.35)));

    let cayenne = scene.add_mesh(Cuboid::new(
        Point::new(-1.0, 1.3, 0.2),
        Point::new(-2.0, 1.3, 0.7),
        Point::new(-2.0, TABLE_TOP_Y, 0.7),
        Point::new(-1.0, TABLE_TOP_Y, 0.2),
        1.0).mesh())?;
    scene.add_object(SceneObject::new(cayenne));

    let pepper_mill = scene.add_mesh(Cylinder::new(Point::new(0.0, TABLE_TOP_Y, -1.5), 0.3, 1.8).mesh())?;
    scene.add_object(SceneObject::new(pepper_mill)
        .with_material(Material::new().with_tint(0.25, 0.15, 0.1).with_specular_strength(0.8).with_shininess(64.0)));

    let mug = scene.add_mesh(Cylinder::new(Point::new(0.2, TABLE_TOP_Y, 1.0), 0.4, 0.9).mesh())?;
    scene.add_object(SceneObject::new(mug)
        .with_texture(label)
        .with_overlay(hat)
        .with_material(Material::new().with_specular_strength(0.6)));

    let coaster_height = 0.005;
    let coaster = scene.add_mesh(Circle::new(Point::new(0.2, TABLE_TOP_Y + coaster_height, 1.0), 0.6)
        .facing(Axis::Y)
        .with_attributes(VertexAttributes::lit())
        .mesh())?;
    scene.add_object(SceneObject::new(coaster)
        .with_material(Material::new().with_tint(0.55, 0.35, 0.2).with_specular_strength(0.1)));

    let paperweight = scene.add_mesh(Pyramid::new(Point::new(0.0, 0.7, 0.0), 0.7, 0.35).faceted_mesh())?;
    let placement = Affine::from_translation(Vector::new(-0.9, TABLE_TOP_Y, 1.3)) * Affine::from_angle_y(Deg(30.0));
    scene.add_object(SceneObject::new(paperweight)
        .with_transformation(Transformation::new(placement))
        .with_material(Material::new().with_tint(0.9, 0.8, 0.2).with_shininess(128.0)));

    let key_light_center = Point::new(0.0, 2.5, 0.0);
    scene.add_light(SceneLight::orbiting(
        PointLight::new(key_light_center),
        Orbit::new(key_light_center, settings.light_orbit.radius, settings.light_orbit.degrees_per_second)));
    scene.add_light(SceneLight::fixed(
        PointLight::new(Point::new(-3.0, 1.5, 3.0)).with_color(0.6, 0.6, 0.8).with_intensity(0.5)));

    Ok(scene)
}
