use crate::geometry::alias::{Point, Vector};
use crate::geometry::fundamental_constants::DEFAULT_SEGMENTS_COUNT;
use crate::geometry::vertex::Vertex;
use crate::mesh::mesh_data::MeshData;
use crate::mesh::vertex_attributes::VertexAttributes;
use more_asserts::{assert_ge, assert_le};
use std::f32::consts::TAU;

pub(crate) const MIN_SEGMENTS_COUNT: u16 = 3;
const MAX_SEGMENTS_COUNT: u16 = 16_000;

/// Upright cylinder standing on `base_center`, tessellated by an angle sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
    base_center: Point,
    radius: f32,
    height: f32,
    segments: u16,
}

impl Cylinder {
    #[must_use]
    pub fn new(base_center: Point, radius: f32, height: f32) -> Self {
        Cylinder { base_center, radius, height, segments: DEFAULT_SEGMENTS_COUNT }
    }

    #[must_use]
    pub fn with_segments(mut self, segments: u16) -> Self {
        assert_ge!(segments, MIN_SEGMENTS_COUNT);
        assert_le!(segments, MAX_SEGMENTS_COUNT);
        self.segments = segments;
        self
    }

    #[must_use]
    pub fn segments(&self) -> u16 {
        self.segments
    }

    /// Lateral ring of `segments + 1` bottom/top pairs followed by the top and
    /// the bottom cap fans. The last ring pair repeats the first one so the
    /// seam can carry its own texture coordinate.
    #[must_use]
    pub fn mesh(&self) -> MeshData {
        let mut result = MeshData::indexed(VertexAttributes::lit_textured());
        let segments = self.segments;
        let top_lift = Vector::new(0.0, self.height, 0.0);

        for i in 0..=segments {
            let (cos, sin) = self.direction(i);
            let normal = Vector::new(cos, 0.0, sin);
            let bottom = self.base_center + normal * self.radius;
            let u = i as f32 / segments as f32;
            result.push_vertex(&Vertex::new(bottom).with_normal(normal).with_texture_coordinate(u, 0.0));
            result.push_vertex(&Vertex::new(bottom + top_lift).with_normal(normal).with_texture_coordinate(u, 1.0));
        }
        for i in 0..segments {
            let (bottom, top) = (2 * i, 2 * i + 1);
            let (next_bottom, next_top) = (bottom + 2, top + 2);
            result.push_triangle(bottom, top, next_bottom);
            result.push_triangle(top, next_top, next_bottom);
        }

        self.push_cap(&mut result, self.base_center + top_lift, Vector::unit_y());
        self.push_cap(&mut result, self.base_center, -Vector::unit_y());

        result
    }

    fn push_cap(&self, target: &mut MeshData, center: Point, normal: Vector) {
        let center_index = target.push_vertex(&Vertex::new(center).with_normal(normal).with_texture_coordinate(0.5, 0.5));
        let first_rim = center_index + 1;
        for i in 0..=self.segments {
            let (cos, sin) = self.direction(i);
            let rim = center + Vector::new(cos, 0.0, sin) * self.radius;
            target.push_vertex(&Vertex::new(rim).with_normal(normal).with_texture_coordinate(0.5 + 0.5 * cos, 0.5 + 0.5 * sin));
        }
        let facing_up = normal.y > 0.0;
        for i in 0..self.segments {
            let (current, next) = (first_rim + i, first_rim + i + 1);
            if facing_up {
                target.push_triangle(center_index, next, current);
            } else {
                target.push_triangle(center_index, current, next);
            }
        }
    }

    #[must_use]
    fn direction(&self, index: u16) -> (f32, f32) {
        let angle = (index % self.segments) as f32 * TAU / self.segments as f32;
        (angle.cos(), angle.sin())
    }
}
