use crate::geometry::alias::Point;
use crate::geometry::axis::Axis;
use crate::geometry::fundamental_constants::DEFAULT_SEGMENTS_COUNT;
use crate::geometry::vertex::Vertex;
use crate::mesh::cylinder::MIN_SEGMENTS_COUNT;
use crate::mesh::mesh_data::MeshData;
use crate::mesh::vertex_attributes::VertexAttributes;
use more_asserts::{assert_ge, assert_le};
use std::f32::consts::TAU;

const MAX_SEGMENTS_COUNT: u16 = u16::MAX / 3;

/// Flat disc drawn as an unindexed triangle fan around its center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
    segments: u16,
    facing: Axis,
    attributes: VertexAttributes,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point, radius: f32) -> Self {
        Circle { center, radius, segments: DEFAULT_SEGMENTS_COUNT, facing: Axis::default(), attributes: VertexAttributes::POSITION }
    }

    #[must_use]
    pub fn with_segments(mut self, segments: u16) -> Self {
        assert_ge!(segments, MIN_SEGMENTS_COUNT);
        assert_le!(segments, MAX_SEGMENTS_COUNT);
        self.segments = segments;
        self
    }

    #[must_use]
    pub fn facing(mut self, axis: Axis) -> Self {
        self.facing = axis;
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: VertexAttributes) -> Self {
        self.attributes = attributes | VertexAttributes::POSITION;
        self
    }

    #[must_use]
    pub fn rim_point(&self, index: u16) -> Point {
        let angle = (index % self.segments) as f32 * TAU / self.segments as f32;
        let (u, v) = self.facing.tangent_basis();
        self.center + (u * angle.cos() + v * angle.sin()) * self.radius
    }

    #[must_use]
    pub fn mesh(&self) -> MeshData {
        let mut result = MeshData::unindexed(self.attributes);
        let normal = self.facing.unit();
        let center = Vertex::new(self.center).with_normal(normal).with_texture_coordinate(0.5, 0.5);

        for i in 0..self.segments {
            result.push_vertex(&center);
            for corner in [i, i + 1] {
                let angle = (corner % self.segments) as f32 * TAU / self.segments as f32;
                let rim = Vertex::new(self.rim_point(corner))
                    .with_normal(normal)
                    .with_texture_coordinate(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin());
                result.push_vertex(&rim);
            }
        }
        result
    }
}
