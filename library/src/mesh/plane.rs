use crate::geometry::alias::{Point, Vector};
use crate::geometry::vertex::Vertex;
use crate::mesh::mesh_data::MeshData;
use crate::mesh::vertex_attributes::VertexAttributes;
use cgmath::InnerSpace;

/// Quad given by its corners in top-right, top-left, bottom-left, bottom-right
/// order. Coplanarity and convexity are the caller's business.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    corners: [Point; 4],
    texture_repeat: f32,
}

impl Plane {
    #[must_use]
    pub fn new(top_right: Point, top_left: Point, bottom_left: Point, bottom_right: Point) -> Self {
        Plane { corners: [top_right, top_left, bottom_left, bottom_right], texture_repeat: 1.0 }
    }

    /// Horizontal square centered at `center`, its front edge towards +Z.
    #[must_use]
    pub fn floor(center: Point, half_width: f32, half_depth: f32) -> Self {
        Self::new(
            center + Vector::new(half_width, 0.0, -half_depth),
            center + Vector::new(-half_width, 0.0, -half_depth),
            center + Vector::new(-half_width, 0.0, half_depth),
            center + Vector::new(half_width, 0.0, half_depth),
        )
    }

    /// Number of times the texture tiles along each edge.
    #[must_use]
    pub fn with_texture_repeat(mut self, repeat: f32) -> Self {
        self.texture_repeat = repeat;
        self
    }

    #[must_use]
    pub fn normal(&self) -> Vector {
        let [top_right, top_left, bottom_left, _] = self.corners;
        let normal = (top_left - top_right).cross(bottom_left - top_right);
        if normal.magnitude2() > 0.0 { normal.normalize() } else { normal }
    }

    #[must_use]
    pub fn mesh(&self) -> MeshData {
        let mut result = MeshData::indexed(VertexAttributes::lit_textured());
        let normal = self.normal();
        let repeat = self.texture_repeat;
        let texture_coordinates = [(repeat, repeat), (0.0, repeat), (0.0, 0.0), (repeat, 0.0)];

        for (corner, (u, v)) in self.corners.iter().zip(texture_coordinates) {
            result.push_vertex(&Vertex::new(*corner).with_normal(normal).with_texture_coordinate(u, v));
        }
        result.push_triangle(0, 1, 2);
        result.push_triangle(0, 2, 3);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::alias::TextureCoordinate;
    use cgmath::{assert_abs_diff_eq, EuclideanSpace};

    #[must_use]
    fn make_table() -> Plane {
        Plane::floor(Point::new(0.0, -0.5, 0.0), 3.0, 2.0)
    }

    #[test]
    fn test_indexed_counts() {
        let system_under_test = make_table().mesh();

        assert_eq!(system_under_test.vertex_count(), 4);
        assert_eq!(system_under_test.indices(), Some(&[0_u16, 1, 2, 0, 2, 3][..]));
        assert_eq!(system_under_test.validate(), Ok(()));
    }

    #[test]
    fn test_unindexed_form() {
        let system_under_test = make_table().mesh().flattened();

        assert_eq!(system_under_test.vertex_count(), 6);
        assert_eq!(system_under_test.triangle_count(), 2);
        assert_eq!(system_under_test.position(3), system_under_test.position(0));
        assert_eq!(system_under_test.position(4), system_under_test.position(2));
    }

    #[test]
    fn test_floor_faces_up() {
        assert_abs_diff_eq!(make_table().normal(), Vector::unit_y());
    }

    #[test]
    fn test_normal_of_wall() {
        let system_under_test = Plane::new(
            Point::new(1.0, 1.0, 0.0),
            Point::new(-1.0, 1.0, 0.0),
            Point::new(-1.0, -1.0, 0.0),
            Point::new(1.0, -1.0, 0.0),
        );

        assert_abs_diff_eq!(system_under_test.normal(), Vector::unit_z());
    }

    #[test]
    fn test_texture_repeat() {
        let system_under_test = make_table().with_texture_repeat(4.0).mesh();

        assert_eq!(system_under_test.texture_coordinate(0), Some(TextureCoordinate::new(4.0, 4.0)));
        assert_eq!(system_under_test.texture_coordinate(2), Some(TextureCoordinate::new(0.0, 0.0)));
    }

    #[test]
    fn test_degenerate_corners() {
        let system_under_test = Plane::new(Point::origin(), Point::origin(), Point::origin(), Point::origin());

        assert_eq!(system_under_test.normal(), Vector::new(0.0, 0.0, 0.0));
        assert_eq!(system_under_test.mesh().validate(), Ok(()));
    }

    #[test]
    fn test_generation_is_idempotent() {
        assert_eq!(make_table().mesh(), make_table().mesh());
    }
}
