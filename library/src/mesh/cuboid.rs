use crate::geometry::alias::{Point, Vector};
use crate::geometry::vertex::Vertex;
use crate::mesh::mesh_data::MeshData;
use crate::mesh::vertex_attributes::VertexAttributes;
use cgmath::{EuclideanSpace, InnerSpace};
use palette::Srgba;

const CORNERS_COUNT: usize = 8;
const FACES_COUNT: usize = 6;

const TOP_RIGHT: usize = 0;
const TOP_LEFT: usize = 1;
const BOTTOM_LEFT: usize = 2;
const BOTTOM_RIGHT: usize = 3;
const BACK: usize = 4;

// counter-clockwise when looking at the face from outside
const FACES: [[usize; 4]; FACES_COUNT] = [
    [TOP_RIGHT, TOP_LEFT, BOTTOM_LEFT, BOTTOM_RIGHT],
    [TOP_RIGHT + BACK, BOTTOM_RIGHT + BACK, BOTTOM_LEFT + BACK, TOP_LEFT + BACK],
    [TOP_RIGHT, TOP_RIGHT + BACK, TOP_LEFT + BACK, TOP_LEFT],
    [BOTTOM_RIGHT, BOTTOM_LEFT, BOTTOM_LEFT + BACK, BOTTOM_RIGHT + BACK],
    [TOP_RIGHT, BOTTOM_RIGHT, BOTTOM_RIGHT + BACK, TOP_RIGHT + BACK],
    [TOP_LEFT, TOP_LEFT + BACK, BOTTOM_LEFT + BACK, BOTTOM_LEFT],
];

const FACE_TEXTURE_COORDINATES: [(f32, f32); 4] = [(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)];

const CORNER_ALPHA: f32 = 0.8;
const CORNER_COLORS: [Srgba; 4] = [
    Srgba::new(1.0, 0.0, 0.0, CORNER_ALPHA),
    Srgba::new(1.0, 0.0, 1.0, CORNER_ALPHA),
    Srgba::new(0.0, 1.0, 0.0, CORNER_ALPHA),
    Srgba::new(0.0, 0.0, 1.0, CORNER_ALPHA),
];

/// Box spanned by a front quad pushed back along -Z by `depth`. The front quad is
/// not required to be axis aligned, so skewed boxes are expressible too.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cuboid {
    corners: [Point; CORNERS_COUNT],
}

impl Cuboid {
    #[must_use]
    pub fn new(top_right: Point, top_left: Point, bottom_left: Point, bottom_right: Point, depth: f32) -> Self {
        let front = [top_right, top_left, bottom_left, bottom_right];
        let shift = Vector::new(0.0, 0.0, depth);
        let mut corners = [Point::origin(); CORNERS_COUNT];
        for (index, corner) in front.iter().enumerate() {
            corners[index] = *corner;
            corners[index + BACK] = *corner - shift;
        }
        Cuboid { corners }
    }

    #[must_use]
    pub fn from_extent(top_left: Point, width: f32, height: f32, depth: f32) -> Self {
        Self::new(
            top_left + Vector::new(width, 0.0, 0.0),
            top_left,
            top_left - Vector::new(0.0, height, 0.0),
            top_left + Vector::new(width, -height, 0.0),
            depth,
        )
    }

    #[must_use]
    pub fn corners(&self) -> &[Point; CORNERS_COUNT] {
        &self.corners
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::centroid(&self.corners)
    }

    /// Eight shared corners with per-corner colors; unlit.
    #[must_use]
    pub fn mesh(&self) -> MeshData {
        let mut result = MeshData::indexed(VertexAttributes::colored());
        for (index, corner) in self.corners.iter().enumerate() {
            result.push_vertex(&Vertex::new(*corner).with_color(CORNER_COLORS[index % CORNER_COLORS.len()]));
        }
        for face in FACES {
            push_quad(&mut result, face.map(|corner| corner as u16));
        }
        result
    }

    /// Four vertices per face so every face carries its own normal and a full
    /// texture square.
    #[must_use]
    pub fn faceted_mesh(&self) -> MeshData {
        let mut result = MeshData::indexed(VertexAttributes::lit_textured());
        let center = self.center();
        for face in FACES {
            let quad = face.map(|corner| self.corners[corner]);
            let mut normal = (quad[1] - quad[0]).cross(quad[2] - quad[0]);
            let outward = Point::centroid(&quad) - center;
            let flipped = normal.dot(outward) < 0.0;
            if flipped {
                normal = -normal;
            }
            let normal = if normal.magnitude2() > 0.0 { normal.normalize() } else { normal };

            let mut indices = [0_u16; 4];
            for (slot, corner) in quad.iter().enumerate() {
                let (u, v) = FACE_TEXTURE_COORDINATES[slot];
                indices[slot] = result.push_vertex(&Vertex::new(*corner).with_normal(normal).with_texture_coordinate(u, v));
            }
            if flipped {
                indices.reverse();
            }
            push_quad(&mut result, indices);
        }
        result
    }
}

fn push_quad(target: &mut MeshData, quad: [u16; 4]) {
    target.push_triangle(quad[0], quad[1], quad[2]);
    target.push_triangle(quad[0], quad[2], quad[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::assert_abs_diff_eq;
    use rstest::rstest;

    #[must_use]
    fn make_basil() -> Cuboid {
        Cuboid::new(
            Point::new(2.0, 1.3, 0.7),
            Point::new(1.0, 1.3, 0.2),
            Point::new(1.0, -0.5, 0.2),
            Point::new(2.0, -0.5, 0.7),
            1.0,
        )
    }

    #[must_use]
    fn make_unit() -> Cuboid {
        Cuboid::from_extent(Point::new(-0.5, 0.5, 0.5), 1.0, 1.0, 1.0)
    }

    #[must_use]
    fn distinct_positions(mesh: &MeshData) -> Vec<Point> {
        let mut result: Vec<Point> = Vec::new();
        for index in 0..mesh.vertex_count() {
            let position = mesh.position(index);
            if !result.iter().any(|known| *known == position) {
                result.push(position);
            }
        }
        result
    }

    #[test]
    fn test_back_face_is_front_minus_depth() {
        let system_under_test = make_basil();

        for index in 0..BACK {
            assert_abs_diff_eq!(system_under_test.corners()[index + BACK], system_under_test.corners()[index] - Vector::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_from_extent() {
        let system_under_test = make_unit();

        assert_eq!(system_under_test.corners()[TOP_RIGHT], Point::new(0.5, 0.5, 0.5));
        assert_eq!(system_under_test.corners()[BOTTOM_LEFT], Point::new(-0.5, -0.5, 0.5));
        assert_eq!(system_under_test.corners()[BOTTOM_RIGHT + BACK], Point::new(0.5, -0.5, -0.5));
        assert_abs_diff_eq!(system_under_test.center(), Point::origin());
    }

    #[test]
    fn test_shared_mesh_counts() {
        let system_under_test = make_basil().mesh();

        assert_eq!(system_under_test.vertex_count(), 8);
        assert_eq!(system_under_test.element_count(), 36);
        assert_eq!(system_under_test.triangle_count(), 12);
        assert_eq!(system_under_test.color(0).map(|color| color.alpha), Some(CORNER_ALPHA));
        assert_eq!(system_under_test.validate(), Ok(()));
    }

    #[rstest]
    #[case(make_basil().mesh())]
    #[case(make_basil().faceted_mesh())]
    #[case(make_unit().faceted_mesh())]
    fn test_reduces_to_eight_distinct_positions(#[case] system_under_test: MeshData) {
        assert_eq!(distinct_positions(&system_under_test).len(), 8);
    }

    #[test]
    fn test_faceted_mesh_counts() {
        let system_under_test = make_basil().faceted_mesh();

        assert_eq!(system_under_test.vertex_count(), 24);
        assert_eq!(system_under_test.element_count(), 36);
        assert_eq!(system_under_test.validate(), Ok(()));
    }

    #[test]
    fn test_faces_are_planar_quads() {
        let system_under_test = make_basil();

        for face in FACES {
            let quad = face.map(|corner| system_under_test.corners()[corner]);
            let normal = (quad[1] - quad[0]).cross(quad[2] - quad[0]);
            assert_abs_diff_eq!(normal.dot(quad[3] - quad[0]), 0.0, epsilon = 1e-5);
        }
    }

    #[rstest]
    #[case(make_basil())]
    #[case(make_unit())]
    fn test_faceted_normals_point_outward(#[case] source: Cuboid) {
        let system_under_test = source.faceted_mesh();
        let center = source.center();

        for [a, b, c] in system_under_test.triangles() {
            let triangle = [system_under_test.position(a), system_under_test.position(b), system_under_test.position(c)];
            let normal = system_under_test.normal(a).unwrap_or(Vector::new(0.0, 0.0, 0.0));
            let winding = (triangle[1] - triangle[0]).cross(triangle[2] - triangle[0]);

            assert!(normal.dot(Point::centroid(&triangle) - center) > 0.0);
            assert!(winding.dot(normal) > 0.0);
            assert_abs_diff_eq!(normal.magnitude(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_unit_cube_normals_are_axes() {
        let system_under_test = make_unit().faceted_mesh();

        let front_normal = system_under_test.normal(0);
        let back_normal = system_under_test.normal(4);

        assert_eq!(front_normal, Some(Vector::unit_z()));
        assert_eq!(back_normal, Some(-Vector::unit_z()));
    }

    #[test]
    fn test_generation_is_idempotent() {
        assert_eq!(make_basil().faceted_mesh(), make_basil().faceted_mesh());
        assert_eq!(make_basil().mesh(), make_basil().mesh());
    }

    #[test]
    fn test_degenerate_input_is_not_rejected() {
        let system_under_test = Cuboid::from_extent(Point::origin(), 0.0, 0.0, 0.0).faceted_mesh();

        assert_eq!(system_under_test.vertex_count(), 24);
        assert_eq!(system_under_test.validate(), Ok(()));
    }
}
