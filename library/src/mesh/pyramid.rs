use crate::geometry::alias::{Point, Vector};
use crate::geometry::vertex::Vertex;
use crate::mesh::mesh_data::MeshData;
use crate::mesh::vertex_attributes::VertexAttributes;
use cgmath::InnerSpace;
use palette::Srgba;

const BASE_CORNERS_COUNT: usize = 4;
const APEX_INDEX: u16 = 0;

const BASE_TEXTURE_COORDINATES: [(f32, f32); BASE_CORNERS_COUNT] = [(1.0, 1.0), (1.0, 0.0), (0.0, 0.0), (0.0, 1.0)];
const BASE_TRIANGLES: [[usize; 3]; 2] = [[0, 2, 1], [0, 3, 2]];

const APEX_COLOR: Srgba = Srgba::new(1.0, 1.0, 1.0, 1.0);
const BASE_COLORS: [Srgba; BASE_CORNERS_COUNT] = [
    Srgba::new(1.0, 0.0, 0.0, 1.0),
    Srgba::new(0.0, 1.0, 0.0, 1.0),
    Srgba::new(0.0, 0.0, 1.0, 1.0),
    Srgba::new(1.0, 1.0, 0.0, 1.0),
];

/// Square-based pyramid standing on the XZ plane below its apex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pyramid {
    apex: Point,
    height: f32,
    half_width: f32,
}

impl Pyramid {
    #[must_use]
    pub fn new(apex: Point, height: f32, half_width: f32) -> Self {
        Pyramid { apex, height, half_width }
    }

    #[must_use]
    pub fn apex(&self) -> Point {
        self.apex
    }

    #[must_use]
    pub fn base(&self) -> [Point; BASE_CORNERS_COUNT] {
        let y = self.apex.y - self.height;
        let h = self.half_width;
        [
            Point::new(self.apex.x + h, y, self.apex.z + h),
            Point::new(self.apex.x + h, y, self.apex.z - h),
            Point::new(self.apex.x - h, y, self.apex.z - h),
            Point::new(self.apex.x - h, y, self.apex.z + h),
        ]
    }

    /// Apex plus four base corners, colored per corner; unlit.
    #[must_use]
    pub fn mesh(&self) -> MeshData {
        let mut result = MeshData::indexed(VertexAttributes::colored());
        result.push_vertex(&Vertex::new(self.apex).with_color(APEX_COLOR));
        for (corner, color) in self.base().iter().zip(BASE_COLORS) {
            result.push_vertex(&Vertex::new(*corner).with_color(color));
        }

        let first_base = APEX_INDEX + 1;
        for side in 0..BASE_CORNERS_COUNT as u16 {
            let next = (side + 1) % BASE_CORNERS_COUNT as u16;
            result.push_triangle(APEX_INDEX, first_base + side, first_base + next);
        }
        for [a, b, c] in BASE_TRIANGLES {
            result.push_triangle(first_base + a as u16, first_base + b as u16, first_base + c as u16);
        }
        result
    }

    /// Eighteen unshared vertices: each face keeps its own flat normal.
    #[must_use]
    pub fn faceted_mesh(&self) -> MeshData {
        let mut result = MeshData::unindexed(VertexAttributes::lit_textured());
        let base = self.base();

        for side in 0..BASE_CORNERS_COUNT {
            let left = base[side];
            let right = base[(side + 1) % BASE_CORNERS_COUNT];
            let normal = face_normal(self.apex, left, right);
            result.push_vertex(&Vertex::new(self.apex).with_normal(normal).with_texture_coordinate(0.5, 1.0));
            result.push_vertex(&Vertex::new(left).with_normal(normal).with_texture_coordinate(0.0, 0.0));
            result.push_vertex(&Vertex::new(right).with_normal(normal).with_texture_coordinate(1.0, 0.0));
        }

        for triangle in BASE_TRIANGLES {
            let normal = face_normal(base[triangle[0]], base[triangle[1]], base[triangle[2]]);
            for corner in triangle {
                let (u, v) = BASE_TEXTURE_COORDINATES[corner];
                result.push_vertex(&Vertex::new(base[corner]).with_normal(normal).with_texture_coordinate(u, v));
            }
        }
        result
    }
}

#[must_use]
fn face_normal(a: Point, b: Point, c: Point) -> Vector {
    let normal = (b - a).cross(c - a);
    if normal.magnitude2() > 0.0 { normal.normalize() } else { normal }
}
