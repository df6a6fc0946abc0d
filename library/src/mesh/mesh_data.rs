use crate::geometry::alias::{Point, TextureCoordinate, Vector};
use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;
use crate::geometry::vertex::Vertex;
use crate::mesh::vertex_attributes::VertexAttributes;
use palette::Srgba;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MeshError {
    #[error("index {index} references a vertex beyond the vertex count {vertex_count}")]
    IndexOutOfRange { index: u16, vertex_count: usize },
    #[error("invalid mesh layout: {what:?}")]
    LayoutError { what: String },
}

/// Interleaved vertex floats with an optional 16-bit index list.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    attributes: VertexAttributes,
    vertices: Vec<f32>,
    indices: Option<Vec<u16>>,
}

impl MeshData {
    #[must_use]
    pub fn indexed(attributes: VertexAttributes) -> Self {
        Self::new(attributes, Some(Vec::new()))
    }

    #[must_use]
    pub fn unindexed(attributes: VertexAttributes) -> Self {
        Self::new(attributes, None)
    }

    #[must_use]
    fn new(attributes: VertexAttributes, indices: Option<Vec<u16>>) -> Self {
        assert!(attributes.contains(VertexAttributes::POSITION), "mesh without positions");
        MeshData { attributes: attributes | VertexAttributes::POSITION, vertices: Vec::new(), indices }
    }

    /// Appends the declared subset of the vertex attributes and returns the
    /// index the vertex can be referenced by.
    pub fn push_vertex(&mut self, vertex: &Vertex) -> u16 {
        let index = self.vertex_count();
        assert!(index <= u16::MAX as usize, "mesh vertex count exceeds 16-bit indexing");

        let position = vertex.position();
        self.vertices.extend_from_slice(&[position.x, position.y, position.z]);
        if self.attributes.contains(VertexAttributes::NORMAL) {
            let normal = vertex.normal();
            self.vertices.extend_from_slice(&[normal.x, normal.y, normal.z]);
        }
        if self.attributes.contains(VertexAttributes::COLOR) {
            let color = vertex.color();
            self.vertices.extend_from_slice(&[color.red, color.green, color.blue, color.alpha]);
        }
        if self.attributes.contains(VertexAttributes::TEXTURE_COORDINATE) {
            let uv = vertex.texture_coordinate();
            self.vertices.extend_from_slice(&[uv.x, uv.y]);
        }

        index as u16
    }

    pub fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        let Some(indices) = self.indices.as_mut() else {
            panic!("triangle indices pushed into an unindexed mesh");
        };
        indices.extend_from_slice(&[a, b, c]);
    }

    #[must_use]
    pub fn attributes(&self) -> VertexAttributes {
        self.attributes
    }

    #[must_use]
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    #[must_use]
    pub fn indices(&self) -> Option<&[u16]> {
        self.indices.as_deref()
    }

    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.attributes.stride()
    }

    /// Number of entries the draw call walks: indices when present, vertices otherwise.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.vertex_count(),
        }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.element_count() / VERTICES_IN_TRIANGLE
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Point {
        let data = self.attribute_slice(index, VertexAttributes::POSITION, 3);
        Point::new(data[0], data[1], data[2])
    }

    #[must_use]
    pub fn normal(&self, index: usize) -> Option<Vector> {
        self.attributes.offset(VertexAttributes::NORMAL)?;
        let data = self.attribute_slice(index, VertexAttributes::NORMAL, 3);
        Some(Vector::new(data[0], data[1], data[2]))
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Option<Srgba> {
        self.attributes.offset(VertexAttributes::COLOR)?;
        let data = self.attribute_slice(index, VertexAttributes::COLOR, 4);
        Some(Srgba::new(data[0], data[1], data[2], data[3]))
    }

    #[must_use]
    pub fn texture_coordinate(&self, index: usize) -> Option<TextureCoordinate> {
        self.attributes.offset(VertexAttributes::TEXTURE_COORDINATE)?;
        let data = self.attribute_slice(index, VertexAttributes::TEXTURE_COORDINATE, 2);
        Some(TextureCoordinate::new(data[0], data[1]))
    }

    /// Reassembles the stored vertex; absent attributes come back as `Vertex` defaults.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Vertex {
        let mut result = Vertex::new(self.position(index));
        if let Some(normal) = self.normal(index) {
            result = result.with_normal(normal);
        }
        if let Some(color) = self.color(index) {
            result = result.with_color(color);
        }
        if let Some(uv) = self.texture_coordinate(index) {
            result = result.with_texture_coordinate(uv.x, uv.y);
        }
        result
    }

    /// Vertex index triples of every triangle, regardless of indexing.
    #[must_use]
    pub fn triangles(&self) -> Vec<[usize; VERTICES_IN_TRIANGLE]> {
        match &self.indices {
            Some(indices) => indices
                .chunks_exact(VERTICES_IN_TRIANGLE)
                .map(|triangle| [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize])
                .collect(),
            None => (0..self.triangle_count())
                .map(|triangle| {
                    let first = triangle * VERTICES_IN_TRIANGLE;
                    [first, first + 1, first + 2]
                })
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        let stride = self.attributes.stride();
        if self.vertices.len() % stride != 0 {
            return Err(MeshError::LayoutError {
                what: format!("{} floats do not split into vertices of stride {stride}", self.vertices.len()),
            });
        }
        let vertex_count = self.vertex_count();
        if vertex_count > u16::MAX as usize + 1 {
            return Err(MeshError::LayoutError { what: format!("{vertex_count} vertices exceed 16-bit indexing") });
        }
        if self.element_count() % VERTICES_IN_TRIANGLE != 0 {
            return Err(MeshError::LayoutError {
                what: format!("{} elements do not form whole triangles", self.element_count()),
            });
        }
        if let Some(indices) = &self.indices {
            if let Some(&index) = indices.iter().find(|&&index| index as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange { index, vertex_count });
            }
        }
        Ok(())
    }

    /// Expands an indexed mesh into duplicated vertices without an index list.
    #[must_use]
    pub fn flattened(&self) -> MeshData {
        let Some(indices) = &self.indices else {
            return self.clone();
        };
        let stride = self.attributes.stride();
        let mut vertices = Vec::with_capacity(indices.len() * stride);
        for &index in indices {
            let start = index as usize * stride;
            vertices.extend_from_slice(&self.vertices[start..start + stride]);
        }
        MeshData { attributes: self.attributes, vertices, indices: None }
    }

    #[must_use]
    fn attribute_slice(&self, index: usize, attribute: VertexAttributes, length: usize) -> &[f32] {
        let offset = self.attributes.offset(attribute).unwrap_or(0);
        let start = index * self.attributes.stride() + offset;
        &self.vertices[start..start + length]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{assert_abs_diff_eq, EuclideanSpace};

    #[must_use]
    fn make_triangle(attributes: VertexAttributes) -> MeshData {
        let mut result = MeshData::indexed(attributes);
        let a = result.push_vertex(&Vertex::new(Point::new(0.0, 0.0, 0.0)).with_normal(Vector::unit_z()).with_texture_coordinate(0.0, 0.0));
        let b = result.push_vertex(&Vertex::new(Point::new(1.0, 0.0, 0.0)).with_normal(Vector::unit_z()).with_texture_coordinate(1.0, 0.0));
        let c = result.push_vertex(&Vertex::new(Point::new(0.0, 1.0, 0.0)).with_normal(Vector::unit_z()).with_texture_coordinate(0.0, 1.0));
        result.push_triangle(a, b, c);
        result
    }

    #[test]
    fn test_push_vertex_writes_only_declared_attributes() {
        let mut system_under_test = MeshData::unindexed(VertexAttributes::POSITION | VertexAttributes::TEXTURE_COORDINATE);

        let index = system_under_test.push_vertex(
            &Vertex::new(Point::new(1.0, 2.0, 3.0)).with_normal(Vector::unit_x()).with_color(Srgba::new(0.5, 0.5, 0.5, 1.0)).with_texture_coordinate(0.25, 0.75));

        assert_eq!(index, 0);
        assert_eq!(system_under_test.vertices(), &[1.0, 2.0, 3.0, 0.25, 0.75]);
        assert_eq!(system_under_test.normal(0), None);
        assert_eq!(system_under_test.color(0), None);
    }

    #[test]
    fn test_attribute_accessors() {
        let system_under_test = make_triangle(VertexAttributes::lit_textured());

        assert_eq!(system_under_test.vertex_count(), 3);
        assert_eq!(system_under_test.triangle_count(), 1);
        assert_eq!(system_under_test.position(1), Point::new(1.0, 0.0, 0.0));
        assert_eq!(system_under_test.normal(2), Some(Vector::unit_z()));
        assert_eq!(system_under_test.texture_coordinate(2), Some(TextureCoordinate::new(0.0, 1.0)));
    }

    #[test]
    fn test_vertex_reassembly_defaults_missing_attributes() {
        let system_under_test = make_triangle(VertexAttributes::POSITION);

        let actual = system_under_test.vertex(1);

        assert_abs_diff_eq!(actual, Vertex::new(Point::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_validate_accepts_well_formed_mesh() {
        let system_under_test = make_triangle(VertexAttributes::lit());
        assert_eq!(system_under_test.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range_index() {
        let mut system_under_test = make_triangle(VertexAttributes::lit());
        system_under_test.push_triangle(0, 2, 3);

        assert_eq!(system_under_test.validate(), Err(MeshError::IndexOutOfRange { index: 3, vertex_count: 3 }));
    }

    #[test]
    fn test_validate_rejects_partial_triangle() {
        let mut system_under_test = MeshData::unindexed(VertexAttributes::POSITION);
        system_under_test.push_vertex(&Vertex::new(Point::origin()));
        system_under_test.push_vertex(&Vertex::new(Point::new(1.0, 0.0, 0.0)));

        assert!(matches!(system_under_test.validate(), Err(MeshError::LayoutError { .. })));
    }

    #[test]
    fn test_triangles_of_unindexed_mesh() {
        let system_under_test = make_triangle(VertexAttributes::lit()).flattened();

        assert_eq!(system_under_test.triangles(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_flattened_duplicates_shared_vertices() {
        let mut source = make_triangle(VertexAttributes::lit());
        let d = source.push_vertex(&Vertex::new(Point::new(1.0, 1.0, 0.0)).with_normal(Vector::unit_z()));
        source.push_triangle(1, d, 2);

        let system_under_test = source.flattened();

        assert!(!system_under_test.is_indexed());
        assert_eq!(system_under_test.vertex_count(), 6);
        assert_eq!(system_under_test.position(3), source.position(1));
        assert_eq!(system_under_test.position(4), source.position(3));
        assert_eq!(system_under_test.position(5), source.position(2));
        assert_eq!(system_under_test.validate(), Ok(()));
    }

    #[test]
    #[should_panic(expected = "unindexed mesh")]
    fn test_push_triangle_into_unindexed_mesh() {
        let mut system_under_test = MeshData::unindexed(VertexAttributes::POSITION);
        system_under_test.push_triangle(0, 1, 2);
    }
}
