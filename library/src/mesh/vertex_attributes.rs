use crate::geometry::fundamental_constants::{COMPONENTS_IN_COLOR, COMPONENTS_IN_NORMAL, COMPONENTS_IN_POSITION, COMPONENTS_IN_TEXTURE_COORDINATE};
use bitflags::bitflags;

bitflags! {
    /// Attributes interleaved per vertex, always in declaration order.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct VertexAttributes: u32 {
        const POSITION = 0b0001;
        const NORMAL = 0b0010;
        const COLOR = 0b0100;
        const TEXTURE_COORDINATE = 0b1000;
    }
}

impl VertexAttributes {
    #[must_use]
    pub fn lit() -> Self {
        VertexAttributes::POSITION | VertexAttributes::NORMAL
    }

    #[must_use]
    pub fn lit_textured() -> Self {
        VertexAttributes::POSITION | VertexAttributes::NORMAL | VertexAttributes::TEXTURE_COORDINATE
    }

    #[must_use]
    pub fn colored() -> Self {
        VertexAttributes::POSITION | VertexAttributes::COLOR
    }

    /// Floats occupied by one vertex.
    #[must_use]
    pub fn stride(self) -> usize {
        self.offset_of(VertexAttributes::TEXTURE_COORDINATE)
            + if self.contains(VertexAttributes::TEXTURE_COORDINATE) { COMPONENTS_IN_TEXTURE_COORDINATE } else { 0 }
    }

    /// Float offset of the given attribute inside a vertex, or `None` when absent.
    #[must_use]
    pub fn offset(self, attribute: VertexAttributes) -> Option<usize> {
        if self.contains(attribute) { Some(self.offset_of(attribute)) } else { None }
    }

    #[must_use]
    fn offset_of(self, attribute: VertexAttributes) -> usize {
        let mut offset = 0;
        for (flag, size) in Self::sizes() {
            if flag == attribute {
                break;
            }
            if self.contains(flag) {
                offset += size;
            }
        }
        offset
    }

    #[must_use]
    fn sizes() -> [(VertexAttributes, usize); 4] {
        [
            (VertexAttributes::POSITION, COMPONENTS_IN_POSITION),
            (VertexAttributes::NORMAL, COMPONENTS_IN_NORMAL),
            (VertexAttributes::COLOR, COMPONENTS_IN_COLOR),
            (VertexAttributes::TEXTURE_COORDINATE, COMPONENTS_IN_TEXTURE_COORDINATE),
        ]
    }
}
