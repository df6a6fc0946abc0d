pub(crate) const VERTICES_IN_TRIANGLE: usize = 3;

pub(crate) const COMPONENTS_IN_POSITION: usize = 3;
pub(crate) const COMPONENTS_IN_NORMAL: usize = 3;
pub(crate) const COMPONENTS_IN_COLOR: usize = 4;
pub(crate) const COMPONENTS_IN_TEXTURE_COORDINATE: usize = 2;

pub const DEFAULT_SEGMENTS_COUNT: u16 = 60;
