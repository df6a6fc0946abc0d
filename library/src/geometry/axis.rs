use crate::geometry::alias::Vector;
use cgmath::Zero;
use strum_macros::{EnumCount, EnumIter};

#[derive(EnumCount, EnumIter, Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    #[must_use]
    pub fn unit(self) -> Vector {
        let mut result = Vector::zero();
        result[self as usize] = 1.0;
        result
    }

    /// Two unit vectors spanning the plane orthogonal to the axis, ordered so
    /// that `first × second` equals the axis itself.
    #[must_use]
    pub(crate) fn tangent_basis(self) -> (Vector, Vector) {
        match self {
            Axis::X => (Vector::unit_y(), Vector::unit_z()),
            Axis::Y => (Vector::unit_x(), -Vector::unit_z()),
            Axis::Z => (Vector::unit_x(), Vector::unit_y()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{assert_abs_diff_eq, InnerSpace};
    use strum::IntoEnumIterator;

    #[test]
    fn test_unit() {
        assert_eq!(Axis::X.unit(), Vector::unit_x());
        assert_eq!(Axis::Y.unit(), Vector::unit_y());
        assert_eq!(Axis::Z.unit(), Vector::unit_z());
    }

    #[test]
    fn test_tangent_basis_is_right_handed() {
        for axis in Axis::iter() {
            let (first, second) = axis.tangent_basis();
            assert_abs_diff_eq!(first.dot(second), 0.0);
            assert_abs_diff_eq!(first.cross(second), axis.unit());
        }
    }
}
