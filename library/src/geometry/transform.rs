use crate::geometry::alias::{Point, Vector};
use cgmath::{Matrix, Matrix4, SquareMatrix, Transform};

pub type Affine = Matrix4<f32>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transformation {
    forward: Affine,
    inverse: Affine,
}

impl Transformation {
    #[must_use]
    pub fn new(source: Affine) -> Self {
        Transformation {
            forward: source,
            inverse: source.invert().unwrap_or(Affine::identity()),
        }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::new(Affine::identity())
    }

    #[must_use]
    pub fn of_point(&self, target: &Point) -> Point {
        self.forward.transform_point(*target)
    }

    #[must_use]
    pub fn of_surface_vector(&self, target: &Vector) -> Vector {
        self.normal_matrix().transform_vector(*target)
    }

    #[must_use]
    pub fn model_matrix(&self) -> Affine {
        self.forward
    }

    #[must_use]
    pub fn normal_matrix(&self) -> Affine {
        self.inverse.transpose()
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}
