use crate::geometry::alias::{Point, TextureCoordinate, Vector};
use crate::geometry::epsilon::DEFAULT_EPSILON_F32;
use cgmath::{AbsDiffEq, EuclideanSpace, Zero};
use palette::Srgba;

/// Every attribute a generator is able to produce for a single corner;
/// mesh storage keeps only the subset the mesh was declared with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    position: Point,
    normal: Vector,
    color: Srgba,
    texture_coordinate: TextureCoordinate,
}

pub(crate) const WHITE: Srgba = Srgba::new(1.0, 1.0, 1.0, 1.0);

impl Vertex {
    #[must_use]
    pub fn new(position: Point) -> Vertex {
        Vertex { position, normal: Vector::zero(), color: WHITE, texture_coordinate: TextureCoordinate::zero() }
    }

    #[must_use]
    pub fn with_normal(mut self, normal: Vector) -> Self {
        self.normal = normal;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Srgba) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_texture_coordinate(mut self, u: f32, v: f32) -> Self {
        self.texture_coordinate = TextureCoordinate::new(u, v);
        self
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    #[must_use]
    pub fn color(&self) -> Srgba {
        self.color
    }

    #[must_use]
    pub fn texture_coordinate(&self) -> TextureCoordinate {
        self.texture_coordinate
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex::new(Point::origin())
    }
}

impl AbsDiffEq for Vertex {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_EPSILON_F32
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let colors_close = (self.color.red - other.color.red).abs() <= epsilon
            && (self.color.green - other.color.green).abs() <= epsilon
            && (self.color.blue - other.color.blue).abs() <= epsilon
            && (self.color.alpha - other.color.alpha).abs() <= epsilon;

        Point::abs_diff_eq(&self.position, &other.position, epsilon)
            && Vector::abs_diff_eq(&self.normal, &other.normal, epsilon)
            && TextureCoordinate::abs_diff_eq(&self.texture_coordinate, &other.texture_coordinate, epsilon)
            && colors_close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_defaults() {
        let expected_position = Point::new(1.0, 2.0, 3.0);

        let system_under_test = Vertex::new(expected_position);

        assert_eq!(system_under_test.position(), expected_position);
        assert_eq!(system_under_test.normal(), Vector::zero());
        assert_eq!(system_under_test.color(), WHITE);
        assert_eq!(system_under_test.texture_coordinate(), TextureCoordinate::zero());
    }

    #[test]
    fn test_vertex_builders() {
        let expected_normal = Vector::new(0.0, 1.0, 0.0);
        let expected_color = Srgba::new(0.1, 0.2, 0.3, 0.8);

        let system_under_test = Vertex::new(Point::origin())
            .with_normal(expected_normal)
            .with_color(expected_color)
            .with_texture_coordinate(0.25, 0.75);

        assert_eq!(system_under_test.normal(), expected_normal);
        assert_eq!(system_under_test.color(), expected_color);
        assert_eq!(system_under_test.texture_coordinate(), TextureCoordinate::new(0.25, 0.75));
    }

    #[test]
    fn test_abs_diff_eq_with_tolerance() {
        let left = Vertex::new(Point::new(1.0, 2.0, 3.0)).with_normal(Vector::unit_y());
        let right = Vertex::new(Point::new(1.0 + Vertex::default_epsilon() / 2.0, 2.0, 3.0))
            .with_normal(Vector::new(0.0, 1.0 + Vertex::default_epsilon() / 2.0, 0.0));

        assert!(left.abs_diff_eq(&right, Vertex::default_epsilon()));
    }

    #[test]
    fn test_abs_diff_eq_outside_tolerance() {
        let left = Vertex::new(Point::new(1.0, 2.0, 3.0));
        let right = Vertex::new(Point::new(1.0, 2.0, 3.0)).with_texture_coordinate(Vertex::default_epsilon() * 4.0, 0.0);

        assert!(!left.abs_diff_eq(&right, Vertex::default_epsilon()));
    }

    #[test]
    fn test_abs_diff_eq_color_mismatch() {
        let left = Vertex::new(Point::origin());
        let right = Vertex::new(Point::origin()).with_color(Srgba::new(1.0, 1.0, 1.0, 0.5));

        assert!(!left.abs_diff_eq(&right, Vertex::default_epsilon()));
    }
}
