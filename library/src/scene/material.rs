use palette::Srgb;

/// Phong reflection coefficients of a surface plus a tint multiplied into its color.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Material {
    tint: Srgb,
    ambient_strength: f32,
    diffuse_strength: f32,
    specular_strength: f32,
    shininess: f32,
}

impl Material {
    const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tint(mut self, r: f32, g: f32, b: f32) -> Self {
        assert!((0.0..=1.0).contains(&r));
        assert!((0.0..=1.0).contains(&g));
        assert!((0.0..=1.0).contains(&b));
        self.tint = Srgb::new(r, g, b);
        self
    }

    pub fn with_ambient_strength(mut self, strength: f32) -> Self {
        assert!(strength >= 0.0);
        self.ambient_strength = strength;
        self
    }

    pub fn with_diffuse_strength(mut self, strength: f32) -> Self {
        assert!(strength >= 0.0);
        self.diffuse_strength = strength;
        self
    }

    pub fn with_specular_strength(mut self, strength: f32) -> Self {
        assert!(strength >= 0.0);
        self.specular_strength = strength;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        assert!(shininess > 0.0, "phong exponent must be positive");
        self.shininess = shininess;
        self
    }

    #[must_use]
    pub fn tint(&self) -> Srgb {
        self.tint
    }

    #[must_use]
    pub fn ambient_strength(&self) -> f32 {
        self.ambient_strength
    }

    #[must_use]
    pub fn diffuse_strength(&self) -> f32 {
        self.diffuse_strength
    }

    #[must_use]
    pub fn specular_strength(&self) -> f32 {
        self.specular_strength
    }

    #[must_use]
    pub fn shininess(&self) -> f32 {
        self.shininess
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            tint: Self::WHITE,
            ambient_strength: 0.1,
            diffuse_strength: 1.0,
            specular_strength: 0.5,
            shininess: 32.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let system_under_test = Material::new()
            .with_tint(0.5, 0.25, 1.0)
            .with_ambient_strength(0.2)
            .with_diffuse_strength(0.8)
            .with_specular_strength(0.0)
            .with_shininess(8.0);

        assert_eq!(system_under_test.tint(), Srgb::new(0.5, 0.25, 1.0));
        assert_eq!(system_under_test.ambient_strength(), 0.2);
        assert_eq!(system_under_test.diffuse_strength(), 0.8);
        assert_eq!(system_under_test.specular_strength(), 0.0);
        assert_eq!(system_under_test.shininess(), 8.0);
    }

    #[test]
    #[should_panic]
    fn test_tint_out_of_range() {
        let _ = Material::new().with_tint(1.5, 0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "phong exponent")]
    fn test_zero_shininess() {
        let _ = Material::new().with_shininess(0.0);
    }
}
