use crate::geometry::alias::{Point, Vector};
use cgmath::{Deg, Rad};
use palette::Srgb;
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    position: Point,
    color: Srgb,
    intensity: f32,
}

impl PointLight {
    #[must_use]
    pub fn new(position: Point) -> Self {
        PointLight { position, color: Srgb::new(1.0, 1.0, 1.0), intensity: 1.0 }
    }

    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        assert!((0.0..=1.0).contains(&r));
        assert!((0.0..=1.0).contains(&g));
        assert!((0.0..=1.0).contains(&b));
        self.color = Srgb::new(r, g, b);
        self
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        assert!(intensity >= 0.0, "light intensity must be non-negative");
        self.intensity = intensity;
        self
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn color(&self) -> Srgb {
        self.color
    }

    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}

/// Horizontal circular path around `center`; the light keeps the center's height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orbit {
    center: Point,
    radius: f32,
    angular_speed: Deg<f32>,
    phase: Rad<f32>,
}

impl Orbit {
    #[must_use]
    pub fn new(center: Point, radius: f32, degrees_per_second: f32) -> Self {
        Orbit { center, radius, angular_speed: Deg(degrees_per_second), phase: Rad(0.0) }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        let (sin, cos) = self.phase.0.sin_cos();
        self.center + Vector::new(cos, 0.0, sin) * self.radius
    }

    pub fn advance(&mut self, elapsed: Duration) {
        let step: Rad<f32> = (self.angular_speed * elapsed.as_secs_f32()).into();
        self.phase = Rad((self.phase.0 + step.0).rem_euclid(std::f32::consts::TAU));
    }

    #[must_use]
    pub fn phase(&self) -> Rad<f32> {
        self.phase
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneLight {
    light: PointLight,
    orbit: Option<Orbit>,
}

impl SceneLight {
    #[must_use]
    pub fn fixed(light: PointLight) -> Self {
        SceneLight { light, orbit: None }
    }

    #[must_use]
    pub fn orbiting(light: PointLight, orbit: Orbit) -> Self {
        let mut result = SceneLight { light, orbit: Some(orbit) };
        result.light.position = orbit.position();
        result
    }

    pub(crate) fn advance(&mut self, elapsed: Duration) {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.advance(elapsed);
            self.light.position = orbit.position();
        }
    }

    #[must_use]
    pub fn light(&self) -> &PointLight {
        &self.light
    }

    #[must_use]
    pub fn orbit(&self) -> Option<&Orbit> {
        self.orbit.as_ref()
    }
}
