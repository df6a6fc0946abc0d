use crate::geometry::alias::{Point, Vector};
use crate::geometry::transform::Affine;
use cgmath::{Deg, EuclideanSpace, InnerSpace, Matrix4};
use derive_more::Display;
use log::info;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const MIN_ZOOM: f32 = 1.0;
const MAX_ZOOM: f32 = 45.0;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;
const ORTHOGRAPHIC_HALF_EXTENT: f32 = 2.0;

// cgmath produces OpenGL clip space (depth in [-1, 1]); wgpu expects [0, 1]
#[rustfmt::skip]
const OPENGL_TO_WGPU: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Copy, Clone, Default, Debug, Display, PartialEq, Eq)]
pub enum Projection {
    #[default]
    #[display("perspective")]
    Perspective,
    #[display("orthographic")]
    Orthographic,
}

/// First-person camera steered by yaw/pitch Euler angles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    position: Point,
    front: Vector,
    up: Vector,
    right: Vector,
    world_up: Vector,

    yaw: f32,
    pitch: f32,

    speed: f32,
    sensitivity: f32,
    zoom: f32,

    projection: Projection,
}

impl Camera {
    #[must_use]
    pub fn new(position: Point) -> Self {
        let mut result = Camera {
            position,
            front: Vector::new(0.0, 0.0, -1.0),
            up: Vector::unit_y(),
            right: Vector::unit_x(),
            world_up: Vector::unit_y(),
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            projection: Projection::default(),
        };
        result.update_vectors();
        result
    }

    #[must_use]
    pub fn with_speed(mut self, units_per_second: f32) -> Self {
        assert!(units_per_second >= 0.0, "camera speed must be non-negative");
        self.speed = units_per_second;
        self
    }

    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        assert!(sensitivity >= 0.0, "mouse sensitivity must be non-negative");
        self.sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, degrees: f32) -> Self {
        self.zoom = degrees.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }

    pub fn set_from(&mut self, position: Point, yaw: f32, pitch: f32) {
        self.position = position;
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    pub fn process_keyboard(&mut self, direction: Movement, seconds: f32) {
        let velocity = self.speed * seconds;
        match direction {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
            Movement::Up => self.position += self.world_up * velocity,
            Movement::Down => self.position -= self.world_up * velocity,
        }
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch = (self.pitch + y_offset * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn set_projection(&mut self, projection: Projection) {
        if self.projection != projection {
            info!("switched to {projection} projection");
        }
        self.projection = projection;
    }

    #[must_use]
    pub fn view_matrix(&self) -> Affine {
        Affine::look_at_rh(self.position, self.position + self.front, self.up)
    }

    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Affine {
        let opengl_projection = match self.projection {
            Projection::Perspective => cgmath::perspective(Deg(self.zoom), aspect, NEAR_PLANE, FAR_PLANE),
            Projection::Orthographic => cgmath::ortho(
                -ORTHOGRAPHIC_HALF_EXTENT,
                ORTHOGRAPHIC_HALF_EXTENT,
                -ORTHOGRAPHIC_HALF_EXTENT,
                ORTHOGRAPHIC_HALF_EXTENT,
                NEAR_PLANE,
                FAR_PLANE,
            ),
        };
        OPENGL_TO_WGPU * opengl_projection
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn front(&self) -> Vector {
        self.front
    }

    #[must_use]
    pub fn up(&self) -> Vector {
        self.up
    }

    #[must_use]
    pub fn right(&self) -> Vector {
        self.right
    }

    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vector::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Point::origin())
    }
}
