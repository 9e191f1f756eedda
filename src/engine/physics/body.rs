use super::PhysicsError;
use crate::core::math::{vec2, Vector2};

/// Collision shape of a body.
///
/// Only circles are simulated. Detection and resolution dispatch on the
/// pair of shapes, so new variants slot in there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
}

impl Shape {
    /// Radius of the shape's bounding circle
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => radius,
        }
    }
}

/// A dynamic body with linear state only (no rotation)
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    position: Vector2,
    velocity: Vector2,
    shape: Shape,
    mass: f32,
    inv_mass: f32,
}

impl RigidBody {
    /// Create a circular body, rejecting non-positive radius or mass
    pub fn new(
        position: Vector2,
        velocity: Vector2,
        radius: f32,
        mass: f32,
    ) -> Result<Self, PhysicsError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }

        Ok(Self {
            position,
            velocity,
            shape: Shape::Circle { radius },
            mass,
            inv_mass: 1.0 / mass,
        })
    }

    /// Advance the body by `dt` under `force` (semi-implicit Euler).
    ///
    /// Velocity is updated first and the new velocity moves the position.
    pub fn integrate(&mut self, force: Vector2, dt: f32) {
        let accel = force * self.inv_mass;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn radius(&self) -> f32 {
        self.shape.bounding_radius()
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Cached `1 / mass`
    pub fn inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.mass
    }

    /// Kinetic energy `m * |v|^2 / 2`
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Teleport the body (scene setup, boundary clamping)
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }
}

/// Builder for creating bodies with common configurations
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    position: Vector2,
    velocity: Vector2,
    radius: f32,
    mass: f32,
}

impl BodyBuilder {
    /// Unit circle of unit mass at rest at the origin
    pub fn new() -> Self {
        Self {
            position: Vector2::ZERO,
            velocity: Vector2::ZERO,
            radius: 1.0,
            mass: 1.0,
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = vec2(x, y);
        self
    }

    /// Set the initial linear velocity
    pub fn velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = vec2(x, y);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Build the body, validating radius and mass
    pub fn build(self) -> Result<RigidBody, PhysicsError> {
        RigidBody::new(self.position, self.velocity, self.radius, self.mass)
    }
}

impl Default for BodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
