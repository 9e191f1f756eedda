use super::body::{RigidBody, Shape};
use crate::core::math::{normalize, Vector2};

/// One overlapping pair, computed fresh every step and never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from body A towards body B (zero for concentric circles)
    pub normal: Vector2,
    /// Overlap depth, always positive
    pub penetration: f32,
}

impl Contact {
    /// Concentric circles have no usable separation direction
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vector2::ZERO
    }
}

/// A contact that was resolved during a step, for game logic and diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Index of the first body (always lower than `body_b`)
    pub body_a: usize,
    pub body_b: usize,
    pub normal: Vector2,
    pub penetration: f32,
}

/// Narrow-phase test between two bodies
pub fn detect_collision(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    match (a.shape(), b.shape()) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(a.position(), ra, b.position(), rb)
        }
    }
}

fn circle_circle(pa: Vector2, ra: f32, pb: Vector2, rb: f32) -> Option<Contact> {
    let diff = pb - pa;
    let dist = diff.length();
    let radii = ra + rb;

    if dist < radii {
        Some(Contact {
            normal: normalize(diff),
            penetration: radii - dist,
        })
    } else {
        None
    }
}

/// Apply an impulse and a positional correction to an overlapping pair.
///
/// `restitution` scales the bounce (0.0 = inelastic, 1.0 = elastic) and
/// `correction_percent` is the share of `contact.penetration` removed.
/// Pairs already moving apart are left untouched. A degenerate (zero)
/// normal makes both the impulse and the correction zero.
pub fn resolve_collision(
    a: &mut RigidBody,
    b: &mut RigidBody,
    contact: &Contact,
    restitution: f32,
    correction_percent: f32,
) {
    let normal = contact.normal;

    // Relative velocity along the collision normal
    let rel_vel = (b.velocity() - a.velocity()).dot(normal);
    if rel_vel > 0.0 {
        return;
    }

    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_sum = inv_a + inv_b;

    let j = -(1.0 + restitution) * rel_vel / inv_sum;
    let impulse = normal * j;
    a.set_velocity(a.velocity() - impulse * inv_a);
    b.set_velocity(b.velocity() + impulse * inv_b);

    // Soft positional correction so bodies do not sink into each other
    let correction = normal * (contact.penetration * correction_percent / inv_sum);
    a.set_position(a.position() - correction * inv_a);
    b.set_position(b.position() + correction * inv_b);
}
