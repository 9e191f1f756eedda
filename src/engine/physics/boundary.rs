// Axis-aligned box constraint for bodies

use super::body::RigidBody;
use super::params::Bounds;
use crate::core::math::clamp;

/// Which side of the box a body was pushed back from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Floor,
    Ceiling,
    Left,
    Right,
}

/// Walls touched by one body in one pass: at most one per axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    /// Floor or ceiling
    pub vertical: Option<Wall>,
    /// Left or right wall
    pub horizontal: Option<Wall>,
}

impl WallHits {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }

    pub fn len(&self) -> usize {
        self.vertical.is_some() as usize + self.horizontal.is_some() as usize
    }

    pub fn contains(&self, wall: Wall) -> bool {
        self.vertical == Some(wall) || self.horizontal == Some(wall)
    }
}

/// Lowest and highest centre coordinate on an axis of length `extent`.
///
/// A circle wider than the box has no valid position; both limits then
/// collapse onto the middle of the axis.
fn axis_limits(radius: f32, extent: f32) -> (f32, f32) {
    let half = extent * 0.5;
    (clamp(radius, 0.0, half), clamp(extent - radius, half, extent))
}

/// Keep a body inside `bounds`.
///
/// A body whose circle crosses a wall is clamped back so it just touches
/// it, and its velocity component along that wall's normal is reversed and
/// scaled by `wall_restitution` if it was heading into the wall. A body
/// wider than the box is held at the box centre on that axis.
pub fn apply_boundary(body: &mut RigidBody, bounds: &Bounds, wall_restitution: f32) -> WallHits {
    let r = body.radius();
    let mut pos = body.position();
    let mut vel = body.velocity();
    let mut hits = WallHits::default();

    let (min_x, max_x) = axis_limits(r, bounds.width);
    let (min_y, max_y) = axis_limits(r, bounds.height);

    if pos.y <= min_y {
        pos.y = min_y;
        if vel.y < 0.0 {
            vel.y *= -wall_restitution;
        }
        hits.vertical = Some(Wall::Floor);
    } else if bounds.closed_top && pos.y >= max_y {
        pos.y = max_y;
        if vel.y > 0.0 {
            vel.y *= -wall_restitution;
        }
        hits.vertical = Some(Wall::Ceiling);
    }

    if pos.x <= min_x {
        pos.x = min_x;
        if vel.x < 0.0 {
            vel.x *= -wall_restitution;
        }
        hits.horizontal = Some(Wall::Left);
    } else if pos.x >= max_x {
        pos.x = max_x;
        if vel.x > 0.0 {
            vel.x *= -wall_restitution;
        }
        hits.horizontal = Some(Wall::Right);
    }

    if !hits.is_empty() {
        log::trace!("boundary hit {:?} at ({:.3}, {:.3})", hits, pos.x, pos.y);
        body.set_position(pos);
        body.set_velocity(vel);
    }

    hits
}
