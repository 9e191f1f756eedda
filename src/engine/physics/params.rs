// Global constants shared by every body in a step

use super::PhysicsError;

/// Axis-aligned box the bodies live in.
///
/// The floor is `y = 0`, the walls `x = 0` and `x = width`. The ceiling at
/// `y = height` only constrains bodies when `closed_top` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub closed_top: bool,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            closed_top: false,
        }
    }

    /// Same box with a ceiling
    pub fn closed(mut self) -> Self {
        self.closed_top = true;
        self
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(40.0, 20.0)
    }
}

/// Simulation constants passed into every step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Gravity acceleration magnitude, pulling towards -y
    pub gravity: f32,
    /// Body-body restitution (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
    /// Restitution against the boundary walls
    pub wall_restitution: f32,
    /// Share of the overlap removed per step by positional correction
    pub correction_percent: f32,
    pub bounds: Bounds,
}

/// Defaults matching the two-ball demo
pub const DEFAULT_PARAMS: SimulationParams = SimulationParams {
    gravity: 9.8,
    restitution: 0.8,
    wall_restitution: 0.8,
    correction_percent: 0.8,
    bounds: Bounds {
        width: 40.0,
        height: 20.0,
        closed_top: false,
    },
};

impl Default for SimulationParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

impl SimulationParams {
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_wall_restitution(mut self, wall_restitution: f32) -> Self {
        self.wall_restitution = wall_restitution;
        self
    }

    pub fn with_correction_percent(mut self, correction_percent: f32) -> Self {
        self.correction_percent = correction_percent;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Check that every constant is in its meaningful range
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter {
                name: "gravity",
                value: self.gravity,
            });
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidParameter {
                name: "restitution",
                value: self.restitution,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_restitution) {
            return Err(PhysicsError::InvalidParameter {
                name: "wall_restitution",
                value: self.wall_restitution,
            });
        }
        if !(self.correction_percent > 0.0 && self.correction_percent <= 1.0) {
            return Err(PhysicsError::InvalidParameter {
                name: "correction_percent",
                value: self.correction_percent,
            });
        }
        if !(self.bounds.width.is_finite() && self.bounds.width > 0.0) {
            return Err(PhysicsError::InvalidParameter {
                name: "bounds.width",
                value: self.bounds.width,
            });
        }
        if !(self.bounds.height.is_finite() && self.bounds.height > 0.0) {
            return Err(PhysicsError::InvalidParameter {
                name: "bounds.height",
                value: self.bounds.height,
            });
        }
        Ok(())
    }
}
