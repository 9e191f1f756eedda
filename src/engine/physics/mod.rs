// Circle rigid-body physics: integration, contacts, walls and stepping

pub mod body;
mod boundary;
mod collision;
mod params;
mod world;

pub use body::{BodyBuilder, RigidBody, Shape};
pub use boundary::{apply_boundary, Wall, WallHits};
pub use collision::{detect_collision, resolve_collision, CollisionEvent, Contact};
pub use params::{Bounds, SimulationParams, DEFAULT_PARAMS};
pub use world::{step, step_with_forces, PhysicsWorld, StepReport};

/// Physics setup errors.
///
/// Stepping itself never fails; these come from building bodies, choosing
/// constants, or handing the step mismatched inputs.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PhysicsError {
    #[error("Invalid mass: {0} (must be finite and > 0)")]
    InvalidMass(f32),

    #[error("Invalid radius: {0} (must be finite and > 0)")]
    InvalidRadius(f32),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Expected one force per body: {bodies} bodies, {forces} forces")]
    ForceCountMismatch { bodies: usize, forces: usize },

    #[error("Body not found: {0}")]
    BodyNotFound(usize),
}
