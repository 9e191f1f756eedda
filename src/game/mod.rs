// Game layer: scenes built on top of the engine

mod scenario;

pub use scenario::Scenario;

use crate::engine::physics::PhysicsError;

/// Scenario loading errors
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Unknown scenario: {0} (expected two-balls, pit or pit:<count>)")]
    Unknown(String),

    #[error("Invalid scenario setup: {0}")]
    Physics(#[from] PhysicsError),
}
