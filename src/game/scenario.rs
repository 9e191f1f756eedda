// Named starting scenes for the simulator

use std::fmt;
use std::str::FromStr;

use log::info;

use crate::engine::physics::{BodyBuilder, PhysicsWorld, SimulationParams};

use super::ScenarioError;

/// Balls per row in the ball pit
const PIT_COLUMNS: usize = 6;

/// A reproducible initial state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scenario {
    /// Two unit balls launched at each other from (10, 10) and (30, 10)
    #[default]
    TwoBalls,
    /// `n` balls of mixed mass stacked in rows and thrown sideways
    BallPit(usize),
}

impl Scenario {
    /// Build a world for this scene with the given constants
    pub fn build(&self, params: SimulationParams) -> Result<PhysicsWorld, ScenarioError> {
        let mut world = PhysicsWorld::with_params(params)?;

        match *self {
            Scenario::TwoBalls => {
                world.add_body(
                    BodyBuilder::new()
                        .position(10.0, 10.0)
                        .velocity(1.0, 0.0)
                        .build()?,
                );
                world.add_body(
                    BodyBuilder::new()
                        .position(30.0, 10.0)
                        .velocity(-1.0, 0.0)
                        .build()?,
                );
            }
            Scenario::BallPit(count) => {
                let spacing = params.bounds.width / PIT_COLUMNS as f32;
                for i in 0..count {
                    let col = i % PIT_COLUMNS;
                    let row = i / PIT_COLUMNS;
                    let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
                    world.add_body(
                        BodyBuilder::new()
                            .position(spacing * (col as f32 + 0.5), 6.0 + 3.0 * row as f32)
                            .velocity(direction * (1.0 + (i % 3) as f32), 0.0)
                            .mass(1.0 + 0.5 * (i % 3) as f32)
                            .build()?,
                    );
                }
            }
        }

        info!("Loaded scenario {} with {} bodies", self, world.len());
        Ok(world)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::TwoBalls => write!(f, "two-balls"),
            Scenario::BallPit(count) => write!(f, "pit:{}", count),
        }
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    /// Parses `two-balls`, `pit` (12 balls) or `pit:<count>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-balls" => Ok(Scenario::TwoBalls),
            "pit" => Ok(Scenario::BallPit(12)),
            _ => s
                .strip_prefix("pit:")
                .and_then(|count| count.parse().ok())
                .map(Scenario::BallPit)
                .ok_or_else(|| ScenarioError::Unknown(s.to_string())),
        }
    }
}
