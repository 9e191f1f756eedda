//! Discrete-time 2D rigid-body simulation of circles.
//!
//! Bodies fall under gravity, bounce off the walls of an axis-aligned box
//! and collide with each other through impulses plus a soft positional
//! correction. [`engine::physics`] is the simulation core;
//! [`engine::renderer`] and [`engine::game_loop`] draw and pace it.

pub mod core;
pub mod engine;
pub mod game;

pub use crate::core::math::Vector2;
pub use engine::physics::{BodyBuilder, PhysicsError, PhysicsWorld, RigidBody, SimulationParams};
