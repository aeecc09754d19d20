//! Simulation engine for BASTION.
//!
//! Owns the hecs ECS world, advances it one frame at a time through a fixed
//! system pipeline, and produces GameStateSnapshots for the presentation layer.

pub mod engine;
pub mod guidance;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use bastion_core as core;
pub use engine::SimulationEngine;
