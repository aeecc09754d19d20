//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. Entity state lives in components, session state in
//! the engine.

pub mod blast;
pub mod detonation;
pub mod fire_control;
pub mod impact;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod terminal;
