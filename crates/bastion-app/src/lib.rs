//! BASTION host application.
//!
//! Runs the simulation engine on a game-loop thread fed by a command channel,
//! drives sessions headlessly with a scripted autopilot, and reports outcomes
//! to a `SessionObserver`.

pub mod autopilot;
pub mod game_loop;
pub mod session;
pub mod state;

pub use bastion_core as core;
