//! Reaction game ("flappy")
//!
//! A square falls under gravity, jumps on tap, and must fly through gaps in
//! obstacles scrolling in from the right. The simulation is deterministic:
//! fixed timestep, seeded RNG, obstacles kept in spawn order.

pub mod collision;
pub mod engine;
pub mod state;
pub mod tick;

pub use collision::{check_collision, hits_obstacle, is_out_of_bounds};
pub use engine::FlappyEngine;
pub use state::{FlappyState, GamePhase, Obstacle, Player};
pub use tick::{GameEvent, tick};
