//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Delta time is handed in, never read from a clock
//! - Stable iteration order (blocks by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    Aabb, CollisionResult, Wall, block_collision, bounce_velocity, resolve_paddle_collision,
    resolve_wall_collision, wall_collision,
};
pub use state::{Ball, Block, GamePhase, GameState, Paddle, PaddleDirection, block_grid};
pub use tick::{GameEvent, TickInput, tick};
