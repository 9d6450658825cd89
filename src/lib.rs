//! Block Breaker - a minimal Breakout/Pong arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, fixed tick)
//! - `game`: Loop controller tying pacing, input, update and drawing together
//! - `renderer`: Immediate-mode rectangle rendering (WebGPU)
//! - `platform`: Window, keyboard and clock glue (winit)
//! - `settings`: Window configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, WindowSettings};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Arena dimensions (pixels, origin top-left, y grows downward)
    pub const ARENA_WIDTH: f32 = 1024.0;
    pub const ARENA_HEIGHT: f32 = 768.0;
    /// Wall thickness; also the unit every other size derives from
    pub const THICKNESS: f32 = 20.0;

    /// Fixed tick interval
    pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
    /// Upper bound on a single tick's delta time (seconds)
    pub const MAX_DELTA_TIME: f32 = 0.05;

    /// Ball box is a square of one wall thickness
    pub const BALL_SIZE: f32 = THICKNESS;
    /// Initial ball velocity (pixels/s)
    pub const BALL_START_VELOCITY: (f32, f32) = (-300.0, -300.0);
    /// Ball speed after every paddle bounce
    pub const BALL_BOUNCE_SPEED: f32 = 500.0;
    /// Maximum paddle bounce angle from vertical (75°)
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 12.0;

    /// Paddle box: five thicknesses wide, one thick
    pub const PADDLE_WIDTH: f32 = THICKNESS * 5.0;
    pub const PADDLE_HEIGHT: f32 = THICKNESS;
    /// Paddle travel speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 600.0;
    /// Horizontal track the paddle's left edge is confined to
    pub const PADDLE_MIN_X: f32 = 1.1 * THICKNESS;
    pub const PADDLE_MAX_X: f32 = ARENA_WIDTH - 6.1 * THICKNESS;
    /// Paddle start position
    pub const PADDLE_START: (f32, f32) = (475.0, ARENA_HEIGHT - THICKNESS * 2.0);

    /// Block grid
    pub const BLOCK_ROWS: usize = 3;
    pub const BLOCK_COLUMNS: usize = 5;
    pub const BLOCK_COUNT: usize = BLOCK_ROWS * BLOCK_COLUMNS;
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    /// Left edge of the first column and the distance between columns
    pub const BLOCK_ORIGIN_X: f32 = 30.0;
    pub const BLOCK_SPACING_X: f32 = 225.0;
    /// Top edge of the first row and the distance between rows
    pub const BLOCK_ORIGIN_Y: f32 = 100.0;
    pub const BLOCK_SPACING_Y: f32 = 100.0;
}
