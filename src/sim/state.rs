//! Game state and core simulation types
//!
//! Every entity is owned by `GameState`; blocks live in a fixed-size array
//! whose index is their identity for the whole session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, CollisionResult, block_collision};
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start key; ball and paddle are frozen but still drawn
    NotStarted,
    /// Physics active (there is no win or loss, the round runs until quit)
    Running,
    /// Quit requested; the loop exits at the next iteration boundary
    Terminated,
}

/// Horizontal input for the paddle, recomputed every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleDirection {
    Left,
    #[default]
    Still,
    Right,
}

impl PaddleDirection {
    /// -1, 0 or +1
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            PaddleDirection::Left => -1.0,
            PaddleDirection::Still => 0.0,
            PaddleDirection::Right => 1.0,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        let (paddle_x, paddle_y) = PADDLE_START;
        Self {
            pos: Vec2::new(paddle_x + BALL_SIZE * 2.0, paddle_y - 1.25 * BALL_SIZE),
            vel: Vec2::new(BALL_START_VELOCITY.0, BALL_START_VELOCITY.1),
        }
    }
}

impl Ball {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(BALL_SIZE))
    }

    /// Integrate position by `vel * dt`
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_START.0, PADDLE_START.1),
        }
    }
}

impl Paddle {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }

    /// Move along the track and clamp to `[PADDLE_MIN_X, PADDLE_MAX_X]`.
    ///
    /// A still paddle is left exactly where it is.
    pub fn slide(&mut self, direction: PaddleDirection, dt: f32) {
        if direction == PaddleDirection::Still {
            return;
        }
        self.pos.x += direction.sign() * PADDLE_SPEED * dt;
        self.pos.x = self.pos.x.clamp(PADDLE_MIN_X, PADDLE_MAX_X);
    }
}

/// A destructible block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Top-left corner
    pub pos: Vec2,
    pub destroyed: bool,
}

impl Block {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            destroyed: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT))
    }

    /// Test the ball against this block. Marking it destroyed is up to the
    /// caller.
    pub fn check_collision(&self, ball_pos: Vec2, ball_vel: Vec2) -> CollisionResult {
        block_collision(ball_pos, ball_vel, self.pos)
    }

    /// Flip to destroyed. Returns false if it already was.
    pub fn destroy(&mut self) -> bool {
        !std::mem::replace(&mut self.destroyed, true)
    }
}

/// Top-left corner of the block at `index` in the row-major grid
pub fn block_position(index: usize) -> Vec2 {
    let row = index / BLOCK_COLUMNS;
    let col = index % BLOCK_COLUMNS;
    Vec2::new(
        BLOCK_ORIGIN_X + col as f32 * BLOCK_SPACING_X,
        BLOCK_ORIGIN_Y + row as f32 * BLOCK_SPACING_Y,
    )
}

/// Build the fixed 3 x 5 grid
pub fn block_grid() -> [Block; BLOCK_COUNT] {
    std::array::from_fn(|i| Block::new(block_position(i)))
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Direction applied on the most recent tick
    pub paddle_direction: PaddleDirection,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: [Block; BLOCK_COUNT],
    /// Simulation ticks that ran physics
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::NotStarted,
            paddle_direction: PaddleDirection::Still,
            ball: Ball::default(),
            paddle: Paddle::default(),
            blocks: block_grid(),
            time_ticks: 0,
        }
    }

    /// Sticky once the start key has been pressed
    pub fn started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    /// False once quit has been requested
    pub fn is_running(&self) -> bool {
        self.phase != GamePhase::Terminated
    }

    pub fn live_blocks(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.blocks.iter().enumerate().filter(|(_, b)| !b.destroyed)
    }

    pub fn destroyed_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.destroyed).count()
    }

    /// JSON snapshot for diagnostics
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
