//! Collision detection and response for axis-aligned boxes
//!
//! Everything here is a pure function of positions and velocities. The
//! caller owns the entities and decides what a hit means (e.g. destroying a
//! block).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{
    ARENA_WIDTH, BALL_SIZE, BLOCK_HEIGHT, BLOCK_WIDTH, MAX_BOUNCE_ANGLE, PADDLE_HEIGHT, THICKNESS,
};

/// Axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// Penetration depth on each axis (only meaningful when overlapping)
    pub fn penetration(&self, other: &Aabb) -> Vec2 {
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());
        Vec2::new(
            (a_max.x - b_min.x).min(b_max.x - a_min.x),
            (a_max.y - b_min.y).min(b_max.y - a_min.y),
        )
    }
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Ball velocity after resolution (unchanged on a miss)
    pub velocity: Vec2,
}

impl CollisionResult {
    pub fn miss(velocity: Vec2) -> Self {
        Self {
            hit: false,
            velocity,
        }
    }

    pub fn bounce(velocity: Vec2) -> Self {
        Self {
            hit: true,
            velocity,
        }
    }
}

/// Arena walls, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Left,
    Right,
}

impl Wall {
    /// Flip the velocity component facing this wall
    pub fn reflect(self, velocity: Vec2) -> Vec2 {
        match self {
            Wall::Top => Vec2::new(velocity.x, -velocity.y),
            Wall::Left | Wall::Right => Vec2::new(-velocity.x, velocity.y),
        }
    }
}

/// First wall the ball is pushing into, if any.
///
/// Only one wall can match per tick even when the ball is in a corner. The
/// bottom of the arena is open.
pub fn wall_collision(ball_pos: Vec2, ball_vel: Vec2) -> Option<Wall> {
    if ball_pos.y < THICKNESS && ball_vel.y < 0.0 {
        Some(Wall::Top)
    } else if ball_pos.x < THICKNESS && ball_vel.x < 0.0 {
        Some(Wall::Left)
    } else if ball_pos.x > ARENA_WIDTH - 2.0 * THICKNESS && ball_vel.x > 0.0 {
        Some(Wall::Right)
    } else {
        None
    }
}

pub fn resolve_wall_collision(ball_pos: Vec2, ball_vel: Vec2) -> CollisionResult {
    match wall_collision(ball_pos, ball_vel) {
        Some(wall) => CollisionResult::bounce(wall.reflect(ball_vel)),
        None => CollisionResult::miss(ball_vel),
    }
}

/// Outgoing paddle velocity for a strike offset.
///
/// `normalized_offset` is `(paddle_mid - ball_mid) / (paddle_width / 2)`,
/// clamped to [-1, 1]. The bounce angle is measured from straight up, so a
/// center strike leaves vertically and an edge strike leaves at
/// `MAX_BOUNCE_ANGLE` toward that edge. Speed is always `speed`.
pub fn bounce_velocity(normalized_offset: f32, speed: f32) -> Vec2 {
    let bounce_angle = normalized_offset.clamp(-1.0, 1.0) * MAX_BOUNCE_ANGLE;
    Vec2::new(-speed * bounce_angle.sin(), -speed * bounce_angle.cos())
}

/// Deflect a descending ball off the paddle.
///
/// `paddle_width` is the full paddle width. Incoming speed and direction are
/// discarded: only where the ball struck matters.
pub fn resolve_paddle_collision(
    ball_pos: Vec2,
    paddle_pos: Vec2,
    ball_vel: Vec2,
    paddle_width: f32,
    move_speed: f32,
) -> CollisionResult {
    if ball_vel.y < 0.0 {
        return CollisionResult::miss(ball_vel);
    }

    let ball = Aabb::new(ball_pos, Vec2::splat(BALL_SIZE));
    let paddle = Aabb::new(paddle_pos, Vec2::new(paddle_width, PADDLE_HEIGHT));
    if !ball.overlaps(&paddle) {
        return CollisionResult::miss(ball_vel);
    }

    let half_width = paddle_width / 2.0;
    let relative_intersect = paddle.center().x - ball.center().x;
    let normalized = relative_intersect / half_width;

    CollisionResult::bounce(bounce_velocity(normalized, move_speed))
}

/// Bounce the ball off a block.
///
/// The axis with the smaller penetration is the one the ball came through;
/// its velocity component flips. Magnitude is preserved.
pub fn block_collision(ball_pos: Vec2, ball_vel: Vec2, block_pos: Vec2) -> CollisionResult {
    let ball = Aabb::new(ball_pos, Vec2::splat(BALL_SIZE));
    let block = Aabb::new(block_pos, Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT));
    if !ball.overlaps(&block) {
        return CollisionResult::miss(ball_vel);
    }

    let depth = ball.penetration(&block);
    let velocity = if depth.x < depth.y {
        Vec2::new(-ball_vel.x, ball_vel.y)
    } else {
        Vec2::new(ball_vel.x, -ball_vel.y)
    };
    CollisionResult::bounce(velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_BOUNCE_SPEED, PADDLE_WIDTH};
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_top_wall_reflects_y_only() {
        let result = resolve_wall_collision(Vec2::new(100.0, 10.0), Vec2::new(-300.0, -300.0));
        assert!(result.hit);
        assert_eq!(result.velocity, Vec2::new(-300.0, 300.0));
    }

    #[test]
    fn test_wall_checks_are_exclusive() {
        // Top-left corner: both conditions hold, only the top wall applies
        let vel = Vec2::new(-300.0, -300.0);
        assert_eq!(wall_collision(Vec2::new(5.0, 5.0), vel), Some(Wall::Top));
        let result = resolve_wall_collision(Vec2::new(5.0, 5.0), vel);
        assert_eq!(result.velocity.x, -300.0);
        assert_eq!(result.velocity.y, 300.0);
    }

    #[test]
    fn test_side_walls() {
        let left = resolve_wall_collision(Vec2::new(10.0, 300.0), Vec2::new(-200.0, 50.0));
        assert_eq!(left.velocity, Vec2::new(200.0, 50.0));

        let right = resolve_wall_collision(Vec2::new(990.0, 300.0), Vec2::new(200.0, 50.0));
        assert_eq!(right.velocity, Vec2::new(-200.0, 50.0));
    }

    #[test]
    fn test_wall_ignores_ball_moving_away() {
        // Inside the left wall band but already heading right
        let result = resolve_wall_collision(Vec2::new(10.0, 300.0), Vec2::new(200.0, 50.0));
        assert!(!result.hit);
        assert_eq!(result.velocity, Vec2::new(200.0, 50.0));
    }

    #[test]
    fn test_bottom_is_open() {
        let result = resolve_wall_collision(Vec2::new(500.0, 900.0), Vec2::new(0.0, 300.0));
        assert!(!result.hit);
    }

    #[test]
    fn test_paddle_ignores_rising_ball() {
        let paddle = Vec2::new(475.0, 728.0);
        let vel = Vec2::new(100.0, -300.0);
        let result = resolve_paddle_collision(
            Vec2::new(500.0, 720.0),
            paddle,
            vel,
            PADDLE_WIDTH,
            BALL_BOUNCE_SPEED,
        );
        assert!(!result.hit);
        assert_eq!(result.velocity, vel);
    }

    #[test]
    fn test_paddle_miss() {
        let result = resolve_paddle_collision(
            Vec2::new(100.0, 720.0),
            Vec2::new(475.0, 728.0),
            Vec2::new(0.0, 300.0),
            PADDLE_WIDTH,
            BALL_BOUNCE_SPEED,
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_paddle_center_strike_goes_straight_up() {
        // Ball mid-x 525 == paddle mid-x 525
        let result = resolve_paddle_collision(
            Vec2::new(515.0, 715.0),
            Vec2::new(475.0, 728.0),
            Vec2::new(-300.0, 300.0),
            PADDLE_WIDTH,
            BALL_BOUNCE_SPEED,
        );
        assert!(result.hit);
        assert!(result.velocity.x.abs() < EPS);
        assert!((result.velocity.y + BALL_BOUNCE_SPEED).abs() < EPS);
    }

    #[test]
    fn test_paddle_edge_strike_leans_toward_edge() {
        let paddle = Vec2::new(475.0, 728.0);
        let down = Vec2::new(0.0, 300.0);

        // Right edge: ball mid-x 575 → offset -1 → max angle to the right
        let right = resolve_paddle_collision(
            Vec2::new(565.0, 715.0),
            paddle,
            down,
            PADDLE_WIDTH,
            BALL_BOUNCE_SPEED,
        );
        assert!(right.velocity.x > 0.0);
        assert!((right.velocity.x - BALL_BOUNCE_SPEED * MAX_BOUNCE_ANGLE.sin()).abs() < EPS);

        // Left edge
        let left = resolve_paddle_collision(
            Vec2::new(465.0, 715.0),
            paddle,
            down,
            PADDLE_WIDTH,
            BALL_BOUNCE_SPEED,
        );
        assert!(left.velocity.x < 0.0);
        assert!((left.velocity.x + right.velocity.x).abs() < EPS);
    }

    #[test]
    fn test_paddle_overhang_is_clamped_to_max_angle() {
        // Ball mid-x 583, hanging past the right edge (offset -1.16)
        let result = resolve_paddle_collision(
            Vec2::new(573.0, 715.0),
            Vec2::new(475.0, 728.0),
            Vec2::new(0.0, 300.0),
            PADDLE_WIDTH,
            BALL_BOUNCE_SPEED,
        );
        assert!(result.hit);
        let expected = bounce_velocity(-1.0, BALL_BOUNCE_SPEED);
        assert!((result.velocity - expected).length() < EPS);
    }

    #[test]
    fn test_block_hit_from_below_flips_y() {
        // Ball just entering the block's bottom edge
        let block = Vec2::new(30.0, 100.0);
        let result = block_collision(Vec2::new(50.0, 125.0), Vec2::new(200.0, -300.0), block);
        assert!(result.hit);
        assert_eq!(result.velocity, Vec2::new(200.0, 300.0));
    }

    #[test]
    fn test_block_hit_from_side_flips_x() {
        // Ball just entering the block's left edge, well inside vertically
        let block = Vec2::new(255.0, 100.0);
        let result = block_collision(Vec2::new(237.0, 105.0), Vec2::new(300.0, -300.0), block);
        assert!(result.hit);
        assert_eq!(result.velocity, Vec2::new(-300.0, -300.0));
    }

    #[test]
    fn test_block_touching_edge_is_not_a_hit() {
        let block = Vec2::new(30.0, 100.0);
        let vel = Vec2::new(0.0, -300.0);
        // Ball top exactly on block bottom
        let result = block_collision(Vec2::new(50.0, 130.0), vel, block);
        assert!(!result.hit);
        assert_eq!(result.velocity, vel);
    }

    proptest! {
        #[test]
        fn prop_bounce_speed_is_normalized(offset in -1.0f32..=1.0) {
            let vel = bounce_velocity(offset, BALL_BOUNCE_SPEED);
            prop_assert!((vel.length() - BALL_BOUNCE_SPEED).abs() < 0.01);
            prop_assert!(vel.y < 0.0);
        }

        #[test]
        fn prop_paddle_bounce_always_upward(
            ball_x in 380.0f32..600.0,
            ball_y in 700.0f32..760.0,
            vx in -500.0f32..500.0,
            vy in 0.0f32..500.0,
        ) {
            let paddle = Vec2::new(475.0, 728.0);
            let result = resolve_paddle_collision(
                Vec2::new(ball_x, ball_y),
                paddle,
                Vec2::new(vx, vy),
                PADDLE_WIDTH,
                BALL_BOUNCE_SPEED,
            );
            if result.hit {
                prop_assert!((result.velocity.length() - BALL_BOUNCE_SPEED).abs() < 0.01);
                prop_assert!(result.velocity.y <= 0.0);
            } else {
                prop_assert_eq!(result.velocity, Vec2::new(vx, vy));
            }
        }
    }
}
