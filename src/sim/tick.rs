//! Fixed timestep simulation tick
//!
//! Advances the simulation by one step: apply input, integrate, then resolve
//! walls, paddle and blocks in that order.

use super::collision::{Wall, resolve_paddle_collision, wall_collision};
use super::state::{GamePhase, GameState, PaddleDirection};
use crate::consts::{BALL_BOUNCE_SPEED, PADDLE_WIDTH};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Quit (escape or window close)
    pub quit: bool,
    /// Start key held this tick
    pub start: bool,
    /// Paddle direction from the keys held this tick
    pub direction: PaddleDirection,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted,
    WallBounce(Wall),
    PaddleBounce,
    /// Index into `GameState::blocks`
    BlockDestroyed(usize),
    Quit,
}

/// Advance the game state by one timestep of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if !state.is_running() {
        return events;
    }

    state.paddle_direction = input.direction;

    if input.start && state.phase == GamePhase::NotStarted {
        state.phase = GamePhase::Running;
        events.push(GameEvent::RoundStarted);
    }

    // A quit still finishes this tick's physics; the loop stops afterwards
    let started = state.started();
    if input.quit {
        state.phase = GamePhase::Terminated;
        events.push(GameEvent::Quit);
    }

    if !started {
        return events;
    }

    state.time_ticks += 1;

    state.ball.advance(dt);
    state.paddle.slide(state.paddle_direction, dt);

    if let Some(wall) = wall_collision(state.ball.pos, state.ball.vel) {
        state.ball.vel = wall.reflect(state.ball.vel);
        events.push(GameEvent::WallBounce(wall));
    }

    let paddle = resolve_paddle_collision(
        state.ball.pos,
        state.paddle.pos,
        state.ball.vel,
        PADDLE_WIDTH,
        BALL_BOUNCE_SPEED,
    );
    if paddle.hit {
        state.ball.vel = paddle.velocity;
        events.push(GameEvent::PaddleBounce);
    }

    // Several blocks may go in one tick; each sees the velocity left by the
    // previous hit.
    for (index, block) in state.blocks.iter_mut().enumerate() {
        if block.destroyed {
            continue;
        }
        let result = block.check_collision(state.ball.pos, state.ball.vel);
        if result.hit {
            state.ball.vel = result.velocity;
            block.destroy();
            events.push(GameEvent::BlockDestroyed(index));
        }
    }

    events
}
