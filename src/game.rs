//! Game loop controller
//!
//! Owns the simulation state and the tick pacer. One loop iteration is:
//! wait for the tick boundary, sample input, update, draw. Event-loop
//! driven platforms call `update` and `draw` themselves once `is_due`
//! reports the boundary; `run_frame` does the whole iteration by blocking.

use std::time::Instant;

use crate::platform::time::FixedStep;
use crate::renderer::{Canvas, draw_scene};
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct Game {
    state: GameState,
    step: FixedStep,
    /// Loop iterations completed, started or not
    frames: u64,
}

impl Game {
    pub fn new(start: Instant) -> Self {
        Self {
            state: GameState::new(),
            step: FixedStep::new(start),
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.step.is_due(now)
    }

    pub fn next_deadline(&self) -> Instant {
        self.step.next_deadline()
    }

    /// Consume the tick at `now` and advance the simulation with `input`.
    ///
    /// Delta time is measured even before the round starts so the first
    /// running tick sees a fresh one.
    pub fn update(&mut self, now: Instant, input: &TickInput) -> Vec<GameEvent> {
        let dt = self.step.advance(now);
        self.apply(input, dt)
    }

    /// Draw the current state and present it
    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        draw_scene(&self.state, canvas)
    }

    /// Blocking loop iteration: sleep to the tick boundary, update, draw
    pub fn run_frame<C: Canvas>(
        &mut self,
        input: &TickInput,
        canvas: &mut C,
    ) -> Result<Vec<GameEvent>, C::Error> {
        let dt = self.step.wait();
        let events = self.apply(input, dt);
        self.draw(canvas)?;
        Ok(events)
    }

    fn apply(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        self.frames += 1;
        let events = tick(&mut self.state, input, dt);
        for event in &events {
            match event {
                GameEvent::RoundStarted => log::info!("Round started"),
                GameEvent::BlockDestroyed(index) => log::debug!(
                    "Block {} destroyed ({}/{})",
                    index,
                    self.state.destroyed_count(),
                    self.state.blocks.len()
                ),
                GameEvent::Quit => log::info!("Quit requested after {} frames", self.frames),
                GameEvent::WallBounce(wall) => log::trace!("Wall bounce: {:?}", wall),
                GameEvent::PaddleBounce => {
                    log::trace!("Paddle bounce: vel={:?}", self.state.ball.vel)
                }
            }
        }
        events
    }
}
