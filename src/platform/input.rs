//! Keyboard state to tick input mapping
//!
//! Escape quits, Space starts the round, Left/Right move the paddle (Left
//! wins when both are held). Direction is sampled from held keys every tick.

use crate::sim::{PaddleDirection, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Left,
    Right,
}

impl Key {
    fn bit(self) -> u8 {
        match self {
            Key::Escape => 1 << 0,
            Key::Space => 1 << 1,
            Key::Left => 1 << 2,
            Key::Right => 1 << 3,
        }
    }
}

/// Currently held keys plus a pending close request
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    held: u8,
    close_requested: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    /// Window close button
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Focus loss: drop held keys so the paddle doesn't keep sliding
    pub fn release_all(&mut self) {
        self.held = 0;
    }

    pub fn direction(&self) -> PaddleDirection {
        if self.is_held(Key::Left) {
            PaddleDirection::Left
        } else if self.is_held(Key::Right) {
            PaddleDirection::Right
        } else {
            PaddleDirection::Still
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            quit: self.close_requested || self.is_held(Key::Escape),
            start: self.is_held(Key::Space),
            direction: self.direction(),
        }
    }
}
