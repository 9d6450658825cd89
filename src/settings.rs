//! Window settings
//!
//! The game takes no arguments and reads no files, so `load()` always yields
//! the defaults. The struct stays serializable so it can be logged.

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Window parameters handed to the platform layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    /// Initial top-left position on screen (logical pixels)
    pub position: (i32, i32),
    /// Inner size (logical pixels)
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Request vsync-paced presentation
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Block Breaker".to_string(),
            position: (100, 100),
            width: ARENA_WIDTH as u32,
            height: ARENA_HEIGHT as u32,
            resizable: false,
            vsync: true,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub window: WindowSettings,
}

impl Settings {
    pub fn load() -> Self {
        let settings = Self::default();
        log::debug!("Using default settings: {:?}", settings);
        settings
    }
}
