//! Platform abstraction layer
//!
//! Handles everything outside the simulation:
//! - Time/ticks (`time`)
//! - Input events (`input`)
//! - Window + GPU surface lifecycle (`window`)

pub mod input;
pub mod time;
pub mod window;

pub use input::{Key, KeyboardState};
pub use time::FixedStep;
pub use window::{App, run};

/// Startup failures. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("unable to initialize windowing: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}
