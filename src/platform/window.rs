//! Native window, keyboard and presentation via winit + wgpu
//!
//! winit owns the event loop, so the loop iteration is split: keyboard and
//! close events update `KeyboardState` as they arrive, `about_to_wait` runs
//! the tick once its deadline has passed and then sleeps the loop until the
//! next one, and `RedrawRequested` draws.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use super::PlatformError;
use super::input::{Key, KeyboardState};
use crate::game::Game;
use crate::renderer::RenderState;
use crate::settings::WindowSettings;

/// Creates window attributes from settings
pub fn window_attributes(settings: &WindowSettings) -> WindowAttributes {
    Window::default_attributes()
        .with_title(settings.title.clone())
        .with_inner_size(LogicalSize::new(settings.width, settings.height))
        .with_position(LogicalPosition::new(
            settings.position.0,
            settings.position.1,
        ))
        .with_resizable(settings.resizable)
}

fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Space => Some(Key::Space),
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        _ => None,
    }
}

pub struct App {
    settings: WindowSettings,
    /// Built once the window and GPU are up
    game: Option<Game>,
    keys: KeyboardState,
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    error: Option<PlatformError>,
}

impl App {
    pub fn new(settings: WindowSettings) -> Self {
        Self {
            settings,
            game: None,
            keys: KeyboardState::new(),
            window: None,
            render: None,
            error: None,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// The startup failure that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<PlatformError> {
        self.error.take()
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let window = Arc::new(event_loop.create_window(window_attributes(&self.settings))?);
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(
            &wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            },
        ))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            self.settings.vsync,
        ))?;

        self.render = Some(render);
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(render), Some(game)) = (&mut self.render, &self.game) else {
            return;
        };

        let result = {
            let mut canvas = render.canvas();
            game.draw(&mut canvas)
        };

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                render.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(()) => self.game = Some(Game::new(Instant::now())),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.keys.request_close();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key
                    && let Some(key) = key_from_code(code)
                {
                    match event.state {
                        ElementState::Pressed => self.keys.press(key),
                        ElementState::Released => self.keys.release(key),
                    }
                }
            }
            WindowEvent::Focused(false) => self.keys.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(game)) = (&self.window, &mut self.game) else {
            return;
        };

        let now = Instant::now();
        if game.is_due(now) {
            let input = self.keys.tick_input();
            game.update(now, &input);
            window.request_redraw();
        }

        if !game.is_running() {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(game.next_deadline()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(game) = &self.game {
            let state = game.state();
            log::info!(
                "Exiting: {} frames, {}/{} blocks destroyed",
                game.frames(),
                state.destroyed_count(),
                state.blocks.len()
            );
            match state.snapshot_json() {
                Ok(json) => log::debug!("Final state: {}", json),
                Err(e) => log::warn!("Could not serialize final state: {}", e),
            }
        }
        // Surface before window
        self.render = None;
        self.window = None;
    }
}

/// Open the window and run until quit
pub fn run(settings: WindowSettings) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
