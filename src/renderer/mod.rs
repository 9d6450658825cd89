//! Immediate-mode rectangle rendering
//!
//! The game draws through the `Canvas` trait: set a color, clear, fill
//! rectangles, present. `pipeline::GpuCanvas` backs it with WebGPU;
//! `DrawList` records the calls instead.

pub mod pipeline;
pub mod scene;
pub mod shapes;

pub use pipeline::{GpuCanvas, RenderState};
pub use scene::draw_scene;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Rectangle in arena pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Drawing surface for one frame at a time
pub trait Canvas {
    type Error;

    fn set_draw_color(&mut self, color: Color);
    /// Fill the whole surface with the current draw color
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect);
    /// Show the frame
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// A recorded canvas call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    SetColor(Color),
    Clear,
    FillRect(Rect),
    Present,
}

/// Canvas that records calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles filled since the last clear
    pub fn filled_rects(&self) -> Vec<Rect> {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |i| i + 1);
        self.commands[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn frames_presented(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }
}

impl Canvas for DrawList {
    type Error = std::convert::Infallible;

    fn set_draw_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
