//! Rectangle tessellation in arena pixels

use bytemuck::{Pod, Zeroable};

use super::Rect;

/// Colored corner of a filled rectangle. Positions are arena pixels until
/// `to_ndc` maps them for upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same vertex with its position moved into clip space
    pub fn to_ndc(self, arena_width: f32, arena_height: f32) -> Self {
        let (x, y) = pixel_to_ndc(self.position[0], self.position[1], arena_width, arena_height);
        Self::new(x, y, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Two triangles covering `rect`
pub fn rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.w, rect.y + rect.h);
    [
        Vertex::new(left, top, color),
        Vertex::new(left, bottom, color),
        Vertex::new(right, top, color),
        Vertex::new(right, top, color),
        Vertex::new(left, bottom, color),
        Vertex::new(right, bottom, color),
    ]
}

/// Map arena pixels (top-left origin, y down) to normalized device
/// coordinates (center origin, y up)
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (x / width * 2.0 - 1.0, 1.0 - y / height * 2.0)
}
