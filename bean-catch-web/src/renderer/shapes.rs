//! Shape primitives - vertices for discs and rings
//!
//! Shapes are built in canvas pixels and mapped to clip space per vertex,
//! so circles stay round on non-square canvases.

use std::f32::consts::TAU;

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Canvas size used for the pixel → clip mapping
#[derive(Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Pixel (origin top-left, y down) to clip space (-1 to 1, y up)
    fn vertex(&self, x: f32, y: f32, color: [f32; 4]) -> Vertex {
        Vertex {
            position: [x / self.width * 2.0 - 1.0, -(y / self.height * 2.0 - 1.0)],
            color,
        }
    }
}

fn on_circle(cx: f32, cy: f32, radius: f32, step: u32, segments: u32) -> (f32, f32) {
    let angle = (step as f32 / segments as f32) * TAU;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Generate vertices for a filled circle (triangle fan)
pub fn create_circle_vertices(
    viewport: Viewport,
    cx: f32,
    cy: f32,
    radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    if radius <= 0.0 {
        return vertices;
    }

    for i in 0..segments {
        let (x1, y1) = on_circle(cx, cy, radius, i, segments);
        let (x2, y2) = on_circle(cx, cy, radius, i + 1, segments);

        vertices.push(viewport.vertex(cx, cy, color));
        vertices.push(viewport.vertex(x1, y1, color));
        vertices.push(viewport.vertex(x2, y2, color));
    }

    vertices
}

/// Generate vertices for a circle outline `width` pixels thick
pub fn create_ring_vertices(
    viewport: Viewport,
    cx: f32,
    cy: f32,
    radius: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let inner = (radius - width / 2.0).max(0.0);
    let outer = radius + width / 2.0;

    for i in 0..segments {
        let (ix1, iy1) = on_circle(cx, cy, inner, i, segments);
        let (ix2, iy2) = on_circle(cx, cy, inner, i + 1, segments);
        let (ox1, oy1) = on_circle(cx, cy, outer, i, segments);
        let (ox2, oy2) = on_circle(cx, cy, outer, i + 1, segments);

        vertices.push(viewport.vertex(ix1, iy1, color));
        vertices.push(viewport.vertex(ox1, oy1, color));
        vertices.push(viewport.vertex(ox2, oy2, color));

        vertices.push(viewport.vertex(ix1, iy1, color));
        vertices.push(viewport.vertex(ox2, oy2, color));
        vertices.push(viewport.vertex(ix2, iy2, color));
    }

    vertices
}
