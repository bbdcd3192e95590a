//! Scene rendering - draws the hit-zone ring and the beans

use super::state::GPU_STATE;
use super::shapes::{create_circle_vertices, create_ring_vertices, Vertex, Viewport};
use crate::game::Frame;

/// Colors for different visualization elements
mod colors {
    /// Bean fill (#c49a6c)
    pub const BEAN: [f32; 4] = [0.769, 0.604, 0.424, 1.0];
    /// Hit-zone debug outline
    pub const HIT_ZONE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Cleared canvas (camera video shows through)
    pub const BACKGROUND: wgpu::Color = wgpu::Color::TRANSPARENT;
}

const RING_WIDTH: f32 = 2.0;
const RING_SEGMENTS: u32 = 64;
const BEAN_SEGMENTS: u32 = 24;

/// Build vertex data for one frame's draw list
fn build_frame_vertices(viewport: Viewport, frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    if let Some(ring) = frame.ring {
        vertices.extend(create_ring_vertices(
            viewport,
            ring.x as f32,
            ring.y as f32,
            ring.radius as f32,
            RING_WIDTH,
            colors::HIT_ZONE,
            RING_SEGMENTS,
        ));
    }

    for disc in &frame.discs {
        vertices.extend(create_circle_vertices(
            viewport,
            disc.x as f32,
            disc.y as f32,
            disc.radius as f32,
            colors::BEAN,
            BEAN_SEGMENTS,
        ));
    }

    vertices
}

/// Clear the canvas and draw one frame
pub fn draw_frame(frame: &Frame) {
    GPU_STATE.with(|state_cell| {
        let mut state_ref = state_cell.borrow_mut();
        let state = match state_ref.as_mut() {
            Some(s) => s,
            None => return,
        };

        let vertices = build_frame_vertices(state.viewport, frame);
        state.ensure_vertex_capacity(vertices.len());

        // Lost/outdated surface: skip this frame, the loop keeps going
        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") }
        );

        if !vertices.is_empty() {
            state.queue.write_buffer(
                &state.vertex_buffer,
                0,
                bytemuck::cast_slice(&vertices),
            );
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(colors::BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
