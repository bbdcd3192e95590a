//! GPU State management - WebGPU device, queue, surface initialization

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::error::StartError;
use super::shapes::{Vertex, Viewport};

/// Initial vertex capacity; grows on demand
const INITIAL_VERTEX_CAPACITY: usize = 4096;

/// Holds all WebGPU state for rendering
pub(crate) struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub render_pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_capacity: usize,
    pub viewport: Viewport,
}

impl GpuState {
    /// Reallocate the vertex buffer (next power of two) if `count` won't fit
    pub fn ensure_vertex_capacity(&mut self, count: usize) {
        if count <= self.vertex_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        self.vertex_buffer = create_vertex_buffer(&self.device, capacity);
        self.vertex_capacity = capacity;
    }
}

// Thread-local storage for GPU state (WASM is single-threaded)
thread_local! {
    pub(crate) static GPU_STATE: RefCell<Option<GpuState>> = RefCell::new(None);
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Vertex Buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Canvas size = window inner size at load (no resize handling)
fn viewport_size(window: &web_sys::Window) -> Result<(u32, u32), StartError> {
    let read = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|v| *v >= 1.0)
            .map(|v| v as u32)
            .ok_or(StartError::NoViewportSize)
    };
    Ok((read(window.inner_width())?, read(window.inner_height())?))
}

/// Initialize WebGPU: adapter, device, surface, pipeline.
/// Returns the canvas size in pixels.
pub async fn initialize_gpu(window: &web_sys::Window) -> Result<(u32, u32), StartError> {
    let document = window.document().ok_or(StartError::NoDocument)?;
    let canvas = document
        .get_element_by_id("game-canvas")
        .ok_or(StartError::NoCanvas)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| StartError::NoCanvas)?;

    let (width, height) = viewport_size(window)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
        .map_err(|e| StartError::SurfaceCreationFailed(format!("{:?}", e)))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(StartError::NoAdapter)?;

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Bean Catch Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        )
        .await
        .map_err(|e| StartError::DeviceCreationFailed(format!("{:?}", e)))?;

    // Configure surface. Colors are authored as CSS sRGB values, so prefer a
    // non-sRGB format that passes them through unchanged.
    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| surface_caps.formats.first())
        .copied()
        .ok_or_else(|| StartError::SurfaceCreationFailed("no surface formats".into()))?;
    // Transparent clear lets the camera video behind the canvas show through
    let alpha_mode = if surface_caps
        .alpha_modes
        .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
    {
        wgpu::CompositeAlphaMode::PreMultiplied
    } else {
        wgpu::CompositeAlphaMode::Auto
    };

    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width,
        height,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    // Create shader and pipeline
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Shape Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../shader.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Pipeline Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });

    let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Shape Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

    GPU_STATE.with(|state| {
        *state.borrow_mut() = Some(GpuState {
            device,
            queue,
            surface,
            render_pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            viewport: Viewport {
                width: width as f32,
                height: height as f32,
            },
        });
    });

    Ok((width, height))
}
