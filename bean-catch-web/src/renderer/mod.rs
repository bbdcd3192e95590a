//! Renderer module - WebGPU drawing, score HUD, frame loop
//!
//! Re-exports only. All logic in submodules.

mod animation;
mod hud;
mod scene;
mod shapes;
mod state;

pub use animation::start_animation_loop;
pub use hud::attach_hud;
pub use state::initialize_gpu;
