//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] input entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod input;
mod landmarks;
mod session;

pub use landmarks::update_landmarks;

pub use input::{install_spawn_listeners, spawn_projectile};

pub use session::{
    current_hud_text,
    current_score,
    install_session,
    step_session,
    with_frame,
};
