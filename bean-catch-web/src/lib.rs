//! Bean Catch Web - catch thrown beans with your torso
//!
//! The game core (`game`) is plain Rust and builds everywhere.
//! Browser glue is wasm32 only:
//! - `bridge`: JS → Rust inputs (pose landmarks, taps)
//! - `renderer`: WebGPU drawing, score HUD, requestAnimationFrame loop

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod game;
#[cfg(any(target_arch = "wasm32", test))]
mod start_gate;

#[cfg(target_arch = "wasm32")]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod error;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web::*;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use crate::error::StartError;
    use crate::game::Session;
    use crate::start_gate::StartGate;
    use crate::{bridge, renderer};

    // Re-export wasm_bindgen functions for JS access
    pub use crate::bridge::{spawn_projectile, update_landmarks};

    thread_local! {
        static START_GATE: RefCell<StartGate> = RefCell::new(StartGate::default());
    }

    /// Called automatically when WASM module loads
    #[wasm_bindgen(start)]
    pub fn init_panic_hook() {
        console_error_panic_hook::set_once();
    }

    /// Size the canvas, initialize WebGPU, hook up input and start the loop.
    /// Only the first call starts the game; a failed start may be retried.
    #[wasm_bindgen]
    pub async fn start_game() -> Result<(), JsValue> {
        if !START_GATE.with(|g| g.borrow_mut().try_begin()) {
            return Err(StartError::AlreadyStarted.into());
        }
        let result = start().await;
        if result.is_err() {
            START_GATE.with(|g| g.borrow_mut().reopen());
        }
        result.map_err(JsValue::from)
    }

    async fn start() -> Result<(), StartError> {
        let window = web_sys::window().ok_or(StartError::NoWindow)?;
        let document = window.document().ok_or(StartError::NoDocument)?;

        let (width, height) = renderer::initialize_gpu(&window).await?;
        bridge::install_session(Session::new(width as f64, height as f64));
        renderer::attach_hud(&document);
        bridge::install_spawn_listeners(&window)?;
        renderer::start_animation_loop()?;

        console_log!("✅ Bean catch started ({}x{})", width, height);
        Ok(())
    }

    /// Beans caught so far this session
    #[wasm_bindgen]
    pub fn get_score() -> u32 {
        bridge::current_score()
    }

    /// Current HUD text (for hosts drawing their own overlay)
    #[wasm_bindgen]
    pub fn get_hud_text() -> String {
        bridge::current_hud_text()
    }
}
