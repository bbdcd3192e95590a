//! Tap / click to throw a bean

use wasm_bindgen::prelude::*;
use crate::error::StartError;
use super::session;

/// Throw one bean from JavaScript (same as a tap)
#[wasm_bindgen]
pub fn spawn_projectile() {
    session::post_spawn();
}

/// Register window-level `touchstart` and `click` listeners.
///
/// touchstart is non-passive so it can cancel scrolling (which also
/// suppresses the emulated click, so one tap throws one bean).
pub fn install_spawn_listeners(window: &web_sys::Window) -> Result<(), StartError> {
    let on_touch = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        event.prevent_default();
        session::post_spawn();
    });
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(false);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            on_touch.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| StartError::ListenerFailed(format!("{:?}", e)))?;
    // Listeners live for the page lifetime
    on_touch.forget();

    let on_click = Closure::<dyn FnMut()>::new(session::post_spawn);
    window
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| StartError::ListenerFailed(format!("{:?}", e)))?;
    on_click.forget();

    Ok(())
}
