//! Frame loop driven by requestAnimationFrame
//!
//! Each tick: step the session, draw the frame, refresh the HUD, and
//! reschedule. Runs until the page goes away.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::bridge;
use crate::error::StartError;
use crate::game::FrameReport;
use super::hud::update_hud;
use super::scene::draw_frame;

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window found"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

fn log_report(report: &FrameReport) {
    if report.newly_detected {
        console_log!("🧍 Player detected");
    }
    if report.hits > 0 {
        console_log!("🫘 HIT : {}", report.score);
    }
}

/// One frame of the game
fn tick() {
    let now = js_sys::Date::now();
    let Some(report) = bridge::step_session(now) else {
        return;
    };
    log_report(&report);

    bridge::with_frame(|frame| {
        draw_frame(frame);
        update_hud(&frame.hud_text);
    });
}

/// Start the perpetual frame loop
pub fn start_animation_loop() -> Result<(), StartError> {
    // The closure reschedules itself, so it has to own a handle to itself
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = callback.clone();

    *handle.borrow_mut() = Some(Closure::new(move || {
        tick();
        if let Some(cb) = callback.borrow().as_ref() {
            if let Err(e) = request_animation_frame(cb) {
                web_sys::console::warn_1(&e);
            }
        }
    }));

    let first = handle.borrow();
    let cb = first.as_ref().ok_or(StartError::AnimationFrameFailed)?;
    request_animation_frame(cb).map_err(|_| StartError::AnimationFrameFailed)?;
    Ok(())
}
