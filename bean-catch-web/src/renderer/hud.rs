//! Score HUD
//!
//! Text is an HTML element layered over the WebGPU canvas (`#score`),
//! styled by the host page. Only touched when the text changes.

use std::cell::RefCell;

#[derive(Default)]
struct Hud {
    element: Option<web_sys::Element>,
    shown: String,
}

thread_local! {
    static HUD: RefCell<Hud> = RefCell::new(Hud::default());
}

/// Bind the overlay element. Missing element = score only via `get_hud_text`.
pub fn attach_hud(document: &web_sys::Document) {
    let element = document.get_element_by_id("score");
    if element.is_none() {
        web_sys::console::warn_1(&"No #score element, HUD text not shown".into());
    }
    HUD.with(|h| h.borrow_mut().element = element);
}

/// Show `text` if it differs from what is on screen
pub fn update_hud(text: &str) {
    HUD.with(|h| {
        let mut hud = h.borrow_mut();
        if hud.shown == text {
            return;
        }
        if let Some(element) = &hud.element {
            element.set_text_content(Some(text));
        }
        hud.shown.clear();
        hud.shown.push_str(text);
    });
}
