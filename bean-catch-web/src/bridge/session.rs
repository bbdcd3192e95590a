//! Session + inbox storage shared by the JS entry points and the frame loop

use std::cell::RefCell;
use crate::game::{hud_text, Frame, FrameReport, Inbox, Session, TorsoLandmarks};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
    static INBOX: RefCell<Inbox> = RefCell::new(Inbox::new());
}

/// Install the session once the canvas size is known
pub fn install_session(session: Session) {
    SESSION.with(|cell| *cell.borrow_mut() = Some(session));
}

pub fn post_pose(torso: TorsoLandmarks) {
    INBOX.with(|cell| cell.borrow_mut().post_pose(torso));
}

pub fn post_spawn() {
    INBOX.with(|cell| cell.borrow_mut().post_spawn());
}

/// Advance the session one frame. None until `install_session` ran.
pub fn step_session(now_ms: f64) -> Option<FrameReport> {
    SESSION.with(|session_cell| {
        let mut session_ref = session_cell.borrow_mut();
        let session = session_ref.as_mut()?;
        INBOX.with(|inbox_cell| Some(session.step(now_ms, &mut inbox_cell.borrow_mut())))
    })
}

/// Read the last computed frame
pub fn with_frame<R>(f: impl FnOnce(&Frame) -> R) -> Option<R> {
    SESSION.with(|cell| cell.borrow().as_ref().map(|session| f(session.frame())))
}

/// Score line; "HIT : 0" before the session exists or any frame ran
pub fn current_hud_text() -> String {
    hud_text(current_score())
}

pub fn current_score() -> u32 {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|session| session.scoreboard().score())
            .unwrap_or(0)
    })
}
