//! Pose landmark entry point
//!
//! Receives MediaPipe Pose results from JavaScript and queues the torso
//! for the next frame.

use wasm_bindgen::prelude::*;
use crate::game::TorsoLandmarks;
use super::session;

/// Called from JavaScript with a flat Float32Array: 33 landmarks × (x, y, z)
/// or × (x, y, z, visibility). Pass an empty array when no pose was found.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    match TorsoLandmarks::from_flat(data) {
        Ok(Some(torso)) => session::post_pose(torso),
        Ok(None) => {}
        Err(err) => web_sys::console::warn_1(&err.to_string().into()),
    }
}
