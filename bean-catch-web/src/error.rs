//! Startup errors surfaced to JavaScript as the rejection of `start_game()`

use std::fmt;
use wasm_bindgen::prelude::*;

#[derive(Debug)]
pub enum StartError {
    NoWindow,
    NoDocument,
    NoCanvas,
    NoViewportSize,
    SurfaceCreationFailed(String),
    NoAdapter,
    DeviceCreationFailed(String),
    ListenerFailed(String),
    AnimationFrameFailed,
    AlreadyStarted,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::NoWindow => write!(f, "No window found"),
            StartError::NoDocument => write!(f, "No document found"),
            StartError::NoCanvas => write!(f, "No canvas with id 'game-canvas' found"),
            StartError::NoViewportSize => write!(f, "Could not read window inner size"),
            StartError::SurfaceCreationFailed(e) => write!(f, "Surface creation failed: {}", e),
            StartError::NoAdapter => write!(f, "Failed to find a suitable GPU adapter"),
            StartError::DeviceCreationFailed(e) => write!(f, "Device creation failed: {}", e),
            StartError::ListenerFailed(e) => write!(f, "Could not register input listener: {}", e),
            StartError::AnimationFrameFailed => write!(f, "requestAnimationFrame failed"),
            StartError::AlreadyStarted => write!(f, "Game already started"),
        }
    }
}

impl std::error::Error for StartError {}

impl From<StartError> for JsValue {
    fn from(err: StartError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
