//! Game module - bean physics, hit zone tracking, scoring
//!
//! Re-exports only. All logic in submodules.

mod config;
mod frame;
mod hit_zone;
mod inbox;
mod pose;
mod projectile;
mod projectiles;
mod scoring;
mod session;

pub use config::GameConfig;
pub use frame::{Disc, Frame, Ring};
pub use hit_zone::HitZone;
pub use inbox::{Drained, Inbox};
pub use pose::{
    Landmark, LandmarkError, TorsoLandmarks,
    // Constants
    LEFT_HIP, LEFT_SHOULDER, POSE_LANDMARK_COUNT, RIGHT_HIP, RIGHT_SHOULDER,
};
pub use projectile::{Projectile, Trajectory};
pub use projectiles::ProjectileSet;
pub use scoring::{hud_text, Scoreboard};
pub use session::{FrameReport, Session};
