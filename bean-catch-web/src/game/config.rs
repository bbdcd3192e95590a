//! Gameplay tuning
//!
//! All distances are canvas pixels, all times milliseconds.

use super::projectile::Trajectory;

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Radius of the torso hit zone.
    pub hit_radius: f64,

    /// Bean flight curve (age step, rise, fall, shrink).
    pub trajectory: Trajectory,

    /// Beans younger than this cannot be caught (still rising).
    pub catchable_age: f64,

    /// Global pause after a catch before the next one counts.
    pub cooldown_ms: f64,

    /// Distance from the bottom edge where beans are thrown from.
    pub spawn_margin: f64,

    /// Bean radius at scale 1.0.
    pub bean_radius: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hit_radius: 120.0,
            trajectory: Trajectory::default(),
            catchable_age: 0.7,
            cooldown_ms: 800.0,
            spawn_margin: 80.0,
            bean_radius: 25.0,
        }
    }
}
