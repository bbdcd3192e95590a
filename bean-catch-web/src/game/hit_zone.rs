//! Torso hit zone - the circle beans must fall into

use super::pose::TorsoLandmarks;

/// Player hit zone in canvas pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitZone {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// False until the first pose arrives, then stays true
    pub detected: bool,
}

impl HitZone {
    /// Undetected zone parked at the canvas center
    pub fn new(width: f64, height: f64, radius: f64) -> Self {
        Self {
            x: width / 2.0,
            y: height / 2.0,
            radius,
            detected: false,
        }
    }

    /// Move the zone to the latest torso.
    ///
    /// `None` keeps the previous position and detection flag. Each pose fully
    /// overwrites the last one (no smoothing). Returns true on first detection.
    pub fn track(&mut self, torso: Option<&TorsoLandmarks>, width: f64, height: f64) -> bool {
        let Some(torso) = torso else {
            return false;
        };

        let first = !self.detected;
        self.x = torso.shoulder_mid_x() as f64 * width;
        self.y = torso.hip_mid_y() as f64 * height;
        self.detected = true;
        first
    }

    /// Euclidean distance from the zone center
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Strictly inside the circle (the rim does not count)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.distance_to(x, y) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pose::Landmark;

    fn torso(shoulder_x: (f32, f32), hip_y: (f32, f32)) -> TorsoLandmarks {
        TorsoLandmarks {
            left_shoulder: Landmark { x: shoulder_x.0, y: 0.2, z: 0.0 },
            right_shoulder: Landmark { x: shoulder_x.1, y: 0.9, z: 0.0 },
            left_hip: Landmark { x: 0.1, y: hip_y.0, z: 0.0 },
            right_hip: Landmark { x: 0.9, y: hip_y.1, z: 0.0 },
        }
    }

    #[test]
    fn test_starts_centered_and_undetected() {
        let zone = HitZone::new(800.0, 600.0, 120.0);
        assert_eq!((zone.x, zone.y), (400.0, 300.0));
        assert!(!zone.detected);
    }

    #[test]
    fn test_track_uses_shoulder_x_and_hip_y() {
        let mut zone = HitZone::new(1000.0, 800.0, 120.0);
        let first = zone.track(Some(&torso((0.25, 0.75), (0.5, 0.7))), 1000.0, 800.0);
        assert!(first);
        assert!(zone.detected);
        assert!((zone.x - 500.0).abs() < 1e-3);
        assert!((zone.y - 480.0).abs() < 1e-3);
        assert_eq!(zone.radius, 120.0);
    }

    #[test]
    fn test_missing_pose_keeps_previous_state() {
        let mut zone = HitZone::new(1000.0, 800.0, 120.0);
        zone.track(Some(&torso((0.1, 0.3), (0.5, 0.5))), 1000.0, 800.0);
        let before = zone;

        assert!(!zone.track(None, 1000.0, 800.0));
        assert_eq!(zone, before);
    }

    #[test]
    fn test_newer_pose_overwrites() {
        let mut zone = HitZone::new(1000.0, 800.0, 120.0);
        zone.track(Some(&torso((0.1, 0.3), (0.5, 0.5))), 1000.0, 800.0);
        let first = zone.track(Some(&torso((0.8, 0.8), (0.25, 0.25))), 1000.0, 800.0);
        assert!(!first);
        assert!((zone.x - 800.0).abs() < 1e-3);
        assert!((zone.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_rim_is_outside() {
        let zone = HitZone { x: 0.0, y: 0.0, radius: 120.0, detected: true };
        assert!(zone.contains(0.0, 119.9));
        assert!(!zone.contains(0.0, 120.0));
    }
}
