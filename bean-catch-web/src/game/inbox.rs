//! Inputs waiting for the next frame
//!
//! Two producers (pose results, spawn taps) and one consumer (the frame
//! step). Poses are last-write-wins; spawns queue up.

use super::pose::TorsoLandmarks;

#[derive(Clone, Debug, Default)]
pub struct Inbox {
    latest_pose: Option<TorsoLandmarks>,
    pending_spawns: u32,
}

/// Everything taken out of the inbox for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Drained {
    pub pose: Option<TorsoLandmarks>,
    pub spawns: u32,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pose not yet consumed
    pub fn post_pose(&mut self, torso: TorsoLandmarks) {
        self.latest_pose = Some(torso);
    }

    pub fn post_spawn(&mut self) {
        self.pending_spawns = self.pending_spawns.saturating_add(1);
    }

    pub fn drain(&mut self) -> Drained {
        Drained {
            pose: self.latest_pose.take(),
            spawns: std::mem::take(&mut self.pending_spawns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pose::Landmark;

    fn pose_with_hip_y(y: f32) -> TorsoLandmarks {
        let hip = Landmark { x: 0.5, y, z: 0.0 };
        TorsoLandmarks { left_hip: hip, right_hip: hip, ..TorsoLandmarks::default() }
    }

    #[test]
    fn test_latest_pose_wins() {
        let mut inbox = Inbox::new();
        inbox.post_pose(pose_with_hip_y(0.2));
        inbox.post_pose(pose_with_hip_y(0.6));

        let drained = inbox.drain();
        assert_eq!(drained.pose.map(|p| p.hip_mid_y()), Some(0.6));
    }

    #[test]
    fn test_drain_empties() {
        let mut inbox = Inbox::new();
        inbox.post_spawn();
        inbox.post_spawn();
        inbox.post_pose(pose_with_hip_y(0.5));

        assert_eq!(inbox.drain().spawns, 2);
        assert_eq!(inbox.drain(), Drained::default());
    }
}
