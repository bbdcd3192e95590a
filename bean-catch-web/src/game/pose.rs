//! Pose landmarks as delivered by MediaPipe Pose
//!
//! JavaScript hands us one flat Float32Array per analyzed video frame.
//! Only the torso (shoulders and hips) matters for catching beans.

use std::fmt;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const POSE_LANDMARK_COUNT: usize = 33;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;

/// Floats per landmark without / with the visibility channel
const STRIDE_XYZ: usize = 3;
const STRIDE_XYZV: usize = 4;

/// A single landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth
}

/// The four landmarks the hit zone is derived from
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TorsoLandmarks {
    pub left_shoulder: Landmark,
    pub right_shoulder: Landmark,
    pub left_hip: Landmark,
    pub right_hip: Landmark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandmarkError {
    /// Array length is not a whole number of landmarks covering the hips
    BadLength { len: usize },
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::BadLength { len } => write!(
                f,
                "Invalid landmark data length: {} (expected {} or {})",
                len,
                POSE_LANDMARK_COUNT * STRIDE_XYZ,
                POSE_LANDMARK_COUNT * STRIDE_XYZV
            ),
        }
    }
}

impl std::error::Error for LandmarkError {}

impl TorsoLandmarks {
    /// Parse a flat landmark array (x, y, z[, visibility] per landmark).
    ///
    /// An empty array means MediaPipe found nobody and yields `Ok(None)`.
    pub fn from_flat(data: &[f32]) -> Result<Option<Self>, LandmarkError> {
        if data.is_empty() {
            return Ok(None);
        }

        let stride = stride_for(data.len()).ok_or(LandmarkError::BadLength { len: data.len() })?;
        let at = |index: usize| Landmark {
            x: data[index * stride],
            y: data[index * stride + 1],
            z: data[index * stride + 2],
        };

        Ok(Some(Self {
            left_shoulder: at(LEFT_SHOULDER),
            right_shoulder: at(RIGHT_SHOULDER),
            left_hip: at(LEFT_HIP),
            right_hip: at(RIGHT_HIP),
        }))
    }

    /// Horizontal torso center, normalized
    pub fn shoulder_mid_x(&self) -> f32 {
        (self.left_shoulder.x + self.right_shoulder.x) / 2.0
    }

    /// Vertical hip line, normalized
    pub fn hip_mid_y(&self) -> f32 {
        (self.left_hip.y + self.right_hip.y) / 2.0
    }
}

/// Pick the stride that makes `len` a whole landmark list reaching RIGHT_HIP
/// (132 floats only fits 33 landmarks with visibility).
fn stride_for(len: usize) -> Option<usize> {
    let min_landmarks = RIGHT_HIP + 1;
    [STRIDE_XYZ, STRIDE_XYZV].into_iter().find(|&stride| {
        len % stride == 0
            && len / stride >= min_landmarks
            && len / stride <= POSE_LANDMARK_COUNT
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_pose(stride: usize) -> Vec<f32> {
        let mut data = vec![0.0; POSE_LANDMARK_COUNT * stride];
        let mut set = |index: usize, x: f32, y: f32| {
            data[index * stride] = x;
            data[index * stride + 1] = y;
        };
        set(LEFT_SHOULDER, 0.4, 0.3);
        set(RIGHT_SHOULDER, 0.6, 0.32);
        set(LEFT_HIP, 0.42, 0.7);
        set(RIGHT_HIP, 0.58, 0.8);
        data
    }

    #[test]
    fn test_empty_means_no_pose() {
        assert_eq!(TorsoLandmarks::from_flat(&[]), Ok(None));
    }

    #[test]
    fn test_xyz_layout() {
        let torso = TorsoLandmarks::from_flat(&flat_pose(3)).unwrap().unwrap();
        assert!((torso.shoulder_mid_x() - 0.5).abs() < 1e-6);
        assert!((torso.hip_mid_y() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_visibility_layout() {
        let torso = TorsoLandmarks::from_flat(&flat_pose(4)).unwrap().unwrap();
        assert_eq!(torso.left_hip.x, 0.42);
        assert_eq!(torso.right_shoulder.y, 0.32);
    }

    #[test]
    fn test_bad_length_rejected() {
        assert_eq!(
            TorsoLandmarks::from_flat(&[0.5; 98]),
            Err(LandmarkError::BadLength { len: 98 })
        );
        // Whole landmarks, but stops before the hips
        assert_eq!(
            TorsoLandmarks::from_flat(&[0.5; 20 * 3]),
            Err(LandmarkError::BadLength { len: 60 })
        );
    }
}
