//! Hand landmark model.
//!
//! The external detector delivers 21 anatomically fixed keypoints per frame
//! in normalized (0-1) image coordinates. This module names those roles and
//! wraps a complete frame in a fixed-size snapshot so classifiers index by
//! role instead of by raw list position.

pub mod geometry;

use serde::{Deserialize, Serialize};

/// 2D coordinate helper type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XY<T> {
    pub x: T,
    pub y: T,
}

impl<T> XY<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> XY<T> {
    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> XY<U> {
        XY {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

/// The 21 hand landmarks produced by the detector, in its fixed index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

impl HandLandmark {
    /// Convert landmark enum to array index (0-20).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// String representation for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumb-cmc",
            Self::ThumbMcp => "thumb-mcp",
            Self::ThumbIp => "thumb-ip",
            Self::ThumbTip => "thumb-tip",
            Self::IndexMcp => "index-mcp",
            Self::IndexPip => "index-pip",
            Self::IndexDip => "index-dip",
            Self::IndexTip => "index-tip",
            Self::MiddleMcp => "middle-mcp",
            Self::MiddlePip => "middle-pip",
            Self::MiddleDip => "middle-dip",
            Self::MiddleTip => "middle-tip",
            Self::RingMcp => "ring-mcp",
            Self::RingPip => "ring-pip",
            Self::RingDip => "ring-dip",
            Self::RingTip => "ring-tip",
            Self::PinkyMcp => "pinky-mcp",
            Self::PinkyPip => "pinky-pip",
            Self::PinkyDip => "pinky-dip",
            Self::PinkyTip => "pinky-tip",
        }
    }

    /// (tip, pip) pairs for the four non-thumb fingers, index finger first.
    pub fn finger_tip_pip_pairs() -> [(HandLandmark, HandLandmark); 4] {
        [
            (Self::IndexTip, Self::IndexPip),
            (Self::MiddleTip, Self::MiddlePip),
            (Self::RingTip, Self::RingPip),
            (Self::PinkyTip, Self::PinkyPip),
        ]
    }
}

/// One complete frame of hand landmarks in normalized coordinates.
///
/// Construction is fallible: a detector frame with fewer than 21 points
/// never becomes a snapshot, so downstream code can index by role without
/// bounds checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSnapshot {
    points: [XY<f64>; LANDMARK_COUNT],
}

impl HandSnapshot {
    /// Build a snapshot from the detector's point list.
    ///
    /// Returns `None` when fewer than 21 points were delivered (hand not
    /// detected, or partially occluded). Extra points are ignored.
    pub fn from_points(points: &[XY<f64>]) -> Option<Self> {
        if points.len() < LANDMARK_COUNT {
            return None;
        }
        let mut fixed = [XY::new(0.0, 0.0); LANDMARK_COUNT];
        fixed.copy_from_slice(&points[..LANDMARK_COUNT]);
        Some(Self { points: fixed })
    }

    /// Position of a landmark by role.
    pub fn point(&self, landmark: HandLandmark) -> XY<f64> {
        self.points[landmark.index()]
    }

    /// The index fingertip, used for cursor positioning and scroll deltas.
    pub fn index_tip(&self) -> XY<f64> {
        self.point(HandLandmark::IndexTip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_indices() {
        assert_eq!(HandLandmark::Wrist.index(), 0);
        assert_eq!(HandLandmark::ThumbIp.index(), 3);
        assert_eq!(HandLandmark::ThumbTip.index(), 4);
        assert_eq!(HandLandmark::IndexMcp.index(), 5);
        assert_eq!(HandLandmark::IndexPip.index(), 6);
        assert_eq!(HandLandmark::IndexTip.index(), 8);
        assert_eq!(HandLandmark::MiddleMcp.index(), 9);
        assert_eq!(HandLandmark::MiddlePip.index(), 10);
        assert_eq!(HandLandmark::MiddleTip.index(), 12);
        assert_eq!(HandLandmark::RingPip.index(), 14);
        assert_eq!(HandLandmark::RingTip.index(), 16);
        assert_eq!(HandLandmark::PinkyPip.index(), 18);
        assert_eq!(HandLandmark::PinkyTip.index(), 20);
    }

    #[test]
    fn test_snapshot_requires_all_landmarks() {
        let short = vec![XY::new(0.5, 0.5); LANDMARK_COUNT - 1];
        assert!(HandSnapshot::from_points(&short).is_none());

        let full = vec![XY::new(0.5, 0.5); LANDMARK_COUNT];
        assert!(HandSnapshot::from_points(&full).is_some());
    }

    #[test]
    fn test_snapshot_point_lookup() {
        let mut points = vec![XY::new(0.0, 0.0); LANDMARK_COUNT];
        points[HandLandmark::IndexTip.index()] = XY::new(0.25, 0.75);

        let snapshot = HandSnapshot::from_points(&points).unwrap();
        assert_eq!(snapshot.point(HandLandmark::IndexTip), XY::new(0.25, 0.75));
        assert_eq!(snapshot.index_tip(), XY::new(0.25, 0.75));
    }

    #[test]
    fn test_xy_map() {
        let xy = XY::new(0.5, 0.25);
        let scaled = xy.map(|v| v * 2.0);
        assert_eq!(scaled, XY::new(1.0, 0.5));
    }
}
