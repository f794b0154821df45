//! Pure, stateless pose classifiers over a single hand snapshot.
//!
//! Several classifiers share the same prefix conditions and are only kept
//! apart by the middle-finger and thumb-gap thresholds; the engine's
//! evaluation order is the tie-break between them.

use crate::config::GestureConfig;
use crate::hand::geometry::{angle_at, scaled_distance};
use crate::hand::{HandLandmark, HandSnapshot};

/// Per-finger extended/curled flags, thumb first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Derive finger states from landmark geometry.
    ///
    /// The thumb reads as extended when its tip sits outward of the IP
    /// joint on the x axis; the other fingers when the tip is above the
    /// PIP joint (image y grows downward).
    pub fn of(snapshot: &HandSnapshot) -> Self {
        let thumb = snapshot.point(HandLandmark::ThumbTip).x
            > snapshot.point(HandLandmark::ThumbIp).x;

        let [index, middle, ring, pinky] = HandLandmark::finger_tip_pip_pairs()
            .map(|(tip, pip)| snapshot.point(tip).y < snapshot.point(pip).y);

        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }

    /// True when the middle finger alone is extended.
    pub fn only_middle(&self) -> bool {
        self.middle && !self.thumb && !self.index && !self.ring && !self.pinky
    }
}

/// Derived quantities shared by the click-family classifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseMetrics {
    /// Angle at the index PIP joint (MCP-PIP-tip).
    pub index_curl: f64,
    /// Angle at the middle PIP joint (MCP-PIP-tip).
    pub middle_curl: f64,
    /// Scaled distance between thumb tip and index base.
    pub thumb_index_gap: f64,
}

impl PoseMetrics {
    pub fn of(snapshot: &HandSnapshot) -> Self {
        Self {
            index_curl: angle_at(
                snapshot.point(HandLandmark::IndexMcp),
                snapshot.point(HandLandmark::IndexPip),
                snapshot.point(HandLandmark::IndexTip),
            ),
            middle_curl: angle_at(
                snapshot.point(HandLandmark::MiddleMcp),
                snapshot.point(HandLandmark::MiddlePip),
                snapshot.point(HandLandmark::MiddleTip),
            ),
            thumb_index_gap: scaled_distance(
                snapshot.point(HandLandmark::ThumbTip),
                snapshot.point(HandLandmark::IndexMcp),
            ),
        }
    }
}

/// Scroll pose: index finger folded down while middle, ring, and pinky all
/// stay up. Checked directly on tip/PIP geometry; the thumb is ignored.
pub fn is_scroll_pose(snapshot: &HandSnapshot) -> bool {
    let index_down = snapshot.point(HandLandmark::IndexTip).y
        > snapshot.point(HandLandmark::IndexPip).y;
    let middle_up = snapshot.point(HandLandmark::MiddleTip).y
        < snapshot.point(HandLandmark::MiddlePip).y;
    let ring_up =
        snapshot.point(HandLandmark::RingTip).y < snapshot.point(HandLandmark::RingPip).y;
    let pinky_up =
        snapshot.point(HandLandmark::PinkyTip).y < snapshot.point(HandLandmark::PinkyPip).y;

    index_down && middle_up && ring_up && pinky_up
}

/// Drag pose: middle finger alone extended.
pub fn is_drag_pose(snapshot: &HandSnapshot) -> bool {
    FingerStates::of(snapshot).only_middle()
}

/// Left click: index curled, middle straight, thumb spread away.
pub fn is_left_click(metrics: &PoseMetrics, config: &GestureConfig) -> bool {
    metrics.index_curl < config.curl_angle_deg
        && metrics.middle_curl > config.straight_angle_deg
        && metrics.thumb_index_gap > config.pinch_gap
}

/// Right click: index straight, middle curled, thumb spread away.
pub fn is_right_click(metrics: &PoseMetrics, config: &GestureConfig) -> bool {
    metrics.index_curl > config.straight_angle_deg
        && metrics.middle_curl < config.curl_angle_deg
        && metrics.thumb_index_gap > config.pinch_gap
}

/// Double click: both fingers curled, thumb spread away.
pub fn is_double_click(metrics: &PoseMetrics, config: &GestureConfig) -> bool {
    metrics.index_curl < config.curl_angle_deg
        && metrics.middle_curl < config.curl_angle_deg
        && metrics.thumb_index_gap > config.pinch_gap
}

/// Screenshot pose: both fingers curled with the thumb pinched in.
pub fn is_screenshot_pose(metrics: &PoseMetrics, config: &GestureConfig) -> bool {
    metrics.index_curl < config.curl_angle_deg
        && metrics.middle_curl < config.curl_angle_deg
        && metrics.thumb_index_gap < config.pinch_gap
}

/// Pointer move: thumb pinched in while the index finger stays straight.
pub fn is_pointer_move(metrics: &PoseMetrics, config: &GestureConfig) -> bool {
    metrics.thumb_index_gap < config.pinch_gap
        && metrics.index_curl > config.straight_angle_deg
}
