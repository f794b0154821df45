//! Hand-pose builders shared by the gesture tests.
//!
//! All builders start from a neutral open hand and deform it into one
//! recognizable pose, returning the raw point list the detector would
//! deliver. Coordinates are chosen so each pose passes exactly one
//! classifier under the default thresholds.

use crate::hand::{HandLandmark, LANDMARK_COUNT, XY};

/// Neutral open hand: four fingers straight up, thumb tucked in close to
/// the index base. Under default thresholds this classifies as the
/// pointer-move pose (small thumb gap, straight index).
pub(crate) fn open_hand() -> Vec<XY<f64>> {
    let mut points = vec![XY::new(0.5, 0.5); LANDMARK_COUNT];
    points[HandLandmark::Wrist.index()] = XY::new(0.5, 0.9);

    points[HandLandmark::ThumbCmc.index()] = XY::new(0.42, 0.82);
    points[HandLandmark::ThumbMcp.index()] = XY::new(0.40, 0.75);
    points[HandLandmark::ThumbIp.index()] = XY::new(0.38, 0.70);
    points[HandLandmark::ThumbTip.index()] = XY::new(0.36, 0.66);

    // Four fingers: MCP at the knuckle line, tip highest (y grows downward).
    let fingers = [
        (HandLandmark::IndexMcp, 0.46),
        (HandLandmark::MiddleMcp, 0.50),
        (HandLandmark::RingMcp, 0.54),
        (HandLandmark::PinkyMcp, 0.58),
    ];
    for (mcp, x) in fingers {
        let base = mcp.index();
        points[base] = XY::new(x, 0.60);
        points[base + 1] = XY::new(x, 0.48); // pip
        points[base + 2] = XY::new(x, 0.40); // dip
        points[base + 3] = XY::new(x, 0.30); // tip
    }
    points
}

/// Fold one finger over so its tip lands next to the MCP joint: the curl
/// angle collapses to a few degrees and the tip drops below the PIP.
fn fold_finger(points: &mut [XY<f64>], mcp: HandLandmark) {
    let base = points[mcp.index()];
    points[mcp.index() + 3] = XY::new(base.x + 0.01, base.y - 0.02);
}

/// Move the thumb tip far out: thumb reads as extended and the
/// thumb-to-index gap clears the pinch threshold (~57 scaled units).
fn spread_thumb(points: &mut [XY<f64>]) {
    points[HandLandmark::ThumbTip.index()] = XY::new(0.95, 0.90);
}

/// Tuck the thumb tip against the index base (~5 scaled units of gap).
fn pinch_thumb(points: &mut [XY<f64>]) {
    points[HandLandmark::ThumbTip.index()] = XY::new(0.48, 0.65);
}

/// Pointer-move pose: the neutral open hand.
pub(crate) fn pointer_hand() -> Vec<XY<f64>> {
    open_hand()
}

/// A hand matching no classifier: fingers up, thumb spread low and away.
pub(crate) fn idle_hand() -> Vec<XY<f64>> {
    let mut points = open_hand();
    points[HandLandmark::ThumbTip.index()] = XY::new(0.02, 0.95);
    points
}

/// Drag pose: middle finger alone extended.
pub(crate) fn drag_hand() -> Vec<XY<f64>> {
    let mut points = open_hand();
    fold_finger(&mut points, HandLandmark::IndexMcp);
    fold_finger(&mut points, HandLandmark::RingMcp);
    fold_finger(&mut points, HandLandmark::PinkyMcp);
    points
}

/// Scroll pose with the index tip parked at the given position. `y` must
/// stay below the index PIP line (0.48) for the pose to hold.
pub(crate) fn scroll_hand(x: f64, y: f64) -> Vec<XY<f64>> {
    let mut points = open_hand();
    points[HandLandmark::IndexTip.index()] = XY::new(x, y);
    points
}

/// Left-click pose: index curled, middle straight, thumb spread.
pub(crate) fn left_click_hand() -> Vec<XY<f64>> {
    let mut points = open_hand();
    fold_finger(&mut points, HandLandmark::IndexMcp);
    fold_finger(&mut points, HandLandmark::RingMcp);
    fold_finger(&mut points, HandLandmark::PinkyMcp);
    spread_thumb(&mut points);
    points
}

/// Right-click pose: index straight, middle curled, thumb spread.
pub(crate) fn right_click_hand() -> Vec<XY<f64>> {
    let mut points = open_hand();
    fold_finger(&mut points, HandLandmark::MiddleMcp);
    spread_thumb(&mut points);
    points
}

/// Double-click pose: both fingers curled, thumb spread.
pub(crate) fn double_click_hand() -> Vec<XY<f64>> {
    let mut points = open_hand();
    fold_finger(&mut points, HandLandmark::IndexMcp);
    fold_finger(&mut points, HandLandmark::MiddleMcp);
    spread_thumb(&mut points);
    points
}

/// Screenshot pose: both fingers curled, thumb pinched in.
pub(crate) fn screenshot_hand() -> Vec<XY<f64>> {
    let mut points = open_hand();
    fold_finger(&mut points, HandLandmark::IndexMcp);
    fold_finger(&mut points, HandLandmark::MiddleMcp);
    pinch_thumb(&mut points);
    points
}

/// An incomplete detector frame (hand lost or occluded).
pub(crate) fn short_frame() -> Vec<XY<f64>> {
    vec![XY::new(0.5, 0.5); 10]
}
