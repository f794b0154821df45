//! Geometric primitives over normalized landmark coordinates.
//!
//! Both functions are total: coincident points yield 0 rather than NaN, so a
//! degenerate detector frame can never poison the classifiers downstream.

use super::XY;

/// Scale factor applied to normalized distances so thresholds read in
/// pixel-like units instead of the raw 0-1 landmark range. Classifier
/// thresholds assume this constant.
pub const DISTANCE_SCALE: f64 = 100.0;

/// Angle in degrees at vertex `b` formed by the rays `b -> a` and `b -> c`,
/// normalized to the range [0, 180].
///
/// Returns 0.0 when either ray is degenerate (a == b or c == b).
pub fn angle_at(a: XY<f64>, b: XY<f64>, c: XY<f64>) -> f64 {
    if (a == b) || (c == b) {
        return 0.0;
    }

    let ray_a = (a.y - b.y).atan2(a.x - b.x);
    let ray_c = (c.y - b.y).atan2(c.x - b.x);

    let mut degrees = (ray_c - ray_a).to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees
}

/// Euclidean distance between two normalized points, scaled by
/// [`DISTANCE_SCALE`].
pub fn scaled_distance(p: XY<f64>, q: XY<f64>) -> f64 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    (dx * dx + dy * dy).sqrt() * DISTANCE_SCALE
}
