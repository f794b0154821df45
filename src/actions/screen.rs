//! Screen geometry and the normalized-to-pixel cursor mapping.

use crate::error::AirMouseResult;
use crate::hand::XY;

/// Pixel dimensions of the screen the cursor moves on, queried once at
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Detect the primary monitor's dimensions.
    pub fn detect() -> AirMouseResult<Self> {
        let monitors = xcap::Monitor::all()
            .map_err(|e| crate::error::AirMouseError::CaptureError(format!(
                "Failed to get monitors: {}",
                e
            )))?;

        let monitor = monitors
            .iter()
            .find(|m| m.is_primary().unwrap_or(false))
            .or_else(|| monitors.first())
            .ok_or_else(|| crate::error::AirMouseError::CaptureError("No monitors found".into()))?;

        Ok(Self {
            width: monitor.width().unwrap_or(1920),
            height: monitor.height().unwrap_or(1080),
        })
    }

    /// Map a normalized fingertip position to absolute screen pixels.
    ///
    /// The y coordinate is multiplied by `y_compression` before scaling:
    /// with the default 0.5 the top half of the camera frame spans the full
    /// screen height, halving vertical hand travel.
    pub fn map_normalized(&self, tip: XY<f64>, y_compression: f64) -> (i32, i32) {
        let x = tip.x * self.width as f64;
        let y = tip.y * y_compression * self.height as f64;
        (x as i32, y as i32)
    }
}
