//! Full-screen screenshot capture and persistence.
//!
//! Invoked when the engine emits `TakeScreenshot`. Captures the primary
//! monitor and writes a PNG under a unique timestamp+random filename.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use rand::Rng;

use crate::error::{AirMouseError, AirMouseResult};

/// Build a unique screenshot filename: `screenshot_{timestamp}_{random}.png`.
fn screenshot_filename() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let random: u16 = rand::thread_rng().gen();
    format!("screenshot_{}_{}.png", timestamp, random)
}

/// Default save directory: `Pictures/AirMouse`, falling back to the
/// current directory when no pictures folder exists.
pub fn default_capture_dir() -> PathBuf {
    dirs::picture_dir()
        .map(|dir| dir.join("AirMouse"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Capture the primary monitor and save it as a PNG.
///
/// Returns the path of the written file.
pub fn capture_screenshot(dir: Option<&Path>) -> AirMouseResult<PathBuf> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(default_capture_dir);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let monitors = xcap::Monitor::all()
        .map_err(|e| AirMouseError::CaptureError(format!("Failed to get monitors: {}", e)))?;

    let monitor = monitors
        .iter()
        .find(|m| m.is_primary().unwrap_or(false))
        .or_else(|| monitors.first())
        .ok_or_else(|| AirMouseError::CaptureError("No monitors found".into()))?;

    let image = monitor
        .capture_image()
        .map_err(|e| AirMouseError::CaptureError(format!("Failed to capture screen: {}", e)))?;

    let path = dir.join(screenshot_filename());
    image.save(&path)?;

    log::info!("[CAPTURE] Screenshot saved to {}", path.display());
    Ok(path)
}
