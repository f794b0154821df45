//! Gesture classifier and state machine settings.
//!
//! Consolidates every tunable the pose classifiers and the gesture engine
//! read, in one typed struct with clamping validation and JSON persistence.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AirMouseResult, OptionExt};

/// Centralized gesture configuration.
///
/// Angles are in degrees at the finger PIP joint: a small angle means the
/// finger is folded over, a large one means it is straight. Distances are in
/// the scaled units of [`crate::hand::geometry::scaled_distance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureConfig {
    /// A finger with a joint angle below this is considered curled.
    pub curl_angle_deg: f64,

    /// A finger with a joint angle above this is considered straightened.
    pub straight_angle_deg: f64,

    /// Thumb-to-index-base distance separating "pinched" from "spread".
    pub pinch_gap: f64,

    /// Multiplier from normalized scroll deltas to scroll units.
    pub scroll_gain: f64,

    /// How long an overlay message stays visible, in seconds.
    pub message_ttl_secs: f64,

    /// Vertical compression applied in cursor mapping. The fingertip's
    /// normalized y is multiplied by this before scaling to screen height,
    /// so the top half of the camera frame covers the whole screen.
    pub cursor_y_compression: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            curl_angle_deg: 50.0,
            straight_angle_deg: 90.0,
            pinch_gap: 50.0,
            scroll_gain: 200.0,
            message_ttl_secs: 5.0,
            cursor_y_compression: 0.5,
        }
    }
}

impl GestureConfig {
    /// Validate and clamp settings to acceptable ranges.
    pub fn validate(&mut self) {
        self.curl_angle_deg = self.curl_angle_deg.clamp(1.0, 180.0);
        self.straight_angle_deg = self.straight_angle_deg.clamp(1.0, 180.0);
        self.pinch_gap = self.pinch_gap.max(0.0);
        self.scroll_gain = self.scroll_gain.max(0.0);
        self.message_ttl_secs = self.message_ttl_secs.clamp(0.0, 60.0);
        self.cursor_y_compression = self.cursor_y_compression.clamp(0.0, 1.0);
    }

    /// Reset all settings to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Message lifetime as a [`Duration`].
    pub fn message_ttl(&self) -> Duration {
        Duration::from_secs_f64(self.message_ttl_secs)
    }

    /// Load configuration from a JSON file, validating on the way in.
    pub fn load(path: &Path) -> AirMouseResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.validate();
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> AirMouseResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist yet.
    pub fn load_or_default() -> Self {
        match default_config_path() {
            Ok(path) if path.exists() => match Self::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("[CONFIG] Failed to load {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

/// Default config file location (`<config dir>/airmouse/config.json`).
pub fn default_config_path() -> AirMouseResult<PathBuf> {
    let dir = dirs::config_dir().context("no config directory on this platform")?;
    Ok(dir.join("airmouse").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GestureConfig::default();
        assert_eq!(config.curl_angle_deg, 50.0);
        assert_eq!(config.straight_angle_deg, 90.0);
        assert_eq!(config.pinch_gap, 50.0);
        assert_eq!(config.scroll_gain, 200.0);
        assert_eq!(config.message_ttl_secs, 5.0);
        assert_eq!(config.cursor_y_compression, 0.5);
    }

    #[test]
    fn test_config_validation() {
        let mut config = GestureConfig {
            curl_angle_deg: 500.0,       // over max
            straight_angle_deg: 0.0,     // under min
            pinch_gap: -3.0,             // negative
            message_ttl_secs: 1000.0,    // over max
            cursor_y_compression: 2.0,   // over max
            ..Default::default()
        };
        config.validate();

        assert_eq!(config.curl_angle_deg, 180.0);
        assert_eq!(config.straight_angle_deg, 1.0);
        assert_eq!(config.pinch_gap, 0.0);
        assert_eq!(config.message_ttl_secs, 60.0);
        assert_eq!(config.cursor_y_compression, 1.0);
    }

    #[test]
    fn test_message_ttl_duration() {
        let config = GestureConfig::default();
        assert_eq!(config.message_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_json_round_trip() {
        let config = GestureConfig {
            scroll_gain: 150.0,
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("scrollGain"));

        let restored: GestureConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join("airmouse-config-test");
        let path = dir.join("config.json");

        let mut config = GestureConfig::default();
        config.pinch_gap = 42.0;
        config.save(&path).unwrap();

        let loaded = GestureConfig::load(&path).unwrap();
        assert_eq!(loaded.pinch_gap, 42.0);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
