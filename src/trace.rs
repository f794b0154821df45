//! Recorded landmark streams for offline replay.
//!
//! A trace is the per-frame output of the hand-landmark detector captured
//! to JSON: a timestamp plus the normalized points seen that frame. Frames
//! where the hand was lost carry fewer (or zero) points and replay as
//! no-ops. Traces drive the replay binary and integration tests without a
//! camera attached.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::actions::ActionSink;
use crate::error::AirMouseResult;
use crate::gesture::GestureEngine;
use crate::hand::XY;

/// One detector frame: timestamp in milliseconds from trace start, plus
/// whatever landmarks were seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkFrame {
    /// Timestamp in milliseconds from recording start.
    pub time_ms: f64,

    /// Normalized landmark positions (0.0-1.0), detector index order.
    pub points: Vec<XY<f64>>,
}

/// Container for a recorded landmark stream, sorted by timestamp.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkTrace {
    pub frames: Vec<LandmarkFrame>,
}

impl LandmarkTrace {
    /// Load a trace from a JSON file.
    pub fn load_from_file(path: &Path) -> AirMouseResult<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Save the trace to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> AirMouseResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Total duration covered by the trace, in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.frames.last().map(|f| f.time_ms).unwrap_or(0.0)
    }
}

/// Totals reported after a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Frames fed through the engine.
    pub frames: usize,
    /// Actions handed to the sink.
    pub actions: usize,
}

/// Feed every frame of a trace through the engine in order, applying the
/// resulting actions to the sink.
///
/// Frame timestamps are mapped onto a wall-clock base so message TTLs
/// behave as they would live.
pub fn replay(
    trace: &LandmarkTrace,
    engine: &mut GestureEngine,
    sink: &mut dyn ActionSink,
) -> AirMouseResult<ReplaySummary> {
    let base = Instant::now();
    let mut summary = ReplaySummary::default();

    for frame in &trace.frames {
        let now = base + Duration::from_secs_f64(frame.time_ms.max(0.0) / 1000.0);
        let out = engine.step(&frame.points, now);

        if let Some(text) = out.message {
            log::info!("[OVERLAY] {}", text);
        }
        for action in &out.actions {
            sink.apply(action)?;
            summary.actions += 1;
        }
        summary.frames += 1;
    }

    log::debug!(
        "[TRACE] Replayed {} frames, {} actions",
        summary.frames,
        summary.actions,
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::screen::ScreenBounds;
    use crate::actions::Action;
    use crate::config::GestureConfig;
    use crate::gesture::testkit::{drag_hand, idle_hand, short_frame};

    /// Sink that records applied actions for assertions.
    #[derive(Default)]
    struct RecordingSink {
        actions: Vec<Action>,
    }

    impl ActionSink for RecordingSink {
        fn apply(&mut self, action: &Action) -> AirMouseResult<()> {
            self.actions.push(*action);
            Ok(())
        }
    }

    fn trace_of(frames: Vec<(f64, Vec<XY<f64>>)>) -> LandmarkTrace {
        LandmarkTrace {
            frames: frames
                .into_iter()
                .map(|(time_ms, points)| LandmarkFrame { time_ms, points })
                .collect(),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let dir = std::env::temp_dir().join("airmouse-trace-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("trace.json");

        let trace = trace_of(vec![
            (0.0, short_frame()),
            (33.3, drag_hand()),
            (66.6, idle_hand()),
        ]);
        trace.save_to_file(&path).unwrap();

        let restored = LandmarkTrace::load_from_file(&path).unwrap();
        assert_eq!(restored, trace);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_serialized_field_names() {
        let trace = trace_of(vec![(0.0, vec![XY::new(0.1, 0.2)])]);
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"timeMs\""));
        assert!(json.contains("\"points\""));
    }

    #[test]
    fn test_duration_ms() {
        assert_eq!(LandmarkTrace::default().duration_ms(), 0.0);

        let trace = trace_of(vec![(0.0, vec![]), (125.0, vec![])]);
        assert_eq!(trace.duration_ms(), 125.0);
    }

    #[test]
    fn test_replay_drives_engine_in_order() {
        let trace = trace_of(vec![
            (0.0, short_frame()),
            (33.0, drag_hand()),
            (66.0, drag_hand()),
            (100.0, idle_hand()),
        ]);

        let mut engine =
            GestureEngine::new(GestureConfig::default(), ScreenBounds::new(1920, 1080));
        let mut sink = RecordingSink::default();

        let summary = replay(&trace, &mut engine, &mut sink).unwrap();
        assert_eq!(summary.frames, 4);
        assert_eq!(summary.actions, 3);

        assert_eq!(sink.actions[0], Action::PressLeftDown);
        assert!(matches!(sink.actions[1], Action::MoveCursor(_, _)));
        assert_eq!(sink.actions[2], Action::ReleaseLeftUp);
        assert!(!engine.is_dragging());
    }
}
