//! Replay binary: runs a recorded landmark trace through the gesture
//! engine and logs the actions it produces.
//!
//! Usage: `airmouse <trace.json> [--screenshot]`
//!
//! With `--screenshot`, a `TakeScreenshot` action really captures the
//! screen; otherwise every action is logged only.

use std::path::PathBuf;
use std::process::ExitCode;

use airmouse_lib::error::ResultExt;
use airmouse_lib::{
    capture, trace, Action, ActionSink, AirMouseResult, GestureConfig, GestureEngine,
    ScreenBounds, TraceSink,
};

/// Sink used by the replay binary: logs everything, optionally taking
/// real screenshots.
struct ReplaySink {
    inner: TraceSink,
    take_screenshots: bool,
}

impl ActionSink for ReplaySink {
    fn apply(&mut self, action: &Action) -> AirMouseResult<()> {
        self.inner.apply(action)?;
        if self.take_screenshots && matches!(action, Action::TakeScreenshot) {
            let path = capture::capture_screenshot(None)?;
            log::info!("[MAIN] Screenshot saved as {}", path.display());
        }
        Ok(())
    }
}

fn run() -> AirMouseResult<()> {
    let mut trace_path: Option<PathBuf> = None;
    let mut take_screenshots = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--screenshot" => take_screenshots = true,
            _ => trace_path = Some(PathBuf::from(arg)),
        }
    }

    let trace_path = trace_path.ok_or("usage: airmouse <trace.json> [--screenshot]")?;

    let config = GestureConfig::load_or_default();
    let screen = ScreenBounds::detect().unwrap_or_else(|e| {
        log::warn!("[MAIN] No display detected ({}), assuming 1920x1080", e);
        ScreenBounds::new(1920, 1080)
    });
    log::info!("[MAIN] Screen bounds: {}x{}", screen.width, screen.height);

    let loaded = trace::LandmarkTrace::load_from_file(&trace_path)
        .with_context(|| format!("failed to load trace {}", trace_path.display()))?;
    log::info!(
        "[MAIN] Loaded {} frames covering {:.1}s from {}",
        loaded.frames.len(),
        loaded.duration_ms() / 1000.0,
        trace_path.display(),
    );

    let mut engine = GestureEngine::new(config, screen);
    let mut sink = ReplaySink {
        inner: TraceSink::new(),
        take_screenshots,
    };

    let summary = trace::replay(&loaded, &mut engine, &mut sink)?;
    log::info!(
        "[MAIN] Done: {} frames replayed, {} actions applied",
        summary.frames,
        summary.actions,
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[MAIN] {}", e);
            ExitCode::FAILURE
        }
    }
}
