//! Per-frame gesture state machine.
//!
//! Consumes one landmark snapshot per frame and emits the mouse actions it
//! implies. Three pieces of state survive between frames: the drag flag,
//! the scroll anchor, and the current overlay message. Everything else is
//! recomputed from scratch each frame.
//!
//! Frames must be fed in arrival order — drag and scroll semantics depend
//! on what the previous frame did.

use std::time::Instant;

use crate::actions::screen::ScreenBounds;
use crate::actions::{Action, MouseButton};
use crate::config::GestureConfig;
use crate::hand::{HandSnapshot, XY};

use super::pose::{self, PoseMetrics};

/// The result of one engine step.
///
/// `actions` is ordered: a drag release and the click that follows it in
/// the same frame are two entries, applied in sequence. Most frames carry
/// zero or one action; an empty list means no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutput {
    pub actions: Vec<Action>,
    /// Message newly raised by this step, if any.
    pub message: Option<&'static str>,
}

/// An overlay message with its display deadline tracked by timestamp.
#[derive(Debug, Clone, Copy)]
struct OverlayMessage {
    text: &'static str,
    shown_at: Instant,
}

/// Gesture classification state machine.
pub struct GestureEngine {
    config: GestureConfig,
    screen: ScreenBounds,
    /// True iff we have pressed the left button and not yet released it.
    dragging: bool,
    /// Index-tip position of the previous scroll-pose frame.
    scroll_anchor: Option<XY<f64>>,
    message: Option<OverlayMessage>,
}

impl GestureEngine {
    pub fn new(config: GestureConfig, screen: ScreenBounds) -> Self {
        Self {
            config,
            screen,
            dragging: false,
            scroll_anchor: None,
            message: None,
        }
    }

    /// Classify one frame of landmarks and emit the implied actions.
    ///
    /// A frame with fewer than 21 points leaves all state untouched and
    /// emits nothing; the scroll anchor only resets on a complete frame
    /// that fails the scroll pose.
    pub fn step(&mut self, points: &[XY<f64>], now: Instant) -> StepOutput {
        let mut out = StepOutput::default();

        let snapshot = match HandSnapshot::from_points(points) {
            Some(snapshot) => snapshot,
            None => return out,
        };

        // Scroll wins over everything else, including an active drag pose.
        if pose::is_scroll_pose(&snapshot) {
            self.handle_scroll(snapshot.index_tip(), now, &mut out);
            return out;
        }
        self.scroll_anchor = None;

        if pose::is_drag_pose(&snapshot) {
            if !self.dragging {
                self.dragging = true;
                out.actions.push(Action::PressLeftDown);
                self.raise_message("Drag Start", now, &mut out);
                log::debug!("[GESTURE] Drag started");
            } else {
                out.actions.push(self.move_cursor(snapshot.index_tip()));
            }
            return out;
        }

        // Leaving the drag pose releases the button first; the same frame
        // may still classify as a move or click below.
        if self.dragging {
            self.dragging = false;
            out.actions.push(Action::ReleaseLeftUp);
            self.raise_message("Drag End", now, &mut out);
            log::debug!("[GESTURE] Drag ended");
        }

        let metrics = PoseMetrics::of(&snapshot);
        if pose::is_pointer_move(&metrics, &self.config) {
            out.actions.push(self.move_cursor(snapshot.index_tip()));
        } else if pose::is_left_click(&metrics, &self.config) {
            out.actions.push(Action::Click(MouseButton::Left));
            self.raise_message("Left Click", now, &mut out);
        } else if pose::is_right_click(&metrics, &self.config) {
            out.actions.push(Action::Click(MouseButton::Right));
            self.raise_message("Right Click", now, &mut out);
        } else if pose::is_double_click(&metrics, &self.config) {
            out.actions.push(Action::DoubleClick);
            self.raise_message("Double Click", now, &mut out);
        } else if pose::is_screenshot_pose(&metrics, &self.config) {
            out.actions.push(Action::TakeScreenshot);
            self.raise_message("Screenshot Saved", now, &mut out);
        }

        out
    }

    /// Scroll sub-machine: emit a delta against the previous frame's anchor,
    /// then advance the anchor. The first frame of a scroll gesture only
    /// primes the anchor.
    fn handle_scroll(&mut self, tip: XY<f64>, now: Instant, out: &mut StepOutput) {
        if let Some(prev) = self.scroll_anchor {
            let dx = tip.x - prev.x;
            let dy = tip.y - prev.y;
            if dy.abs() > dx.abs() {
                out.actions
                    .push(Action::ScrollVertical((-dy * self.config.scroll_gain) as i32));
                self.raise_message("Scrolling Vertically", now, out);
            } else {
                out.actions
                    .push(Action::ScrollHorizontal((dx * self.config.scroll_gain) as i32));
                self.raise_message("Scrolling Horizontally", now, out);
            }
        }
        self.scroll_anchor = Some(tip);
    }

    fn move_cursor(&self, tip: XY<f64>) -> Action {
        let (x, y) = self
            .screen
            .map_normalized(tip, self.config.cursor_y_compression);
        Action::MoveCursor(x, y)
    }

    fn raise_message(&mut self, text: &'static str, now: Instant, out: &mut StepOutput) {
        self.message = Some(OverlayMessage {
            text,
            shown_at: now,
        });
        out.message = Some(text);
    }

    /// The overlay message to render at `now`, if one is still live.
    /// Expiry is purely time-based; there is no explicit clear.
    pub fn active_message(&self, now: Instant) -> Option<&'static str> {
        let ttl = self.config.message_ttl();
        self.message
            .filter(|m| now.saturating_duration_since(m.shown_at) < ttl)
            .map(|m| m.text)
    }

    /// Whether the engine currently holds the left button down.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}
