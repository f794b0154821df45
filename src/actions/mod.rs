//! Mouse action model and the sink boundary that executes it.
//!
//! The gesture core emits [`Action`] values; an [`ActionSink`] turns them
//! into real OS input (or records them, for replay and tests). Press and
//! release are separate actions so a drag can span frames.

pub mod screen;

use crate::error::AirMouseResult;

/// Mouse buttons, in the conventional 0/1/2 numbering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// String representation for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
        }
    }
}

/// One discrete mouse action emitted by the gesture engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to an absolute screen position, in pixels.
    MoveCursor(i32, i32),
    /// Press-and-release of a single button.
    Click(MouseButton),
    /// OS-level double click.
    DoubleClick,
    /// Hold the left button down (drag start).
    PressLeftDown,
    /// Release the left button (drag end).
    ReleaseLeftUp,
    /// Scroll vertically by a signed amount.
    ScrollVertical(i32),
    /// Scroll horizontally by a signed amount.
    ScrollHorizontal(i32),
    /// Capture the full screen and persist it.
    TakeScreenshot,
}

/// Executes actions on behalf of the gesture engine.
///
/// Implementations must honor the pairing of `PressLeftDown` and
/// `ReleaseLeftUp` across calls — the engine guarantees it never emits a
/// press while one is outstanding.
pub trait ActionSink {
    fn apply(&mut self, action: &Action) -> AirMouseResult<()>;
}

/// Sink that logs every action instead of injecting OS input.
///
/// Useful for replaying recorded traces and for soak-testing gesture
/// classification without moving the real cursor.
#[derive(Debug, Default)]
pub struct TraceSink {
    applied: usize,
}

impl TraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl ActionSink for TraceSink {
    fn apply(&mut self, action: &Action) -> AirMouseResult<()> {
        self.applied += 1;
        match action {
            Action::MoveCursor(x, y) => log::info!("[SINK] move cursor to ({}, {})", x, y),
            Action::Click(button) => log::info!("[SINK] {} click", button.as_str()),
            Action::DoubleClick => log::info!("[SINK] double click"),
            Action::PressLeftDown => log::info!("[SINK] left button down"),
            Action::ReleaseLeftUp => log::info!("[SINK] left button up"),
            Action::ScrollVertical(amount) => log::info!("[SINK] scroll vertical {}", amount),
            Action::ScrollHorizontal(amount) => {
                log::info!("[SINK] scroll horizontal {}", amount)
            }
            Action::TakeScreenshot => log::info!("[SINK] take screenshot"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_as_str() {
        assert_eq!(MouseButton::Left.as_str(), "left");
        assert_eq!(MouseButton::Right.as_str(), "right");
        assert_eq!(MouseButton::Middle.as_str(), "middle");
    }

    #[test]
    fn test_trace_sink_counts_actions() {
        let mut sink = TraceSink::new();
        assert_eq!(sink.applied(), 0);

        sink.apply(&Action::MoveCursor(10, 20)).unwrap();
        sink.apply(&Action::Click(MouseButton::Left)).unwrap();
        sink.apply(&Action::TakeScreenshot).unwrap();

        assert_eq!(sink.applied(), 3);
    }
}
