//! AirMouse: hand-gesture virtual mouse.
//!
//! Maps per-frame hand-landmark snapshots from an external detector to
//! discrete mouse actions (move, click variants, drag, scroll, screenshot).
//!
//! ```text
//! detector frame (21 normalized points)
//!         |
//!   hand (snapshot + geometry)
//!         |
//!   gesture (pose classifiers -> state machine)
//!         |
//!   actions (Action values -> ActionSink)
//! ```
//!
//! The crate owns classification only. Video capture, the landmark model,
//! and OS input injection are external collaborators behind the
//! [`actions::ActionSink`] boundary; [`trace`] replays recorded detector
//! output through the same path.

pub mod actions;
pub mod capture;
pub mod config;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod trace;

pub use actions::screen::ScreenBounds;
pub use actions::{Action, ActionSink, MouseButton, TraceSink};
pub use config::GestureConfig;
pub use error::{AirMouseError, AirMouseResult};
pub use gesture::{GestureEngine, StepOutput};
pub use hand::{HandLandmark, HandSnapshot, XY};
pub use trace::{LandmarkTrace, ReplaySummary};
