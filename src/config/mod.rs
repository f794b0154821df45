//! Gesture threshold configuration.
//!
//! The classifier thresholds were calibrated empirically against one
//! camera/lighting setup; they are exposed as configuration rather than
//! hidden constants, but the defaults should not be changed casually.

pub mod gesture;

pub use gesture::GestureConfig;
