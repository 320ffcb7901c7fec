//! Mathematical utilities for motion and color blending

/// Easing curves, interpolation and color blending
pub mod easing;
