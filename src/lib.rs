//! Dithered silhouette generation and particle-field transform animation
//!
//! The engine converts a raster image into a two-tone silhouette with
//! Floyd-Steinberg error diffusion, then animates a pixel-by-pixel transition
//! from a source scene into that silhouette using a deterministic
//! physics-driven particle field with pluggable motion strategies.

#![forbid(unsafe_code)]

/// Particle data model and the particle field simulation
pub mod field;
/// Input/output operations, configuration and error handling
pub mod io;
/// Easing and interpolation helpers shared by the motion strategies
pub mod math;
/// Motion strategies driving per-particle kinematics
pub mod motion;
/// Bitmap representation and two-tone dithering
pub mod raster;
/// Run lifecycle state machine coordinating a complete transform
pub mod transform;

pub use io::error::{Result, TransformError};
