//! Bitmap representation and two-tone quantization
//!
//! This module contains the raster-related functionality:
//! - Immutable RGB bitmap grids
//! - Floyd-Steinberg error-diffusion dithering

/// Immutable bitmap grid and pixel access
pub mod bitmap;
/// Floyd-Steinberg error-diffusion dithering
pub mod dither;

pub use bitmap::{BLACK, Bitmap, Rgb, WHITE};
pub use dither::dither;
