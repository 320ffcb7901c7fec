//! Floyd-Steinberg error-diffusion quantization to a two-tone bitmap
//!
//! Processing is strictly sequential in raster order because every pixel's
//! quantization decision depends on error diffused from prior pixels.
//! Identical input always yields identical output.

use ndarray::Array2;

use crate::raster::bitmap::{BLACK, Bitmap, WHITE};

/// Quantization threshold between the two output levels
const THRESHOLD: f64 = 0.5;

/// Canonical Floyd-Steinberg weights: (column offset, row offset, weight)
const DIFFUSION: [(i64, i64, f64); 4] = [
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Quantize a bitmap to exactly two output levels using error diffusion
///
/// Every output pixel is either pure black or pure white. The input is read
/// through its normalized luminance; quantization error at each pixel is
/// distributed to not-yet-visited neighbors with the canonical 7/16, 3/16,
/// 5/16, 1/16 weights. Contributions falling outside the grid are dropped.
///
/// A 1x1 input quantizes to the nearer of the two levels. Fully uniform
/// inputs may exhibit characteristic banding; that is expected
/// error-diffusion behavior.
pub fn dither(bitmap: &Bitmap) -> Bitmap {
    let width = bitmap.width();
    let height = bitmap.height();

    let mut intensity = Array2::<f64>::zeros((height, width));
    for row in 0..height {
        for col in 0..width {
            if let Some(cell) = intensity.get_mut([row, col]) {
                *cell = bitmap.luminance(col, row).unwrap_or(0.0);
            }
        }
    }

    for row in 0..height {
        for col in 0..width {
            let current = intensity.get([row, col]).copied().unwrap_or(0.0);
            let quantized = if current < THRESHOLD { 0.0 } else { 1.0 };
            let error = current - quantized;

            if let Some(cell) = intensity.get_mut([row, col]) {
                *cell = quantized;
            }

            for (dx, dy, weight) in DIFFUSION {
                diffuse(
                    &mut intensity,
                    row as i64 + dy,
                    col as i64 + dx,
                    error * weight,
                );
            }
        }
    }

    Bitmap::from_fn(width, height, |x, y| {
        let level = intensity.get([y, x]).copied().unwrap_or(0.0);
        if level < THRESHOLD { BLACK } else { WHITE }
    })
}

// Out-of-bounds contributions are dropped; no wraparound
fn diffuse(intensity: &mut Array2<f64>, row: i64, col: i64, amount: f64) {
    if row < 0 || col < 0 {
        return;
    }
    if let Some(cell) = intensity.get_mut([row as usize, col as usize]) {
        *cell += amount;
    }
}
