//! Immutable 2D pixel grid with normalized luminance access
//!
//! Bitmaps are never mutated in place; every transform allocates a new grid.
//! Storage is row-major `(height, width)` to match screen raster order.

use ndarray::Array2;

/// RGB pixel sample
pub type Rgb = [u8; 3];

/// Black output level for two-tone bitmaps
pub const BLACK: Rgb = [0, 0, 0];

/// White output level for two-tone bitmaps
pub const WHITE: Rgb = [255, 255, 255];

/// Immutable 2D grid of RGB samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Array2<Rgb>,
}

impl Bitmap {
    /// Create a bitmap of the given dimensions filled with a single color
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), fill),
        }
    }

    /// Create a bitmap from a row-major `(height, width)` pixel array
    pub const fn from_pixels(pixels: Array2<Rgb>) -> Self {
        Self { pixels }
    }

    /// Create a bitmap by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        Self {
            pixels: Array2::from_shape_fn((height, width), |(row, col)| f(col, row)),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Whether the bitmap contains no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.pixels.get([y, x]).copied()
    }

    /// Normalized luminance in `[0, 1]` at `(x, y)`, or `None` when out of bounds
    pub fn luminance(&self, x: usize, y: usize) -> Option<f64> {
        self.get(x, y).map(luminance)
    }
}

/// Normalized Rec. 601 luminance of a pixel, in `[0, 1]`
pub fn luminance(pixel: Rgb) -> f64 {
    let [r, g, b] = pixel;
    0.299f64.mul_add(
        f64::from(r),
        0.587f64.mul_add(f64::from(g), 0.114 * f64::from(b)),
    ) / 255.0
}
