//! PNG loading, bitmap conversion and export

use std::path::Path;

use image::imageops::FilterType;
use image::{ImageBuffer, RgbImage};

use crate::io::error::{Result, TransformError};
use crate::raster::Bitmap;

/// Load a bitmap from an image file on disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_bitmap(path: &Path) -> Result<Bitmap> {
    let img = image::open(path).map_err(|e| TransformError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(bitmap_from_rgb(&img.to_rgb8()))
}

/// Convert a decoded RGB image into a bitmap
pub fn bitmap_from_rgb(img: &RgbImage) -> Bitmap {
    Bitmap::from_fn(img.width() as usize, img.height() as usize, |x, y| {
        img.get_pixel(x as u32, y as u32).0
    })
}

/// Convert a bitmap into an RGB image buffer
pub fn bitmap_to_rgb(bitmap: &Bitmap) -> RgbImage {
    ImageBuffer::from_fn(bitmap.width() as u32, bitmap.height() as u32, |x, y| {
        image::Rgb(bitmap.get(x as usize, y as usize).unwrap_or([255, 255, 255]))
    })
}

/// Resample a bitmap to the given dimensions
///
/// Used to bring an acquired photograph onto the source scene's grid before
/// dithering; the aspect ratio is not preserved because the pair must be
/// index-aligned cell for cell.
pub fn resize_to(bitmap: &Bitmap, width: usize, height: usize) -> Bitmap {
    let resized = image::imageops::resize(
        &bitmap_to_rgb(bitmap),
        width as u32,
        height as u32,
        FilterType::Triangle,
    );
    bitmap_from_rgb(&resized)
}

/// Export a bitmap as a PNG image
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the specified path.
pub fn export_bitmap_as_png(bitmap: &Bitmap, output_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| TransformError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    bitmap_to_rgb(bitmap)
        .save(output_path)
        .map_err(|e| TransformError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
