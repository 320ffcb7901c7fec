//! Frame capture and GIF generation for transform runs

use image::{Rgba, RgbaImage};

use crate::io::configuration::{PARTICLE_DOT_RADIUS, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, TransformError};
use crate::transform::Frame;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rasterizes controller frames and exports them as an animated GIF
///
/// Particles outside the canvas are skipped, matching how a windowed
/// renderer would clip them.
pub struct FrameRecorder {
    width: u32,
    height: u32,
    frames: Vec<RgbaImage>,
}

impl FrameRecorder {
    /// Create a recorder with a fixed canvas size
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
        }
    }

    /// Rasterize one frame snapshot onto a fresh canvas
    pub fn record(&mut self, frame: &Frame) {
        let mut canvas = RgbaImage::from_pixel(self.width, self.height, BACKGROUND);

        for particle in &frame.particles {
            let [x, y] = particle.position;
            let center_x = x.round() as i64;
            let center_y = y.round() as i64;
            let [r, g, b] = particle.color;
            let color = Rgba([r, g, b, 255]);

            for dy in -PARTICLE_DOT_RADIUS..=PARTICLE_DOT_RADIUS {
                for dx in -PARTICLE_DOT_RADIUS..=PARTICLE_DOT_RADIUS {
                    let px = center_x + dx;
                    let py = center_y + dy;
                    if px >= 0 && py >= 0 && px < i64::from(self.width) && py < i64::from(self.height)
                    {
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }

        self.frames.push(canvas);
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// The final frame is held longer so the settled silhouette stays
    /// visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(TransformError::MalformedBitmap {
                reason: "no frames captured for export".to_string(),
            });
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

        let mut frames: Vec<image::Frame> = self
            .frames
            .iter()
            .map(|img| {
                image::Frame::from_parts(
                    img.clone(),
                    0,
                    0,
                    image::Delay::from_numer_denom_ms(effective_delay_ms, 1),
                )
            })
            .collect();

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(image::Frame::from_parts(
                last.clone(),
                0,
                0,
                image::Delay::from_numer_denom_ms(effective_delay_ms * 25, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| TransformError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| TransformError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| TransformError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}
