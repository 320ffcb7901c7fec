//! Command-line interface for rendering transform runs to animated GIFs

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::io::configuration::{DEFAULT_FPS, DEFAULT_MAX_PARTICLES, DEFAULT_SEED, OUTPUT_SUFFIX, RUN_DURATION};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_bitmap_as_png, load_bitmap, resize_to};
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameRecorder;
use crate::motion::StrategyKind;
use crate::raster::dither;
use crate::transform::TransformController;

/// Selectable motion strategy on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Sinusoidal wave transform
    Wave,
    /// Falling-sand physics
    Sand,
    /// Spiral swirl around the field center
    Swirl,
    /// Direct eased morph
    Morph,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Wave => Self::Wave,
            StrategyArg::Sand => Self::FallingSand,
            StrategyArg::Swirl => Self::Swirl,
            StrategyArg::Morph => Self::Morph,
        }
    }
}

#[derive(Parser)]
#[command(name = "pixelmorph")]
#[command(
    version,
    about = "Animate a source image dissolving into a dithered silhouette"
)]
/// Command-line arguments for the transform renderer
pub struct Cli {
    /// Source scene PNG (the image being transformed)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Photograph PNG to dither into the silhouette target
    #[arg(value_name = "PHOTOGRAPH")]
    pub photograph: PathBuf,

    /// Motion strategy for the run
    #[arg(short = 't', long, value_enum, default_value = "wave")]
    pub strategy: StrategyArg,

    /// Seed for reproducible per-particle variation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum number of particles in the field
    #[arg(short, long, default_value_t = DEFAULT_MAX_PARTICLES)]
    pub particles: usize,

    /// Output frames per simulated time-unit
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Output GIF path (defaults to the source name plus a suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the dithered silhouette as a PNG
    #[arg(long, value_name = "PATH")]
    pub silhouette: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Drives one complete run from image files to an animated GIF
pub struct RunProcessor {
    cli: Cli,
}

impl RunProcessor {
    /// Create a processor from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the pair, run the transform to completion and export the GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An argument fails validation
    /// - Either image cannot be loaded
    /// - The pair cannot seed a run
    /// - An output file cannot be written
    pub fn process(&mut self) -> Result<()> {
        if self.cli.fps == 0 {
            return Err(invalid_parameter("fps", &self.cli.fps, &"must be positive"));
        }
        if self.cli.particles == 0 {
            return Err(invalid_parameter(
                "particles",
                &self.cli.particles,
                &"must be positive",
            ));
        }

        let source = load_bitmap(&self.cli.source)?;
        let photograph = load_bitmap(&self.cli.photograph)?;
        // The pair must be index-aligned cell for cell
        let photograph = resize_to(&photograph, source.width(), source.height());

        if let Some(path) = &self.cli.silhouette {
            export_bitmap_as_png(&dither(&photograph), &path.to_string_lossy())?;
        }

        let mut controller = TransformController::new(
            self.cli.strategy.into(),
            self.cli.particles,
            self.cli.seed,
        );
        controller.begin(&source, &photograph)?;

        let dt = 1.0 / f64::from(self.cli.fps);
        let total_frames = (RUN_DURATION * f64::from(self.cli.fps)).ceil() as usize;

        let mut recorder = FrameRecorder::new(source.width() as u32, source.height() as u32);
        let progress = ProgressManager::new(self.cli.quiet, total_frames);
        progress.set_message(format!(
            "{} ({} particles)",
            controller.strategy_kind().label(),
            controller.field().map_or(0, |field| field.len())
        ));

        if let Some(frame) = controller.frame() {
            recorder.record(&frame);
        }

        while !controller.is_settled() {
            controller.tick(dt);
            if let Some(frame) = controller.frame() {
                recorder.record(&frame);
            }
            progress.inc();
        }
        progress.finish();

        let output = self.cli.output.clone().unwrap_or_else(|| self.default_output());
        let frame_delay_ms = 1000 / self.cli.fps;
        recorder.export_gif(&output.to_string_lossy(), frame_delay_ms)?;

        self.report(recorder.frame_count(), &output);
        Ok(())
    }

    fn default_output(&self) -> PathBuf {
        let stem = self
            .cli
            .source
            .file_stem()
            .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().to_string());
        self.cli
            .source
            .with_file_name(format!("{stem}{OUTPUT_SUFFIX}.gif"))
    }

    #[allow(clippy::print_stdout)]
    fn report(&self, frame_count: usize, output: &std::path::Path) {
        if !self.cli.quiet {
            println!("Wrote {frame_count} frames to '{}'", output.display());
        }
    }
}
