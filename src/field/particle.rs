//! Single animated particle: kinematic state, colors and lifecycle phase

use crate::math::easing;
use crate::raster::Rgb;

/// Per-particle lifecycle phase, bounded by the controller's run state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Seeded but not yet advanced
    Idle,
    /// Breaking away from the origin under the launch impulse
    Launching,
    /// Moving under the active motion strategy
    InTransit,
    /// Close to the target, closing the remaining gap
    Settling,
    /// At the target; no further movement
    Settled,
}

/// The atomic animated unit of a transform run
///
/// `target` is fixed at seeding time and never changes mid-run; `origin`
/// defines the particle's position at time zero of `Launching`.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position sampled from the source bitmap, in source pixel units
    pub origin: [f64; 2],
    /// Color sampled from the source bitmap
    pub origin_color: Rgb,
    /// Position sampled from the silhouette bitmap at the same grid index
    pub target: [f64; 2],
    /// Two-tone color sampled from the silhouette bitmap
    pub target_color: Rgb,
    /// Current position in continuous space
    pub position: [f64; 2],
    /// Current velocity in pixel units per simulated time-unit
    pub velocity: [f64; 2],
    /// Current lifecycle phase
    pub phase: Phase,
    /// Elapsed simulated time since this particle's transform began
    pub age_in_run: f64,
    /// Index of this particle's cell in the shared sample grid
    pub grid_index: usize,
    /// Scatter velocity applied once at the Idle to Launching transition
    pub impulse: [f64; 2],
    /// Fraction of run progress before this particle is pulled home
    pub stagger: f64,
}

impl Particle {
    pub(crate) const fn new(
        origin: [f64; 2],
        origin_color: Rgb,
        target: [f64; 2],
        target_color: Rgb,
        grid_index: usize,
        impulse: [f64; 2],
        stagger: f64,
    ) -> Self {
        Self {
            origin,
            origin_color,
            target,
            target_color,
            position: origin,
            velocity: [0.0, 0.0],
            phase: Phase::Idle,
            age_in_run: 0.0,
            grid_index,
            impulse,
            stagger,
        }
    }

    /// Euclidean distance from the current position to the target
    pub fn distance_to_target(&self) -> f64 {
        easing::distance(self.position, self.target)
    }

    /// Per-particle color blend factor for the given run progress
    ///
    /// Particles blend toward their target color only after their stagger
    /// delay has passed, so the silhouette tone appears gradually.
    pub const fn blend_progress(&self, run_progress: f64) -> f64 {
        let span = (1.0 - self.stagger).max(f64::EPSILON);
        ((run_progress - self.stagger) / span).clamp(0.0, 1.0)
    }

    /// Render color for the given run progress
    pub fn color(&self, run_progress: f64) -> Rgb {
        easing::blend_color(
            self.origin_color,
            self.target_color,
            self.blend_progress(run_progress),
        )
    }

    /// Whether this particle has reached its terminal phase
    pub const fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled)
    }
}
