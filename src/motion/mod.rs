//! Motion strategies: pluggable per-particle update rules
//!
//! One strategy is selected per run and applied uniformly to every particle.
//! Each variant honors the same convergence contract: the position at the
//! end of the run equals the particle's target within the position epsilon,
//! independent of the field or controller.

/// Eased direct interpolation toward the target
pub mod morph;
/// Gravity-driven fall with friction and landing correction
pub mod sand;
/// Shrinking spiral around the field center
pub mod swirl;
/// Sinusoidal lateral motion with a strengthening restoring pull
pub mod wave;

use crate::field::Particle;
use crate::io::configuration::{FINAL_APPROACH_START, RUN_DURATION};
use crate::math::easing;

pub use morph::Morph;
pub use sand::FallingSand;
pub use swirl::Swirl;
pub use wave::Wave;

/// Kinematic result of one strategy step
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// New particle position
    pub position: [f64; 2],
    /// New particle velocity
    pub velocity: [f64; 2],
}

/// Per-particle update rule applied uniformly for one run
///
/// Implementations are pure: they read the particle and return its next
/// kinematic state without mutating anything.
pub trait MotionStrategy {
    /// Compute the particle's next position and velocity
    fn step(&self, particle: &Particle, dt: f64, run_elapsed: f64) -> Step;

    /// Human-readable strategy name
    fn name(&self) -> &'static str;
}

/// The closed set of selectable motion strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Sinusoidal wave transform
    Wave,
    /// Falling-sand physics
    FallingSand,
    /// Spiral swirl around the field center
    Swirl,
    /// Direct eased morph
    Morph,
}

impl StrategyKind {
    /// Build a strategy instance for a field with the given pixel extent
    pub fn instantiate(self, extent: [f64; 2]) -> Box<dyn MotionStrategy> {
        let [width, height] = extent;
        match self {
            Self::Wave => Box::new(Wave::default()),
            Self::FallingSand => Box::new(FallingSand::default()),
            Self::Swirl => Box::new(Swirl::new([(width - 1.0) / 2.0, (height - 1.0) / 2.0])),
            Self::Morph => Box::new(Morph),
        }
    }

    /// The next strategy in the cycle order
    pub const fn next(self) -> Self {
        match self {
            Self::Wave => Self::FallingSand,
            Self::FallingSand => Self::Swirl,
            Self::Swirl => Self::Morph,
            Self::Morph => Self::Wave,
        }
    }

    /// Short display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::FallingSand => "sand",
            Self::Swirl => "swirl",
            Self::Morph => "morph",
        }
    }
}

/// Normalized run progress in `[0, 1]` for an elapsed simulated time
pub const fn run_progress(run_elapsed: f64) -> f64 {
    (run_elapsed / RUN_DURATION).clamp(0.0, 1.0)
}

/// Blend a position onto its target over the final stretch of the run
///
/// Identity before the final-approach threshold; at `progress >= 1` the
/// returned position is exactly the target. Every strategy routes its output
/// through this helper, which is what makes convergence a property of the
/// strategy rather than of the field or controller.
pub fn final_approach(position: [f64; 2], target: [f64; 2], progress: f64) -> [f64; 2] {
    if progress < FINAL_APPROACH_START {
        return position;
    }
    let span = 1.0 - FINAL_APPROACH_START;
    let t = easing::smooth_step((progress - FINAL_APPROACH_START) / span);
    if t >= 1.0 {
        // Exact hand-off; interpolation rounding must not miss the target
        return target;
    }
    easing::lerp_point(position, target, t)
}
