//! Morph: eased direct interpolation toward the target

use crate::field::Particle;
use crate::io::configuration::{MORPH_DAMPING, MORPH_PULL_BASE, MORPH_PULL_GAIN};
use crate::math::easing;
use crate::motion::{MotionStrategy, Step, final_approach, run_progress};

/// Direct eased morph
///
/// The launch impulse decays under heavy damping while an ease-out pull
/// blends the particle onto its target, giving a brief break-away before the
/// pixels dissolve into place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Morph;

impl MotionStrategy for Morph {
    fn step(&self, particle: &Particle, dt: f64, run_elapsed: f64) -> Step {
        let progress = run_progress(run_elapsed);
        let eased = easing::ease_out(progress);

        let damping = MORPH_DAMPING.mul_add(-dt, 1.0).max(0.0);
        let [vx, vy] = particle.velocity;
        let velocity = [vx * damping, vy * damping];

        let [px, py] = particle.position;
        let [dvx, dvy] = velocity;
        let drifted = [dvx.mul_add(dt, px), dvy.mul_add(dt, py)];

        let pull = MORPH_PULL_GAIN.mul_add(eased, MORPH_PULL_BASE);
        let alpha = 1.0 - (-pull * dt).exp();
        let blended = easing::lerp_point(drifted, particle.target, alpha);

        Step {
            position: final_approach(blended, particle.target, progress),
            velocity,
        }
    }

    fn name(&self) -> &'static str {
        "morph"
    }
}
