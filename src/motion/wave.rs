//! Wave transform: sinusoidal lateral force with a strengthening restoring pull

use crate::field::Particle;
use crate::io::configuration::{
    WAVE_AMPLITUDE, WAVE_DAMPING, WAVE_FREQUENCY, WAVE_PHASE_STEP, WAVE_PULL_BASE, WAVE_PULL_GAIN,
};
use crate::math::easing;
use crate::motion::{MotionStrategy, Step, final_approach, run_progress};

/// Sinusoidal wave motion
///
/// The lateral force's phase offset is a deterministic function of the
/// particle's grid index, so neighboring particles move as a visibly
/// continuous wave rather than independently. The restoring pull toward the
/// target strengthens as the run approaches its total duration; it is
/// applied as an exponential position blend, which cannot overshoot for any
/// `dt`.
#[derive(Debug, Clone, Copy)]
pub struct Wave {
    /// Peak lateral force
    pub amplitude: f64,
    /// Angular frequency of the wave in radians per time-unit
    pub frequency: f64,
    /// Phase offset between adjacent grid indices
    pub phase_step: f64,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            amplitude: WAVE_AMPLITUDE,
            frequency: WAVE_FREQUENCY,
            phase_step: WAVE_PHASE_STEP,
        }
    }
}

impl MotionStrategy for Wave {
    fn step(&self, particle: &Particle, dt: f64, run_elapsed: f64) -> Step {
        let progress = run_progress(run_elapsed);
        let phase = particle.grid_index as f64 * self.phase_step;

        // Lateral force fades as the run ends so the pull can win
        let lateral =
            (run_elapsed.mul_add(self.frequency, phase)).sin() * self.amplitude * (1.0 - progress);

        let damping = WAVE_DAMPING.mul_add(-dt, 1.0).max(0.0);
        let [vx, vy] = particle.velocity;
        let [new_vx, new_vy] = [lateral.mul_add(dt, vx) * damping, vy * damping];

        let [px, py] = particle.position;
        let drifted = [new_vx.mul_add(dt, px), new_vy.mul_add(dt, py)];

        let pull = WAVE_PULL_GAIN.mul_add(progress * progress, WAVE_PULL_BASE);
        let alpha = 1.0 - (-pull * dt).exp();
        let pulled = easing::lerp_point(drifted, particle.target, alpha);

        Step {
            position: final_approach(pulled, particle.target, progress),
            velocity: [new_vx, new_vy],
        }
    }

    fn name(&self) -> &'static str {
        "wave"
    }
}
