//! Swirl: shrinking spiral around the field center

use crate::field::Particle;
use crate::io::configuration::{SWIRL_ANGULAR_RATE, SWIRL_CHASE_RATE, SWIRL_RADIUS};
use crate::math::easing;
use crate::motion::{MotionStrategy, Step, final_approach, run_progress};

// Golden angle spreads particles evenly around the spiral
const GRID_ANGLE_STEP: f64 = 2.399_963_229_728_653;

/// Shrinking spiral motion
///
/// Each particle chases a closed-form orbit point around the field center
/// whose radius shrinks as the run progresses; the chase is an exponential
/// blend, so entry into the spiral is continuous from wherever the particle
/// starts. The angular offset is a deterministic function of the grid index
/// so the spiral reads as a swarm rather than a single point.
#[derive(Debug, Clone, Copy)]
pub struct Swirl {
    /// Center of the spiral in source pixel units
    pub center: [f64; 2],
    /// Initial spiral radius
    pub radius: f64,
    /// Angular velocity in radians per time-unit
    pub angular_rate: f64,
}

impl Swirl {
    /// Create a swirl around the given center
    pub const fn new(center: [f64; 2]) -> Self {
        Self {
            center,
            radius: SWIRL_RADIUS,
            angular_rate: SWIRL_ANGULAR_RATE,
        }
    }
}

impl MotionStrategy for Swirl {
    fn step(&self, particle: &Particle, dt: f64, run_elapsed: f64) -> Step {
        let progress = run_progress(run_elapsed);

        let angle = (particle.age_in_run + dt).mul_add(
            self.angular_rate,
            (particle.grid_index as f64).mul_add(GRID_ANGLE_STEP, progress * std::f64::consts::TAU),
        );
        let radius = self.radius * (1.0 - progress);

        let [cx, cy] = self.center;
        let spiral = [angle.cos().mul_add(radius, cx), angle.sin().mul_add(radius, cy)];

        let chase = 1.0 - (-SWIRL_CHASE_RATE * dt).exp();
        let chased = easing::lerp_point(particle.position, spiral, chase);
        let blended = easing::lerp_point(chased, particle.target, easing::smooth_step(progress));
        let position = final_approach(blended, particle.target, progress);

        // Finite-difference velocity for render clients that want it
        let velocity = if dt > 0.0 {
            let [px, py] = particle.position;
            let [nx, ny] = position;
            [(nx - px) / dt, (ny - py) / dt]
        } else {
            particle.velocity
        };

        Step { position, velocity }
    }

    fn name(&self) -> &'static str {
        "swirl"
    }
}
