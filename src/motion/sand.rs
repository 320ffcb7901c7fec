//! Falling sand: gravity, friction and landing at the target row

use crate::field::Particle;
use crate::io::configuration::{
    FRICTION_COEFFICIENT, GRAVITY, SAND_LATERAL_RATE, SAND_TERMINAL_SPEED,
};
use crate::math::easing;
use crate::motion::{MotionStrategy, Step, final_approach, run_progress};

/// Gravity-driven sand fall
///
/// Particles fly out on their launch impulse, gain constant downward
/// acceleration and lose a friction term proportional to speed
/// (`v <- v * (1 - friction * dt)`). A descending particle lands when it
/// reaches its target row; from then on an exponential correction slides the
/// remaining x offset closed. Particles still airborne after their stagger
/// delay are pulled home on both axes by the same correction.
#[derive(Debug, Clone, Copy)]
pub struct FallingSand {
    /// Downward acceleration in pixels per time-unit squared
    pub gravity: f64,
    /// Friction coefficient per time-unit
    pub friction: f64,
    /// Exponential rate of the landing correction
    pub lateral_rate: f64,
}

impl Default for FallingSand {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION_COEFFICIENT,
            lateral_rate: SAND_LATERAL_RATE,
        }
    }
}

impl FallingSand {
    fn fall(&self, position: [f64; 2], velocity: [f64; 2], dt: f64) -> ([f64; 2], [f64; 2]) {
        let damping = self.friction.mul_add(-dt, 1.0).max(0.0);
        let [vx, vy] = velocity;
        let mut new_vx = vx * damping;
        let mut new_vy = self.gravity.mul_add(dt, vy) * damping;

        // Terminal velocity keeps long free falls bounded
        let speed = new_vx.hypot(new_vy);
        if speed > SAND_TERMINAL_SPEED {
            let scale = SAND_TERMINAL_SPEED / speed;
            new_vx *= scale;
            new_vy *= scale;
        }

        let [px, py] = position;
        (
            [new_vx.mul_add(dt, px), new_vy.mul_add(dt, py)],
            [new_vx, new_vy],
        )
    }
}

impl MotionStrategy for FallingSand {
    fn step(&self, particle: &Particle, dt: f64, run_elapsed: f64) -> Step {
        let progress = run_progress(run_elapsed);
        let [target_x, target_y] = particle.target;

        let (fallen, fall_velocity) = self.fall(particle.position, particle.velocity, dt);
        let [fallen_x, fallen_y] = fallen;
        let [fall_vx, fall_vy] = fall_velocity;

        // Land on the target row only while descending; upward-launched
        // particles pass through it freely on the way out
        let landed = fallen_y >= target_y && fall_vy >= 0.0;
        let (mut position, mut velocity) = if landed {
            ([fallen_x, target_y], [fall_vx, 0.0])
        } else {
            (fallen, fall_velocity)
        };

        if progress >= particle.stagger {
            // Attraction grows smoothly once this particle's delay has passed
            let span = (1.0 - particle.stagger).max(f64::EPSILON);
            let local = ((progress - particle.stagger) / span).clamp(0.0, 1.0);
            let rate = self.lateral_rate * local;
            let alpha = 1.0 - (-rate * dt).exp();

            if landed {
                // On the row: slide the remaining x offset closed and bleed
                // off the residual drift
                let [px, py] = position;
                position = [easing::lerp(px, target_x, alpha), py];
                velocity = [fall_vx * (-rate * dt).exp(), 0.0];
            } else {
                position = easing::lerp_point(position, particle.target, alpha);
            }
        }

        Step {
            position: final_approach(position, particle.target, progress),
            velocity,
        }
    }

    fn name(&self) -> &'static str {
        "falling sand"
    }
}
