//! Particle field: seeding from a bitmap pair and per-tick advancement
//!
//! The field is the only component permitted to mutate particle state
//! outside seeding, and it is exclusively owned by one run at a time.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::field::particle::{Particle, Phase};
use crate::io::configuration::{
    FINAL_APPROACH_START, LAUNCH_SPEED_MAX, LAUNCH_SPEED_MIN, LAUNCH_VERTICAL_SCALE, LAUNCH_WINDOW,
    POSITION_EPSILON, RUN_DURATION, SETTLE_RADIUS, STAGGER_MAX,
};
use crate::io::error::{Result, TransformError};
use crate::motion::MotionStrategy;
use crate::raster::Bitmap;

/// Ordered collection of particles, index-aligned with the shared sample grid
/// of a (source, silhouette) bitmap pair
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    grid_width: usize,
    grid_height: usize,
    stride: usize,
}

impl ParticleField {
    /// Seed a field from an index-aligned bitmap pair
    ///
    /// Both bitmaps are downsampled to a common grid with a uniform stride,
    /// never randomly: the smallest stride is chosen such that the total
    /// particle count stays within `max_particles`. One particle is created
    /// per grid cell with `position = origin`, `velocity = 0` and
    /// `phase = Idle`. Per-particle launch impulses and stagger delays are
    /// drawn from a generator seeded with `seed`, so identical inputs always
    /// produce the identical field.
    ///
    /// # Errors
    ///
    /// Returns `MalformedBitmap` if the pair dimensions differ, either bitmap
    /// is zero-sized, or `max_particles` is zero.
    pub fn seed(
        origin: &Bitmap,
        target: &Bitmap,
        max_particles: usize,
        seed: u64,
    ) -> Result<Self> {
        if origin.is_empty() || target.is_empty() {
            return Err(TransformError::MalformedBitmap {
                reason: "zero-size bitmap".to_string(),
            });
        }
        if origin.width() != target.width() || origin.height() != target.height() {
            return Err(TransformError::MalformedBitmap {
                reason: format!(
                    "dimension mismatch: source {}x{} vs target {}x{}",
                    origin.width(),
                    origin.height(),
                    target.width(),
                    target.height()
                ),
            });
        }
        if max_particles == 0 {
            return Err(TransformError::MalformedBitmap {
                reason: "particle cap is zero".to_string(),
            });
        }

        let width = origin.width();
        let height = origin.height();
        let stride = sampling_stride(width, height, max_particles);
        let grid_width = width.div_ceil(stride);
        let grid_height = height.div_ceil(stride);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = Vec::with_capacity(grid_width * grid_height);

        for grid_row in 0..grid_height {
            for grid_col in 0..grid_width {
                let x = grid_col * stride;
                let y = grid_row * stride;
                let cell = [x as f64, y as f64];
                let grid_index = grid_row * grid_width + grid_col;

                let angle = rng.random::<f64>() * std::f64::consts::TAU;
                let speed = rng
                    .random::<f64>()
                    .mul_add(LAUNCH_SPEED_MAX - LAUNCH_SPEED_MIN, LAUNCH_SPEED_MIN);
                let impulse = [
                    angle.cos() * speed,
                    angle.sin() * speed * LAUNCH_VERTICAL_SCALE,
                ];
                let stagger = rng.random::<f64>() * STAGGER_MAX;

                particles.push(Particle::new(
                    cell,
                    origin.get(x, y).unwrap_or([0, 0, 0]),
                    cell,
                    target.get(x, y).unwrap_or([0, 0, 0]),
                    grid_index,
                    impulse,
                    stagger,
                ));
            }
        }

        Ok(Self {
            particles,
            grid_width,
            grid_height,
            stride,
        })
    }

    /// Advance every particle by `dt` under the given motion strategy
    ///
    /// Applies the lifecycle schedule, then delegates the kinematic update
    /// to the strategy. Settled particles are frozen.
    pub fn advance(&mut self, dt: f64, run_elapsed: f64, strategy: &dyn MotionStrategy) {
        let progress = (run_elapsed / RUN_DURATION).clamp(0.0, 1.0);

        for particle in &mut self.particles {
            match particle.phase {
                Phase::Settled => continue,
                Phase::Idle => {
                    particle.phase = Phase::Launching;
                    particle.velocity = particle.impulse;
                }
                _ => {}
            }

            let step = strategy.step(particle, dt, run_elapsed);
            particle.position = step.position;
            particle.velocity = step.velocity;
            particle.age_in_run += dt;

            let remaining = particle.distance_to_target();
            particle.phase = match particle.phase {
                Phase::Launching if particle.age_in_run >= LAUNCH_WINDOW => Phase::InTransit,
                Phase::InTransit
                    if remaining <= SETTLE_RADIUS || progress >= FINAL_APPROACH_START =>
                {
                    Phase::Settling
                }
                Phase::Settling if remaining <= POSITION_EPSILON => Phase::Settled,
                other => other,
            };

            if particle.phase == Phase::Settled {
                particle.position = particle.target;
                particle.velocity = [0.0, 0.0];
            }
        }
    }

    /// Whether every particle has reached its terminal phase
    pub fn is_settled(&self) -> bool {
        self.particles.iter().all(Particle::is_settled)
    }

    /// Hard-deadline fallback: snap every particle to its target and mark it
    /// settled, regardless of remaining distance
    pub fn snap_to_targets(&mut self) {
        for particle in &mut self.particles {
            particle.position = particle.target;
            particle.velocity = [0.0, 0.0];
            particle.phase = Phase::Settled;
        }
    }

    /// The seeded particles in grid order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the field
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field contains no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Width of the shared sample grid in cells
    pub const fn grid_width(&self) -> usize {
        self.grid_width
    }

    /// Height of the shared sample grid in cells
    pub const fn grid_height(&self) -> usize {
        self.grid_height
    }

    /// Uniform pixel stride between adjacent sample cells
    pub const fn stride(&self) -> usize {
        self.stride
    }
}

// Smallest uniform stride keeping the grid within the particle cap
const fn sampling_stride(width: usize, height: usize, max_particles: usize) -> usize {
    let mut stride = 1;
    while width.div_ceil(stride) * height.div_ceil(stride) > max_particles {
        stride += 1;
    }
    stride
}
