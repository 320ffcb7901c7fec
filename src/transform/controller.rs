//! Transform controller: owns the lifecycle of one run
//!
//! The controller seeds the particle field from a (source, photograph) pair,
//! drives the selected motion strategy tick by tick, and declares
//! completion. It is strategy-agnostic: adding a motion variant never
//! touches this module.

use crate::field::ParticleField;
use crate::io::configuration::{DEFAULT_MAX_PARTICLES, DEFAULT_SEED, RUN_DURATION};
use crate::io::error::{Result, TransformError};
use crate::motion::{MotionStrategy, StrategyKind};
use crate::raster::{Bitmap, Rgb, dither};

/// Global run state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No active run; waiting for a bitmap pair
    Idle,
    /// Building the field from the pair; synchronous and transient
    Seeding,
    /// Advancing the field each tick
    Running,
    /// Terminal for the run; the field is frozen
    Settled,
}

impl ControllerState {
    /// Short display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Seeding => "seeding",
            Self::Running => "running",
            Self::Settled => "settled",
        }
    }
}

/// One particle's render sample: position and current color
#[derive(Debug, Clone, Copy)]
pub struct FrameParticle {
    /// Current position in source pixel units
    pub position: [f64; 2],
    /// Current blended color
    pub color: Rgb,
}

/// Read-only per-tick snapshot for the render collaborator
#[derive(Debug, Clone)]
pub struct Frame {
    /// Ordered render samples for all particles
    pub particles: Vec<FrameParticle>,
    /// Controller state tag at capture time
    pub state: ControllerState,
}

/// State machine owning a run's lifecycle
pub struct TransformController {
    state: ControllerState,
    strategy_kind: StrategyKind,
    strategy: Option<Box<dyn MotionStrategy>>,
    field: Option<ParticleField>,
    elapsed: f64,
    max_particles: usize,
    seed: u64,
}

impl Default for TransformController {
    fn default() -> Self {
        Self::new(StrategyKind::Wave, DEFAULT_MAX_PARTICLES, DEFAULT_SEED)
    }
}

impl TransformController {
    /// Create a controller in the `Idle` state
    pub const fn new(strategy_kind: StrategyKind, max_particles: usize, seed: u64) -> Self {
        Self {
            state: ControllerState::Idle,
            strategy_kind,
            strategy: None,
            field: None,
            elapsed: 0.0,
            max_particles,
            seed,
        }
    }

    /// Start a new run from a source scene and an acquired photograph
    ///
    /// The photograph is dithered into the two-tone silhouette target, then
    /// the field is seeded from the pair and the controller transitions
    /// through `Seeding` into `Running`. Any previous field is discarded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if a run is already seeding or
    /// running; the in-flight run is unaffected. Returns `MalformedBitmap`
    /// for a dimension mismatch or zero-size input; the run is aborted and
    /// the controller returns to `Idle`.
    pub fn begin(&mut self, source: &Bitmap, photograph: &Bitmap) -> Result<()> {
        match self.state {
            ControllerState::Idle | ControllerState::Settled => {}
            other => {
                return Err(TransformError::InvalidStateTransition {
                    state: other.label(),
                    request: "begin",
                });
            }
        }

        self.state = ControllerState::Seeding;
        let silhouette = dither(photograph);

        match ParticleField::seed(source, &silhouette, self.max_particles, self.seed) {
            Ok(field) => {
                let extent = [source.width() as f64, source.height() as f64];
                self.strategy = Some(self.strategy_kind.instantiate(extent));
                self.field = Some(field);
                self.elapsed = 0.0;
                self.state = ControllerState::Running;
                Ok(())
            }
            Err(error) => {
                self.discard_run();
                Err(error)
            }
        }
    }

    /// Advance the run by `dt` simulated time-units
    ///
    /// No-op outside `Running`. At the fixed total duration every
    /// unconverged particle is snapped to its target; strategies converge on
    /// their own by then, the snap is the hard fallback.
    #[allow(clippy::print_stderr)]
    pub fn tick(&mut self, dt: f64) {
        if self.state != ControllerState::Running {
            return;
        }

        self.elapsed += dt;

        let Some(field) = self.field.as_mut() else {
            return;
        };

        if let Some(strategy) = self.strategy.as_deref() {
            field.advance(dt, self.elapsed, strategy);
        }

        if self.elapsed >= RUN_DURATION {
            let shortfall = field
                .particles()
                .iter()
                .filter(|particle| !particle.is_settled())
                .count();
            field.snap_to_targets();
            if !field.is_settled() {
                // Unreachable by construction; a hit means a strategy bug
                eprintln!("Warning: convergence shortfall after deadline snap ({shortfall} late particles)");
            }
        }

        if field.is_settled() {
            self.state = ControllerState::Settled;
        }
    }

    /// Discard any in-progress run and return to `Idle`
    ///
    /// No partial state is observable afterwards.
    pub fn reset(&mut self) {
        self.discard_run();
    }

    /// Select the motion strategy for the next run
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` outside `Idle` or `Settled`;
    /// mid-run switches would leave particles with undefined kinematics.
    pub fn set_strategy(&mut self, kind: StrategyKind) -> Result<()> {
        match self.state {
            ControllerState::Idle | ControllerState::Settled => {
                self.strategy_kind = kind;
                Ok(())
            }
            other => Err(TransformError::InvalidStateTransition {
                state: other.label(),
                request: "set strategy",
            }),
        }
    }

    /// Cycle to the next motion strategy and return it
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` outside `Idle` or `Settled`.
    pub fn cycle_strategy(&mut self) -> Result<StrategyKind> {
        let next = self.strategy_kind.next();
        self.set_strategy(next)?;
        Ok(next)
    }

    /// Currently selected strategy
    pub const fn strategy_kind(&self) -> StrategyKind {
        self.strategy_kind
    }

    /// Current run state
    pub const fn state(&self) -> ControllerState {
        self.state
    }

    /// Elapsed simulated time of the current run
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Normalized run progress in `[0, 1]`
    pub const fn progress(&self) -> f64 {
        (self.elapsed / RUN_DURATION).clamp(0.0, 1.0)
    }

    /// Whether the current run has settled
    pub const fn is_settled(&self) -> bool {
        matches!(self.state, ControllerState::Settled)
    }

    /// The active field, when a run exists
    pub const fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    /// Read-only render snapshot: ordered (position, color) samples plus the
    /// state tag; `None` when no run exists
    pub fn frame(&self) -> Option<Frame> {
        let progress = self.progress();
        self.field.as_ref().map(|field| Frame {
            particles: field
                .particles()
                .iter()
                .map(|particle| FrameParticle {
                    position: particle.position,
                    color: particle.color(progress),
                })
                .collect(),
            state: self.state,
        })
    }

    fn discard_run(&mut self) {
        self.state = ControllerState::Idle;
        self.field = None;
        self.strategy = None;
        self.elapsed = 0.0;
    }
}
