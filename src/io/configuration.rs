//! Engine constants and runtime configuration defaults

// Run lifecycle
/// Fixed total duration of a run in simulated time-units
pub const RUN_DURATION: f64 = 25.0;
/// Simulated time a particle spends in the launching phase
pub const LAUNCH_WINDOW: f64 = 1.0;
/// Run-progress point where strategies begin the guaranteed final approach
pub const FINAL_APPROACH_START: f64 = 0.9;
/// Distance at which a particle moves from transit to settling
pub const SETTLE_RADIUS: f64 = 2.0;
/// Distance tolerance for a particle to count as settled
pub const POSITION_EPSILON: f64 = 1e-3;

// Field seeding
/// Default particle cap for seeded fields
pub const DEFAULT_MAX_PARTICLES: usize = 1000;
/// Fixed seed for reproducible per-particle variation
pub const DEFAULT_SEED: u64 = 42;
/// Minimum launch scatter speed in pixels per time-unit
pub const LAUNCH_SPEED_MIN: f64 = 40.0;
/// Maximum launch scatter speed in pixels per time-unit
pub const LAUNCH_SPEED_MAX: f64 = 80.0;
// Less vertical scatter keeps the break-away readable
/// Vertical attenuation of the launch scatter
pub const LAUNCH_VERTICAL_SCALE: f64 = 0.4;
/// Upper bound of the per-particle stagger delay, as run progress
pub const STAGGER_MAX: f64 = 0.4;

// Falling sand
/// Downward acceleration in pixels per time-unit squared
pub const GRAVITY: f64 = 150.0;
/// Friction coefficient per time-unit
pub const FRICTION_COEFFICIENT: f64 = 0.05;
/// Exponential rate of the landing correction
pub const SAND_LATERAL_RATE: f64 = 3.0;
/// Terminal speed bounding long free falls
pub const SAND_TERMINAL_SPEED: f64 = 120.0;

// Wave
/// Peak lateral wave force
pub const WAVE_AMPLITUDE: f64 = 20.0;
/// Angular frequency of the wave in radians per time-unit
pub const WAVE_FREQUENCY: f64 = 0.8;
/// Phase offset between adjacent grid indices
pub const WAVE_PHASE_STEP: f64 = 0.35;
/// Velocity damping per time-unit; keeps dt = 1 stable
pub const WAVE_DAMPING: f64 = 0.6;
/// Restoring pull at the start of a run
pub const WAVE_PULL_BASE: f64 = 0.05;
/// Growth of the restoring pull toward the end of a run
pub const WAVE_PULL_GAIN: f64 = 0.6;

// Swirl
/// Initial spiral radius in pixels
pub const SWIRL_RADIUS: f64 = 50.0;
/// Spiral angular velocity in radians per time-unit
pub const SWIRL_ANGULAR_RATE: f64 = 2.0;
/// Exponential rate at which particles chase their orbit point
pub const SWIRL_CHASE_RATE: f64 = 4.0;

// Morph
/// Velocity damping for the morph break-away
pub const MORPH_DAMPING: f64 = 0.8;
/// Morph pull at the start of a run
pub const MORPH_PULL_BASE: f64 = 0.05;
/// Growth of the morph pull with eased progress
pub const MORPH_PULL_GAIN: f64 = 1.5;

// Output settings
/// Default output frame rate
pub const DEFAULT_FPS: u32 = 25;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_morph";
/// Radius of the rendered particle dot in pixels
pub const PARTICLE_DOT_RADIUS: i64 = 1;
