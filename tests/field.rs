//! Validates field seeding, the sampling stride and the particle lifecycle schedule

use pixelmorph::field::{ParticleField, Phase};
use pixelmorph::io::configuration::{DEFAULT_SEED, RUN_DURATION};
use pixelmorph::motion::{StrategyKind, Wave};
use pixelmorph::raster::{BLACK, Bitmap, WHITE};
use pixelmorph::TransformError;

fn gray(size: usize) -> Bitmap {
    Bitmap::new(size, size, [128, 128, 128])
}

fn checkerboard(size: usize) -> Bitmap {
    Bitmap::from_fn(size, size, |x, y| if (x + y) % 2 == 0 { BLACK } else { WHITE })
}

#[test]
fn test_seeding_initial_state() {
    let field = ParticleField::seed(&gray(4), &checkerboard(4), 1000, DEFAULT_SEED)
        .expect("seeding should succeed");

    assert_eq!(field.len(), 16);
    assert_eq!(field.grid_width(), 4);
    assert_eq!(field.grid_height(), 4);
    assert_eq!(field.stride(), 1);
    assert!(!field.is_settled());

    for (index, particle) in field.particles().iter().enumerate() {
        assert_eq!(particle.position, particle.origin);
        assert_eq!(particle.velocity, [0.0, 0.0]);
        assert_eq!(particle.phase, Phase::Idle);
        assert_eq!(particle.grid_index, index);
        assert!((particle.age_in_run).abs() < f64::EPSILON);
        assert_eq!(particle.origin_color, [128, 128, 128]);
    }
}

#[test]
fn test_uniform_stride_respects_particle_cap() {
    let field = ParticleField::seed(&gray(100), &gray(100), 1000, DEFAULT_SEED)
        .expect("seeding should succeed");

    // Stride 4 gives a 25x25 grid; stride 3 would exceed the cap
    assert_eq!(field.stride(), 4);
    assert_eq!(field.len(), 625);
    assert!(field.len() <= 1000);

    // Grid cells sample pixels at uniform stride offsets
    let second = field.particles().get(1).expect("particle exists");
    assert_eq!(second.origin, [4.0, 0.0]);
}

#[test]
fn test_seeding_rejects_dimension_mismatch() {
    let error = ParticleField::seed(&gray(4), &gray(8), 1000, DEFAULT_SEED)
        .expect_err("mismatched pair must fail");
    assert!(matches!(error, TransformError::MalformedBitmap { .. }));
}

#[test]
fn test_seeding_rejects_zero_size_bitmap() {
    let empty = Bitmap::new(0, 0, WHITE);
    let error = ParticleField::seed(&empty, &empty, 1000, DEFAULT_SEED)
        .expect_err("zero-size pair must fail");
    assert!(matches!(error, TransformError::MalformedBitmap { .. }));
}

#[test]
fn test_seeding_rejects_zero_particle_cap() {
    let error = ParticleField::seed(&gray(4), &gray(4), 0, DEFAULT_SEED)
        .expect_err("zero cap must fail");
    assert!(matches!(error, TransformError::MalformedBitmap { .. }));
}

#[test]
fn test_seeding_is_deterministic_per_seed() {
    let a = ParticleField::seed(&gray(8), &checkerboard(8), 1000, 7).expect("seed");
    let b = ParticleField::seed(&gray(8), &checkerboard(8), 1000, 7).expect("seed");
    let c = ParticleField::seed(&gray(8), &checkerboard(8), 1000, 8).expect("seed");

    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.impulse, pb.impulse);
        assert!((pa.stagger - pb.stagger).abs() < f64::EPSILON);
    }

    let same_impulses = a
        .particles()
        .iter()
        .zip(c.particles())
        .all(|(pa, pc)| pa.impulse == pc.impulse);
    assert!(!same_impulses, "different seeds should scatter differently");
}

#[test]
fn test_first_advance_launches_particles() {
    let mut field =
        ParticleField::seed(&gray(4), &checkerboard(4), 1000, DEFAULT_SEED).expect("seed");
    let strategy = StrategyKind::Wave.instantiate([4.0, 4.0]);

    field.advance(0.1, 0.1, strategy.as_ref());

    for particle in field.particles() {
        assert_eq!(particle.phase, Phase::Launching);
        assert!((particle.age_in_run - 0.1).abs() < 1e-12);
    }
}

#[test]
fn test_snap_to_targets_settles_everything() {
    let mut field =
        ParticleField::seed(&gray(4), &checkerboard(4), 1000, DEFAULT_SEED).expect("seed");
    let strategy = Wave::default();

    // Partway through a run, then force the hard deadline
    for tick in 1..=5 {
        field.advance(1.0, f64::from(tick), &strategy);
    }
    assert!(!field.is_settled());

    field.snap_to_targets();

    assert!(field.is_settled());
    for particle in field.particles() {
        assert_eq!(particle.position, particle.target);
        assert_eq!(particle.velocity, [0.0, 0.0]);
        assert_eq!(particle.phase, Phase::Settled);
    }
}

#[test]
fn test_settled_particles_are_frozen() {
    let mut field =
        ParticleField::seed(&gray(4), &checkerboard(4), 1000, DEFAULT_SEED).expect("seed");
    let strategy = Wave::default();

    field.snap_to_targets();
    field.advance(1.0, RUN_DURATION / 2.0, &strategy);

    for particle in field.particles() {
        assert_eq!(particle.position, particle.target);
        assert_eq!(particle.phase, Phase::Settled);
    }
}
