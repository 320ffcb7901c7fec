//! Validates the convergence contract and determinism of every motion strategy

use pixelmorph::field::ParticleField;
use pixelmorph::io::configuration::{DEFAULT_SEED, RUN_DURATION};
use pixelmorph::motion::{MotionStrategy, StrategyKind};
use pixelmorph::raster::{BLACK, Bitmap, WHITE};

const ALL_STRATEGIES: [StrategyKind; 4] = [
    StrategyKind::Wave,
    StrategyKind::FallingSand,
    StrategyKind::Swirl,
    StrategyKind::Morph,
];

fn seeded_field(size: usize) -> ParticleField {
    let source = Bitmap::new(size, size, [90, 90, 90]);
    let target = Bitmap::from_fn(size, size, |x, y| if (x + y) % 2 == 0 { BLACK } else { WHITE });
    ParticleField::seed(&source, &target, 1000, DEFAULT_SEED).expect("seeding should succeed")
}

fn drive(field: &mut ParticleField, strategy: &dyn MotionStrategy, dt: f64, total: f64) {
    let ticks = (total / dt).round() as usize;
    for tick in 1..=ticks {
        field.advance(dt, dt * tick as f64, strategy);
    }
}

#[test]
fn test_every_strategy_converges_by_run_end() {
    for kind in ALL_STRATEGIES {
        let mut field = seeded_field(8);
        let strategy = kind.instantiate([8.0, 8.0]);

        drive(&mut field, strategy.as_ref(), 0.5, RUN_DURATION);

        assert!(
            field.is_settled(),
            "{} field not settled after full run",
            strategy.name()
        );
        for particle in field.particles() {
            assert_eq!(
                particle.position,
                particle.target,
                "{} particle {} off target",
                strategy.name(),
                particle.grid_index
            );
        }
    }
}

#[test]
fn test_convergence_holds_for_coarse_ticks() {
    // dt = 1 is the coarsest tick the render loop uses
    for kind in ALL_STRATEGIES {
        let mut field = seeded_field(4);
        let strategy = kind.instantiate([4.0, 4.0]);

        drive(&mut field, strategy.as_ref(), 1.0, RUN_DURATION);

        assert!(field.is_settled(), "{} diverged at dt = 1", strategy.name());
    }
}

#[test]
fn test_strategies_keep_positions_finite_mid_run() {
    for kind in ALL_STRATEGIES {
        let mut field = seeded_field(8);
        let strategy = kind.instantiate([8.0, 8.0]);

        drive(&mut field, strategy.as_ref(), 0.25, RUN_DURATION / 2.0);

        for particle in field.particles() {
            let [x, y] = particle.position;
            assert!(
                x.is_finite() && y.is_finite(),
                "{} produced a non-finite position",
                strategy.name()
            );
        }
    }
}

#[test]
fn test_identical_runs_follow_identical_trajectories() {
    for kind in ALL_STRATEGIES {
        let mut a = seeded_field(8);
        let mut b = seeded_field(8);
        let strategy = kind.instantiate([8.0, 8.0]);

        drive(&mut a, strategy.as_ref(), 0.5, RUN_DURATION / 2.0);
        drive(&mut b, strategy.as_ref(), 0.5, RUN_DURATION / 2.0);

        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position, pb.position, "{} not deterministic", strategy.name());
        }
    }
}

#[test]
fn test_wave_neighbors_are_phase_offset() {
    // Adjacent grid indices must not move in lockstep
    let mut field = seeded_field(8);
    let strategy = StrategyKind::Wave.instantiate([8.0, 8.0]);

    drive(&mut field, strategy.as_ref(), 0.5, 5.0);

    let first = field.particles().first().expect("particle exists");
    let second = field.particles().get(1).expect("particle exists");
    let [fx, _] = first.position;
    let [fox, _] = first.origin;
    let [sx, _] = second.position;
    let [sox, _] = second.origin;
    assert!(
        ((fx - fox) - (sx - sox)).abs() > 1e-9,
        "neighboring wave particles moved identically"
    );
}

#[test]
fn test_strategy_cycle_order_is_closed() {
    let mut kind = StrategyKind::Wave;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(kind.label());
        kind = kind.next();
    }
    assert_eq!(kind, StrategyKind::Wave);
    assert_eq!(seen, ["wave", "sand", "swirl", "morph"]);
}
