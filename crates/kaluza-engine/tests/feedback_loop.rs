//! Integration tests for the combined-run feedback loop.
//!
//! These exercise the full orchestrator path — compactification radii into
//! effective coupling into the Poisson solve — rather than the engines in
//! isolation.

use kaluza_core::PhysicalConstants;
use kaluza_engine::{
    ChannelSink, CombinedRunConfig, NullSink, Simulation, SourceConfig, VisualEvent,
};
use kaluza_grid::GridShape;
use kaluza_solvers::SourceParams;

fn combined_config(steps: usize, seed: u64) -> CombinedRunConfig {
    CombinedRunConfig {
        steps,
        record_interval: 1,
        dimensions: 6,
        source: SourceConfig {
            kind: "gaussian".to_string(),
            params: SourceParams {
                mass: 1.0,
                position: vec![4.0, 4.0, 4.0],
                width: 1.5,
                ..SourceParams::default()
            },
        },
        shape: GridShape::cubic(8, 3, 1.0).unwrap(),
        seed,
        constants: PhysicalConstants::natural(),
    }
}

#[test]
fn shrinking_radii_strengthen_the_field() {
    // Radii start at the default 10·ℓ_p and relax toward ~ℓ_p, so the
    // compact volume shrinks, the effective gravity grows, and the solved
    // field energy must grow with it.
    let mut sim = Simulation::new();
    let result = sim
        .run_combined(&combined_config(30, 7), &NullSink)
        .unwrap();

    let first = result.energy_history.first().copied().unwrap();
    let last = result.energy_history.last().copied().unwrap();
    assert!(
        last > first,
        "energy should grow as radii shrink: first {first}, last {last}"
    );

    // Radii relaxed but never below the Planck length.
    for radii in &result.radius_history.radii {
        for &r in radii {
            assert!(r >= 1.0);
        }
    }
    let start = result.radius_history.radii.first().unwrap()[0];
    let end = result.dimensions[0].radius;
    assert!(end < start, "radius should relax from {start}, got {end}");
}

#[test]
fn determinism_same_seed_same_trajectory() {
    let run = |seed: u64| {
        let mut sim = Simulation::new();
        sim.run_combined(&combined_config(10, seed), &NullSink)
            .unwrap()
    };
    let a = run(42);
    let b = run(42);
    assert_eq!(a.radius_history.radii, b.radius_history.radii);
    assert_eq!(a.energy_history, b.energy_history);

    let c = run(43);
    // A different seed draws different equilibria.
    assert_ne!(a.radius_history.radii, c.radius_history.radii);
}

#[test]
fn sink_receives_all_three_payloads_every_tenth_step() {
    let (sink, rx) = ChannelSink::bounded(64);
    let mut sim = Simulation::new();
    sim.run_combined(&combined_config(20, 1), &sink).unwrap();

    let events: Vec<VisualEvent> = rx.try_iter().collect();
    // 2 visualization steps (10 and 20) × 3 payloads.
    assert_eq!(events.len(), 6);
    assert!(matches!(events[0], VisualEvent::Dimensions(_)));
    assert!(matches!(events[1], VisualEvent::VectorField(_)));
    assert!(matches!(events[2], VisualEvent::Potential(_)));

    match &events[0] {
        VisualEvent::Dimensions(curves) => {
            // History up to step 10 at the first push.
            assert_eq!(curves.history.radii.len(), 10);
        }
        other => panic!("expected Dimensions, got {other:?}"),
    }
}

#[test]
fn dropped_receiver_never_aborts_the_run() {
    let (sink, rx) = ChannelSink::bounded(1);
    drop(rx);
    let mut sim = Simulation::new();
    let result = sim.run_combined(&combined_config(20, 1), &sink).unwrap();
    assert_eq!(result.energy_history.len(), 20);
}
