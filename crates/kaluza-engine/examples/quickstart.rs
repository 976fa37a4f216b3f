//! Kaluza quickstart — one field run and one combined run from scratch.
//!
//! Demonstrates:
//!   1. Building a field-run configuration (Gaussian packet, natural units)
//!   2. Stepping the quantum field and reading the energy history
//!   3. Running the combined compactification + hypergravity loop
//!   4. Draining visualization payloads from a ChannelSink
//!
//! Run with:
//!   cargo run --example quickstart

use kaluza_core::PhysicalConstants;
use kaluza_engine::{
    ChannelSink, CombinedRunConfig, FieldRunConfig, InitializationConfig, Simulation,
    SourceConfig, VisualEvent,
};
use kaluza_grid::GridShape;
use kaluza_solvers::SourceParams;

fn main() {
    let mut sim = Simulation::new();
    let (sink, rx) = ChannelSink::bounded(128);

    // ─── Quantum field run ──────────────────────────────────────

    let field_config = FieldRunConfig {
        steps: 100,
        record_interval: 20,
        shape: GridShape::cubic(32, 3, 1.0).unwrap(),
        dt: 1e-3,
        mass: 1.0,
        nonlinearity: 0.05,
        constants: PhysicalConstants::natural(),
        initialization: InitializationConfig {
            kind: "gaussian".to_string(),
            amplitude: 1.0,
            width: 4.0,
            center: vec![16.0, 16.0, 16.0],
        },
    };

    let field_result = sim
        .run_quantum_field(&field_config, &sink)
        .expect("field run");
    println!(
        "field run: {} steps, final energy {:.6}, total probability {:.6}",
        field_result.energy_history.len(),
        field_result.energy_history.last().unwrap(),
        field_result.final_observables.total_probability,
    );

    // ─── Combined run ───────────────────────────────────────────

    let combined_config = CombinedRunConfig {
        steps: 50,
        record_interval: 5,
        dimensions: 7,
        source: SourceConfig {
            kind: "point_mass".to_string(),
            params: SourceParams {
                mass: 1.0,
                position: vec![8.0, 8.0, 8.0],
                ..SourceParams::default()
            },
        },
        shape: GridShape::cubic(16, 3, 1.0).unwrap(),
        seed: 42,
        constants: PhysicalConstants::natural(),
    };

    let combined = sim
        .run_combined(&combined_config, &sink)
        .expect("combined run");
    println!(
        "combined run: {} extra dimensions, effective gravity {:.3e}, fine structure {:.3e}",
        combined.dimensions.len(),
        combined.coupling.effective_gravity,
        combined.coupling.effective_fine_structure,
    );
    for dim in &combined.dimensions {
        println!(
            "  dimension {}: radius {:.4} ({:?}), equilibrium {:.4}",
            dim.index, dim.radius, dim.topology, dim.equilibrium_radius,
        );
    }

    let events: Vec<VisualEvent> = rx.try_iter().collect();
    println!("visualization payloads delivered: {}", events.len());
}
