//! End-to-end spectral Poisson solve on the full production lattice.
//!
//! The unit tests use small lattices; this exercises the documented 64³
//! point-mass scenario.

use kaluza_core::PhysicalConstants;
use kaluza_grid::GridShape;
use kaluza_solvers::{HypergravitySolver, MassDistribution};

#[test]
fn point_mass_on_a_64_cubed_lattice() {
    let shape = GridShape::cubic(64, 3, 1.0).unwrap();
    let mut solver = HypergravitySolver::new(shape.clone());
    let constants = PhysicalConstants::natural();

    solver.initialize_density(
        &MassDistribution::PointMass {
            mass: 1.0,
            position: vec![32.0, 32.0, 32.0],
        },
        &constants,
    );
    let energy = solver.solve_poisson(constants.g).unwrap();
    assert!(energy > 0.0 && energy.is_finite());

    // The potential well is deepest at the mass.
    let deepest = solver.potential().argmin();
    assert_eq!(shape.coord(deepest).as_slice(), &[32, 32, 32]);

    // The field vanishes at the mass by symmetry; its magnitude rises
    // moving off the center up to the resolution limit, then falls off
    // with distance.
    let center = shape.flat(&[32, 32, 32]);
    assert!(solver.field().magnitude(center) < 1e-9);
    let near = shape.flat(&[33, 32, 32]);
    assert!(solver.field().magnitude(near) > solver.field().magnitude(center));
    let outer = shape.flat(&[40, 32, 32]);
    assert!(
        solver.field().magnitude(outer) < solver.field().magnitude(near),
        "inverse-square falloff beyond the first shell"
    );

    // Far from the source the potential is shallower than at the well.
    let far = shape.flat(&[1, 1, 1]);
    assert!(solver.potential().get(far) > solver.potential().get(center));
}
