//! Criterion micro-benchmarks for the operator and solver hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kaluza_core::PhysicalConstants;
use kaluza_grid::ops::{biharmonic_complex, laplacian};
use kaluza_grid::{fft, ComplexGrid, GridShape, ScalarGrid};
use kaluza_solvers::{CompactLattice, HypergravitySolver, MassDistribution, QuantumField};
use num_complex::Complex64;

/// Benchmark: scalar Laplacian over a 64³ lattice.
fn bench_laplacian_64_cubed(c: &mut Criterion) {
    let shape = GridShape::cubic(64, 3, 1.0).unwrap();
    let grid = ScalarGrid::from_fn(shape, |coord| (coord[0] + coord[1] * coord[2]) as f64);

    c.bench_function("laplacian_64_cubed", |b| {
        b.iter(|| {
            let out = laplacian(black_box(&grid));
            black_box(&out);
        });
    });
}

/// Benchmark: biharmonic of a complex field on a 32³ lattice.
fn bench_biharmonic_32_cubed(c: &mut Criterion) {
    let shape = GridShape::cubic(32, 3, 1.0).unwrap();
    let grid = ComplexGrid::from_fn(shape, |coord| {
        Complex64::new(coord[0] as f64, coord[1] as f64)
    });

    c.bench_function("biharmonic_complex_32_cubed", |b| {
        b.iter(|| {
            let out = biharmonic_complex(black_box(&grid));
            black_box(&out);
        });
    });
}

/// Benchmark: forward N-d FFT of a 64³ complex field.
fn bench_fft_forward_64_cubed(c: &mut Criterion) {
    let shape = GridShape::cubic(64, 3, 1.0).unwrap();
    let grid = ComplexGrid::from_fn(shape, |coord| {
        Complex64::new((coord[0] as f64 / 7.0).sin(), (coord[2] as f64 / 5.0).cos())
    });

    c.bench_function("fft_forward_64_cubed", |b| {
        b.iter(|| {
            let out = fft::forward(black_box(&grid));
            black_box(&out);
        });
    });
}

/// Benchmark: one quantum-field evolution step on a 32³ lattice.
fn bench_quantum_step_32_cubed(c: &mut Criterion) {
    let mut field = QuantumField::builder()
        .shape(GridShape::cubic(32, 3, 1.0).unwrap())
        .dt(1e-3)
        .nonlinearity(0.1)
        .build()
        .unwrap();
    field.initialize_gaussian(1.0, 4.0, &[16.0, 16.0, 16.0]);

    c.bench_function("quantum_step_32_cubed", |b| {
        b.iter(|| {
            let energy = field.evolve_step().unwrap();
            black_box(energy);
        });
    });
}

/// Benchmark: spectral Poisson solve on a 32³ lattice.
fn bench_poisson_solve_32_cubed(c: &mut Criterion) {
    let mut solver = HypergravitySolver::new(GridShape::cubic(32, 3, 1.0).unwrap());
    solver.initialize_density(
        &MassDistribution::Gaussian {
            mass: 1.0,
            width: 3.0,
            center: vec![16.0, 16.0, 16.0],
        },
        &PhysicalConstants::natural(),
    );

    c.bench_function("poisson_solve_32_cubed", |b| {
        b.iter(|| {
            let energy = solver.solve_poisson(black_box(1.0)).unwrap();
            black_box(energy);
        });
    });
}

/// Benchmark: 1000 compactification Euler steps for 6 extra dimensions.
fn bench_compact_evolve_1k(c: &mut Criterion) {
    c.bench_function("compact_evolve_1k_steps", |b| {
        b.iter(|| {
            let mut lattice =
                CompactLattice::new(6, &[], 42, PhysicalConstants::natural());
            let history = lattice.evolve(1000);
            black_box(&history);
        });
    });
}

criterion_group!(
    benches,
    bench_laplacian_64_cubed,
    bench_biharmonic_32_cubed,
    bench_fft_forward_64_cubed,
    bench_quantum_step_32_cubed,
    bench_poisson_solve_32_cubed,
    bench_compact_evolve_1k,
);
criterion_main!(benches);
