//! Periodic central-difference operators.
//!
//! All operators read a frozen input and write a freshly allocated output
//! (Jacobi discipline: no cell ever sees a partially-updated neighbour).
//! Index arithmetic wraps modulo the axis extent, so there are no edge
//! special cases.
//!
//! The Laplacian uses the standard second-order central stencil,
//! `1/spacing²` per axis, with the per-axis sum divided by the axis count.
//! The biharmonic operator is exactly two Laplacian applications — no fused
//! fourth-order stencil.

use crate::complex::ComplexGrid;
use crate::scalar::ScalarGrid;
use crate::vector::VectorGrid;
use num_complex::Complex64;

/// Discrete Laplacian of a real field.
///
/// `out[i] = Σ_axes (f[i+1] − 2f[i] + f[i−1]) / spacing² / ndim`
pub fn laplacian(grid: &ScalarGrid) -> ScalarGrid {
    let shape = grid.shape().clone();
    let inv_h2 = 1.0 / (shape.spacing() * shape.spacing());
    let norm = 1.0 / shape.ndim() as f64;
    let src = grid.as_slice();

    let mut out = ScalarGrid::zeros(shape.clone());
    for i in 0..src.len() {
        let mut sum = 0.0;
        for axis in 0..shape.ndim() {
            let fwd = src[shape.shifted(i, axis, 1)];
            let back = src[shape.shifted(i, axis, -1)];
            sum += (fwd - 2.0 * src[i] + back) * inv_h2;
        }
        out.set(i, sum * norm);
    }
    out
}

/// Discrete Laplacian of a complex field, applied per component.
pub fn laplacian_complex(grid: &ComplexGrid) -> ComplexGrid {
    let shape = grid.shape().clone();
    let inv_h2 = 1.0 / (shape.spacing() * shape.spacing());
    let norm = 1.0 / shape.ndim() as f64;
    let src = grid.as_slice();

    let mut out = ComplexGrid::zeros(shape.clone());
    for i in 0..src.len() {
        let mut sum = Complex64::new(0.0, 0.0);
        for axis in 0..shape.ndim() {
            let fwd = src[shape.shifted(i, axis, 1)];
            let back = src[shape.shifted(i, axis, -1)];
            sum += (fwd - 2.0 * src[i] + back) * inv_h2;
        }
        out.set(i, sum * norm);
    }
    out
}

/// Discrete biharmonic operator: two Laplacian applications.
pub fn biharmonic(grid: &ScalarGrid) -> ScalarGrid {
    laplacian(&laplacian(grid))
}

/// Discrete biharmonic operator on a complex field.
pub fn biharmonic_complex(grid: &ComplexGrid) -> ComplexGrid {
    laplacian_complex(&laplacian_complex(grid))
}

/// Central-difference gradient of a real field.
///
/// Returns a vector field with one component per axis:
/// `out[i][a] = (f[i+1_a] − f[i−1_a]) / (2·spacing)`.
pub fn gradient(grid: &ScalarGrid) -> VectorGrid {
    let shape = grid.shape().clone();
    let inv_2h = 1.0 / (2.0 * shape.spacing());
    let src = grid.as_slice();
    let ndim = shape.ndim();

    let mut out = VectorGrid::zeros(shape.clone(), ndim);
    for i in 0..src.len() {
        for axis in 0..ndim {
            let fwd = src[shape.shifted(i, axis, 1)];
            let back = src[shape.shifted(i, axis, -1)];
            out.set(i, axis, (fwd - back) * inv_2h);
        }
    }
    out
}

/// Central-difference partial derivative of a complex field along one axis.
///
/// Used by the field-energy and momentum integrals, which need
/// `∂ψ/∂x_a` per axis rather than a packed vector field.
pub fn partial_complex(grid: &ComplexGrid, axis: usize) -> ComplexGrid {
    let shape = grid.shape().clone();
    let inv_2h = 1.0 / (2.0 * shape.spacing());
    let src = grid.as_slice();

    let mut out = ComplexGrid::zeros(shape.clone());
    for i in 0..src.len() {
        let fwd = src[shape.shifted(i, axis, 1)];
        let back = src[shape.shifted(i, axis, -1)];
        out.set(i, (fwd - back) * inv_2h);
    }
    out
}
