//! N-dimensional FFT built from per-axis 1-D passes.
//!
//! The transform gathers each lane along an axis into a contiguous buffer,
//! runs a planned 1-D FFT, and scatters the result back, repeating for every
//! axis. Forward transforms are unnormalized; the inverse is scaled by
//! `1/len` so that `inverse(forward(g)) == g`.

use crate::complex::ComplexGrid;
use crate::shape::GridShape;
use num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward N-dimensional FFT (unnormalized).
pub fn forward(grid: &ComplexGrid) -> ComplexGrid {
    transform(grid, false)
}

/// Inverse N-dimensional FFT, normalized by `1/len`.
pub fn inverse(grid: &ComplexGrid) -> ComplexGrid {
    let mut out = transform(grid, true);
    let scale = 1.0 / out.shape().len() as f64;
    out.scale(scale);
    out
}

fn transform(grid: &ComplexGrid, inverse: bool) -> ComplexGrid {
    let shape = grid.shape().clone();
    let mut data = grid.as_slice().to_vec();
    let mut planner = FftPlanner::<f64>::new();

    for axis in 0..shape.ndim() {
        let n = shape.extent(axis);
        let stride = shape.stride(axis);
        let fft = if inverse {
            planner.plan_fft_inverse(n)
        } else {
            planner.plan_fft_forward(n)
        };

        let mut lane = vec![Complex64::new(0.0, 0.0); n];
        for start in 0..data.len() {
            // A lane starts wherever the axis coordinate is zero.
            if shape.axis_coord(start, axis) != 0 {
                continue;
            }
            for (j, slot) in lane.iter_mut().enumerate() {
                *slot = data[start + j * stride];
            }
            fft.process(&mut lane);
            for (j, slot) in lane.iter().enumerate() {
                data[start + j * stride] = *slot;
            }
        }
    }

    let mut out = ComplexGrid::zeros(shape);
    out.as_mut_slice().copy_from_slice(&data);
    out
}

/// Angular wavenumber of frequency bin `index` along `axis`.
///
/// Bins above the Nyquist frequency map to negative wavenumbers, matching
/// the FFT's frequency layout: `k = 2π·f / (n·spacing)` with
/// `f ∈ [−n/2, n/2)`.
pub fn wavenumber(shape: &GridShape, axis: usize, index: usize) -> f64 {
    let n = shape.extent(axis);
    let f = if index <= n / 2 {
        index as f64
    } else {
        index as f64 - n as f64
    };
    2.0 * std::f64::consts::PI * f / (n as f64 * shape.spacing())
}

/// Squared wavenumber magnitude `|k|²` of the frequency-space cell at
/// `index`, summed over all axes.
pub fn squared_wavenumber(shape: &GridShape, index: usize) -> f64 {
    (0..shape.ndim())
        .map(|axis| {
            let k = wavenumber(shape, axis, shape.axis_coord(index, axis));
            k * k
        })
        .sum()
}
