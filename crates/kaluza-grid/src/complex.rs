//! Complex scalar fields on a [`GridShape`] lattice.

use crate::scalar::ScalarGrid;
use crate::shape::GridShape;
use num_complex::Complex64;

/// A complex-valued scalar field sampled on a fixed lattice.
///
/// Each cell holds a [`Complex64`] (a pair of `f64` components). All
/// differential operators act on the real and imaginary parts
/// independently.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexGrid {
    shape: GridShape,
    data: Vec<Complex64>,
}

impl ComplexGrid {
    /// A zero-filled field.
    pub fn zeros(shape: GridShape) -> Self {
        let len = shape.len();
        Self {
            shape,
            data: vec![Complex64::new(0.0, 0.0); len],
        }
    }

    /// A field populated by evaluating `f` at every cell coordinate.
    pub fn from_fn(shape: GridShape, mut f: impl FnMut(&[usize]) -> Complex64) -> Self {
        let mut grid = Self::zeros(shape);
        for i in 0..grid.data.len() {
            let coord = grid.shape.coord(i);
            grid.data[i] = f(&coord);
        }
        grid
    }

    /// The lattice descriptor.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Flat cell values.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Mutable flat cell values.
    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    /// Value at a flat index.
    pub fn get(&self, index: usize) -> Complex64 {
        self.data[index]
    }

    /// Set the value at a flat index.
    pub fn set(&mut self, index: usize, value: Complex64) {
        self.data[index] = value;
    }

    /// Multiply every cell by a real `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Squared magnitude per cell: `re² + im²`.
    pub fn norm_sq(&self) -> ScalarGrid {
        let mut out = ScalarGrid::zeros(self.shape.clone());
        for (o, v) in out.as_mut_slice().iter_mut().zip(&self.data) {
            *o = v.norm_sqr();
        }
        out
    }

    /// Magnitude per cell: `sqrt(re² + im²)`.
    pub fn amplitude(&self) -> ScalarGrid {
        let mut out = ScalarGrid::zeros(self.shape.clone());
        for (o, v) in out.as_mut_slice().iter_mut().zip(&self.data) {
            *o = v.norm();
        }
        out
    }

    /// Volume-weighted integral of the squared magnitude: `∫|ψ|² dV`.
    pub fn integrate_norm_sq(&self) -> f64 {
        let dv = self.shape.cell_volume();
        self.data.iter().map(|v| v.norm_sqr()).sum::<f64>() * dv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_sq_is_component_sum_of_squares() {
        let shape = GridShape::new(&[2], 1.0).unwrap();
        let mut grid = ComplexGrid::zeros(shape);
        grid.set(0, Complex64::new(3.0, 4.0));
        let n = grid.norm_sq();
        assert_eq!(n.get(0), 25.0);
        assert_eq!(n.get(1), 0.0);
        assert_eq!(grid.amplitude().get(0), 5.0);
    }

    #[test]
    fn integrate_norm_sq_weights_by_volume() {
        let shape = GridShape::new(&[4], 0.5).unwrap();
        let grid = ComplexGrid::from_fn(shape, |_| Complex64::new(1.0, 1.0));
        // 4 cells * |1+i|² = 2, * 0.5 spacing
        assert!((grid.integrate_norm_sq() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn scale_applies_to_both_components() {
        let shape = GridShape::new(&[1], 1.0).unwrap();
        let mut grid = ComplexGrid::from_fn(shape, |_| Complex64::new(1.0, -2.0));
        grid.scale(2.0);
        assert_eq!(grid.get(0), Complex64::new(2.0, -4.0));
    }
}
