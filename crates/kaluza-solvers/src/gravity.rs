//! Higher-dimensional gravitational (Poisson) solver.
//!
//! Solves the generalized Poisson equation `∇²Φ = G_eff·ρ` on a lattice
//! spanning the observable axes plus the compact extra axes, by dividing in
//! frequency space: forward-transform the density, divide by `−|k|²` with
//! the null mode removed, inverse-transform, and take the gradient.
//!
//! State machine: density unset → density set → potential solved. The
//! potential and field may only be computed after a density is initialized;
//! the gravitational field is always the gradient of the last-computed
//! potential.

use kaluza_core::{PhysicalConstants, SolverError};
use kaluza_grid::ops::gradient;
use kaluza_grid::{fft, ComplexGrid, GridShape, ScalarGrid, VectorGrid};
use num_complex::Complex64;

/// A validated mass distribution, one variant per source profile.
///
/// Parameters are physical: masses in the constants' mass unit, positions
/// and lengths in cell coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum MassDistribution {
    /// All mass in the single cell nearest `position`.
    PointMass {
        /// Total mass.
        mass: f64,
        /// Cell coordinates of the mass.
        position: Vec<f64>,
    },
    /// An isotropic Gaussian blob.
    Gaussian {
        /// Total mass.
        mass: f64,
        /// Gaussian width in cells.
        width: f64,
        /// Cell coordinates of the blob center.
        center: Vec<f64>,
    },
    /// A ring in the plane of the first two axes, centered on the lattice.
    Ring {
        /// Total mass.
        mass: f64,
        /// Ring radius in cells.
        radius: f64,
        /// Gaussian cross-section width in cells.
        thickness: f64,
    },
}

/// Raw source parameters as accepted from run configuration.
///
/// Each distribution kind reads only the fields it needs; the rest are
/// ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceParams {
    /// Total mass.
    pub mass: f64,
    /// Position / center in cell coordinates.
    pub position: Vec<f64>,
    /// Gaussian width in cells.
    pub width: f64,
    /// Ring radius in cells.
    pub radius: f64,
    /// Ring cross-section width in cells.
    pub thickness: f64,
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            position: Vec::new(),
            width: 1.0,
            radius: 1.0,
            thickness: 1.0,
        }
    }
}

impl MassDistribution {
    /// Map a discriminator string plus raw parameters to a validated
    /// distribution.
    ///
    /// # Errors
    ///
    /// [`SolverError::UnknownDistribution`] for any kind other than
    /// `"point_mass"`, `"gaussian"`, or `"ring"`.
    pub fn parse(kind: &str, params: &SourceParams) -> Result<Self, SolverError> {
        match kind {
            "point_mass" => Ok(Self::PointMass {
                mass: params.mass,
                position: params.position.clone(),
            }),
            "gaussian" => Ok(Self::Gaussian {
                mass: params.mass,
                width: params.width,
                center: params.position.clone(),
            }),
            "ring" => Ok(Self::Ring {
                mass: params.mass,
                radius: params.radius,
                thickness: params.thickness,
            }),
            other => Err(SolverError::UnknownDistribution {
                kind: other.to_string(),
            }),
        }
    }
}

/// The hypergravity solver state: density, potential, and field lattices.
pub struct HypergravitySolver {
    shape: GridShape,
    density: ScalarGrid,
    potential: ScalarGrid,
    field: VectorGrid,
    density_initialized: bool,
    potential_solved: bool,
}

impl HypergravitySolver {
    /// Create a solver over `shape` (observable axes first, compact axes
    /// trailing). All lattices start zeroed and uninitialized.
    pub fn new(shape: GridShape) -> Self {
        let ndim = shape.ndim();
        Self {
            density: ScalarGrid::zeros(shape.clone()),
            potential: ScalarGrid::zeros(shape.clone()),
            field: VectorGrid::zeros(shape.clone(), ndim),
            shape,
            density_initialized: false,
            potential_solved: false,
        }
    }

    /// The lattice descriptor.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Whether a mass density has been initialized.
    pub fn density_initialized(&self) -> bool {
        self.density_initialized
    }

    /// Whether a potential has been solved for the current density.
    pub fn potential_solved(&self) -> bool {
        self.potential_solved
    }

    /// The mass density lattice.
    pub fn density(&self) -> &ScalarGrid {
        &self.density
    }

    /// The last-computed potential.
    pub fn potential(&self) -> &ScalarGrid {
        &self.potential
    }

    /// The gravitational field (gradient of the last-computed potential).
    pub fn field(&self) -> &VectorGrid {
        &self.field
    }

    /// Fill the mass density from a distribution profile.
    ///
    /// The profile is normalized so the lattice integral equals the
    /// distribution's mass, then rescaled by the dimensional normalization
    /// constant `(2π)^{D/2} / Γ(D/2)` for `D` total spacetime dimensions.
    /// Invalidates any previously solved potential.
    pub fn initialize_density(
        &mut self,
        distribution: &MassDistribution,
        constants: &PhysicalConstants,
    ) {
        let shape = self.shape.clone();
        let mass = match distribution {
            MassDistribution::PointMass { mass, position } => {
                let mut density = ScalarGrid::zeros(shape.clone());
                let coord: Vec<usize> = (0..shape.ndim())
                    .map(|axis| {
                        let c = position.get(axis).copied().unwrap_or(0.0).round();
                        (c.max(0.0) as usize).min(shape.extent(axis) - 1)
                    })
                    .collect();
                density.set(shape.flat(&coord), 1.0);
                self.density = density;
                *mass
            }
            MassDistribution::Gaussian {
                mass,
                width,
                center,
            } => {
                let w2 = 2.0 * width * width;
                self.density = ScalarGrid::from_fn(shape.clone(), |coord| {
                    let mut r_sq = 0.0;
                    for (axis, &c) in coord.iter().enumerate() {
                        let d = c as f64 - center.get(axis).copied().unwrap_or(0.0);
                        r_sq += d * d;
                    }
                    (-r_sq / w2).exp()
                });
                *mass
            }
            MassDistribution::Ring {
                mass,
                radius,
                thickness,
            } => {
                let t2 = 2.0 * thickness * thickness;
                let cx = shape.extent(0) as f64 / 2.0;
                let cy = if shape.ndim() > 1 {
                    shape.extent(1) as f64 / 2.0
                } else {
                    0.0
                };
                self.density = ScalarGrid::from_fn(shape.clone(), |coord| {
                    let x = coord[0] as f64 - cx;
                    let y = if coord.len() > 1 {
                        coord[1] as f64 - cy
                    } else {
                        0.0
                    };
                    let in_plane = (x * x + y * y).sqrt() - radius;
                    // Off-plane axes fall off with the same cross-section.
                    let off_plane: f64 = coord
                        .iter()
                        .enumerate()
                        .skip(2)
                        .map(|(axis, &c)| {
                            let d = c as f64 - shape.extent(axis) as f64 / 2.0;
                            d * d
                        })
                        .sum();
                    (-(in_plane * in_plane + off_plane) / t2).exp()
                });
                *mass
            }
        };

        let total = self.density.integrate();
        if total > 0.0 {
            self.density.scale(mass / total);
        }
        self.density.scale(dimensional_normalization(
            constants.spacetime_dimensions,
        ));

        self.density_initialized = true;
        self.potential_solved = false;
    }

    /// Solve `∇²Φ = g_eff·ρ` spectrally and refresh the field as `∇Φ`.
    ///
    /// The zero-wavenumber mode is mapped to zero, removing the null mode
    /// of the periodic operator. Returns the field energy `½∫|∇Φ|² dV`.
    ///
    /// # Errors
    ///
    /// [`SolverError::NotInitialized`] if no density has been initialized.
    pub fn solve_poisson(&mut self, g_eff: f64) -> Result<f64, SolverError> {
        if !self.density_initialized {
            return Err(SolverError::NotInitialized {
                what: "mass density",
            });
        }

        let shape = self.shape.clone();
        let mut source = ComplexGrid::zeros(shape.clone());
        for (slot, &rho) in source.as_mut_slice().iter_mut().zip(self.density.as_slice()) {
            *slot = Complex64::new(g_eff * rho, 0.0);
        }

        let mut hat = fft::forward(&source);
        for i in 0..shape.len() {
            let k_sq = fft::squared_wavenumber(&shape, i);
            if k_sq == 0.0 {
                hat.set(i, Complex64::new(0.0, 0.0));
            } else {
                hat.set(i, -hat.get(i) / k_sq);
            }
        }

        let solved = fft::inverse(&hat);
        for (slot, value) in self
            .potential
            .as_mut_slice()
            .iter_mut()
            .zip(solved.as_slice())
        {
            *slot = value.re;
        }

        self.field = gradient(&self.potential);
        self.potential_solved = true;
        Ok(0.5 * self.field.integrate_norm_sq())
    }

    /// Project the gravitational field down to the observable axes.
    ///
    /// Averages the field over every trailing compact axis and keeps the
    /// first `observable_dims` vector components. The result has
    /// `observable_dims` axes — this is the one documented shape-changing
    /// reduction in the solver.
    ///
    /// # Errors
    ///
    /// [`SolverError::NotInitialized`] if no potential has been solved.
    pub fn project(&self, observable_dims: usize) -> Result<VectorGrid, SolverError> {
        if !self.potential_solved {
            return Err(SolverError::NotInitialized {
                what: "gravitational field",
            });
        }
        let observable_dims = observable_dims.clamp(1, self.shape.ndim());
        let out_shape = GridShape::new(
            &self.shape.extents()[..observable_dims],
            self.shape.spacing(),
        )
        .expect("observable axes are a non-empty prefix of a valid shape");

        let compact_cells: usize = self.shape.extents()[observable_dims..].iter().product();
        let mut out = VectorGrid::zeros(out_shape, observable_dims);
        // Trailing axes vary fastest in row-major order, so each observable
        // cell owns a contiguous block of compact cells.
        for cell in 0..self.shape.len() {
            let out_cell = cell / compact_cells;
            for comp in 0..observable_dims {
                let sum = out.get(out_cell, comp) + self.field.get(cell, comp);
                out.set(out_cell, comp, sum);
            }
        }
        let inv = 1.0 / compact_cells as f64;
        for v in out.as_mut_slice() {
            *v *= inv;
        }
        Ok(out)
    }
}

/// The dimensional normalization constant `(2π)^{D/2} / Γ(D/2)`.
pub(crate) fn dimensional_normalization(dimensions: u32) -> f64 {
    let d = dimensions as f64;
    (2.0 * std::f64::consts::PI).powf(d / 2.0) / gamma_half(dimensions)
}

/// Γ(d/2) for integer `d`, exact: `Γ(n) = (n−1)!` and
/// `Γ(n+½) = (2n)!·√π / (4ⁿ·n!)`.
fn gamma_half(d: u32) -> f64 {
    fn factorial(n: u32) -> f64 {
        (1..=n).map(f64::from).product()
    }
    if d % 2 == 0 {
        factorial(d / 2 - 1)
    } else {
        let n = (d - 1) / 2;
        factorial(2 * n) * std::f64::consts::PI.sqrt()
            / (4.0f64.powi(n as i32) * factorial(n))
    }
}

/// Closed-form effective gravitational potential at `distance`.
///
/// Below the compact stabilization radius `10·planck_length` the full
/// higher-dimensional power law applies; beyond it the compact dimensions
/// are integrated out and the law reverts to the 4-dimensional form scaled
/// by the compact volume factor. Pure function of the constants — usable
/// for plotting without running the solver.
pub fn effective_potential(distance: f64, constants: &PhysicalConstants) -> f64 {
    let r_c = constants.compact_radius();
    let total = constants.spacetime_dimensions as i32;
    let m = constants.extra_dimensions() as i32;
    if distance < r_c {
        constants.g_n_plus_m / distance.powi(total - 2)
    } else {
        constants.g * r_c.powi(m) / distance.powi(2)
    }
}
