//! Nonlinear quantum scalar field engine.
//!
//! Evolves a complex field under the explicit three-level update
//!
//! ```text
//! next = 2·current − previous + dt²·(c²·∇²ψ − v·|ψ|²·ψ − (ħ²/2m)·∇⁴ψ)
//! ```
//!
//! applied independently to the real and imaginary components. The three
//! time levels live in a fixed ring of buffers addressed by an integer
//! cursor; rotation moves the cursor, never the buffers.
//!
//! The scheme is explicit and conditionally stable. The engine performs no
//! step-size control: the caller chooses `dt` and the lattice spacing to
//! satisfy the stability bound.

use kaluza_core::{PhysicalConstants, SolverError};
use kaluza_grid::ops::{biharmonic_complex, laplacian_complex, partial_complex};
use kaluza_grid::{ComplexGrid, GridShape};
use num_complex::Complex64;

/// Observables of the field state, each a full-lattice integral weighted by
/// the cell volume.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Observables {
    /// `∫|ψ|² dV`.
    pub total_probability: f64,
    /// Field energy: time-kinetic + gradient + quartic potential terms.
    pub energy: f64,
    /// Magnitude of the phase-gradient first moment `ħ·∫ Im(ψ*∇ψ) dV`.
    pub momentum: f64,
    /// z angular moment `ħ·∫ Im(ψ*(x·∂y − y·∂x)ψ) dV` (zero on 1-D
    /// lattices).
    pub angular_momentum: f64,
}

/// The quantum scalar field and its three-level integrator state.
///
/// State machine: uninitialized → initialized → evolving. Evolution is
/// undefined until one of the initializers has populated the current buffer
/// (and copied it into the previous one); [`evolve_step()`](Self::evolve_step)
/// reports [`SolverError::NotInitialized`] before that.
#[derive(Debug)]
pub struct QuantumField {
    /// Ring of three equally-shaped buffers: previous, current, next.
    buffers: [ComplexGrid; 3],
    /// Index of the `current` buffer; previous is `cursor − 1 (mod 3)`,
    /// next (scratch) is `cursor + 1 (mod 3)`.
    cursor: usize,
    shape: GridShape,
    constants: PhysicalConstants,
    dt: f64,
    mass: f64,
    nonlinearity: f64,
    initialized: bool,
}

/// Builder for [`QuantumField`].
///
/// Required field: `shape`.
pub struct QuantumFieldBuilder {
    shape: Option<GridShape>,
    constants: PhysicalConstants,
    dt: f64,
    mass: f64,
    nonlinearity: f64,
}

impl QuantumField {
    /// Create a new builder for configuring a `QuantumField`.
    pub fn builder() -> QuantumFieldBuilder {
        QuantumFieldBuilder {
            shape: None,
            constants: PhysicalConstants::natural(),
            dt: 1e-3,
            mass: 1.0,
            nonlinearity: 0.0,
        }
    }

    /// The lattice descriptor shared by all three buffers.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Whether an initializer has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The field at the current time level.
    pub fn current(&self) -> &ComplexGrid {
        &self.buffers[self.cursor]
    }

    fn previous(&self) -> &ComplexGrid {
        &self.buffers[(self.cursor + 2) % 3]
    }

    /// Populate the field with a Gaussian wave packet.
    ///
    /// `ψ = amplitude·exp(−r²/2w²)·(cos(r²/w) + i·sin(r²/w))` with `r` the
    /// physical distance from `center` (given in cell coordinates). The
    /// previous level is a copy of the current one, so the initial field is
    /// momentarily static.
    pub fn initialize_gaussian(&mut self, amplitude: f64, width: f64, center: &[f64]) {
        let shape = self.shape.clone();
        let spacing = shape.spacing();
        let cursor = self.cursor;
        self.buffers[cursor] = ComplexGrid::from_fn(shape, |coord| {
            let mut r_sq = 0.0;
            for (axis, &c) in coord.iter().enumerate() {
                let d = (c as f64 - center.get(axis).copied().unwrap_or(0.0)) * spacing;
                r_sq += d * d;
            }
            let envelope = amplitude * (-r_sq / (2.0 * width * width)).exp();
            let phase = r_sq / width;
            Complex64::new(envelope * phase.cos(), envelope * phase.sin())
        });
        self.buffers[(cursor + 2) % 3] = self.buffers[cursor].clone();
        self.initialized = true;
    }

    /// Populate the field with a soliton profile.
    ///
    /// `ψ = amplitude·sech(r/radius)·(cos θ + i·sin θ)` in cylindrical
    /// coordinates about the lattice center: `r` and `θ` come from the
    /// first two axes, so the profile is independent of any further axes.
    pub fn initialize_soliton(&mut self, amplitude: f64, radius: f64) {
        let shape = self.shape.clone();
        let spacing = shape.spacing();
        let cx = shape.extent(0) as f64 / 2.0;
        let cy = if shape.ndim() > 1 {
            shape.extent(1) as f64 / 2.0
        } else {
            0.0
        };
        let cursor = self.cursor;
        self.buffers[cursor] = ComplexGrid::from_fn(shape, |coord| {
            let x = (coord[0] as f64 - cx) * spacing;
            let y = if coord.len() > 1 {
                (coord[1] as f64 - cy) * spacing
            } else {
                0.0
            };
            let r = (x * x + y * y).sqrt();
            let theta = y.atan2(x);
            let sech = 1.0 / (r / radius).cosh();
            let envelope = amplitude * sech;
            Complex64::new(envelope * theta.cos(), envelope * theta.sin())
        });
        self.buffers[(cursor + 2) % 3] = self.buffers[cursor].clone();
        self.initialized = true;
    }

    /// Advance the field one time step and return the energy of the new
    /// current level.
    ///
    /// # Errors
    ///
    /// [`SolverError::NotInitialized`] if no initializer has run.
    pub fn evolve_step(&mut self) -> Result<f64, SolverError> {
        if !self.initialized {
            return Err(SolverError::NotInitialized {
                what: "quantum field",
            });
        }

        let c2 = self.constants.c * self.constants.c;
        let dispersion = self.constants.hbar * self.constants.hbar / (2.0 * self.mass);
        let dt2 = self.dt * self.dt;
        let v = self.nonlinearity;

        let lap = laplacian_complex(self.current());
        let bih = biharmonic_complex(self.current());

        // Compute the new level into a local buffer, then store it in the
        // scratch slot and advance the cursor.
        let cur = self.current().as_slice();
        let prev = self.previous().as_slice();
        let mut next = vec![Complex64::new(0.0, 0.0); cur.len()];
        for i in 0..cur.len() {
            let psi = cur[i];
            let nonlinear = psi * (v * psi.norm_sqr());
            let accel = lap.get(i) * c2 - nonlinear - bih.get(i) * dispersion;
            next[i] = psi * 2.0 - prev[i] + accel * dt2;
        }

        let scratch = (self.cursor + 1) % 3;
        self.buffers[scratch].as_mut_slice().copy_from_slice(&next);
        self.cursor = scratch;

        Ok(self.energy())
    }

    /// The field-energy functional of the current level.
    ///
    /// `E = ∫ [ ½|ψ_t|² + (c²/2)|∇ψ|² + (v/4)|ψ|⁴ ] dV`, with the time
    /// derivative approximated by `(current − previous)/dt`.
    pub fn energy(&self) -> f64 {
        let cur = self.current().as_slice();
        let prev = self.previous().as_slice();
        let c2 = self.constants.c * self.constants.c;
        let v = self.nonlinearity;
        let inv_dt = 1.0 / self.dt;

        let mut density = 0.0;
        for i in 0..cur.len() {
            let dt_psi = (cur[i] - prev[i]) * inv_dt;
            let n = cur[i].norm_sqr();
            density += 0.5 * dt_psi.norm_sqr() + 0.25 * v * n * n;
        }
        for axis in 0..self.shape.ndim() {
            let d = partial_complex(self.current(), axis);
            density += 0.5 * c2 * d.as_slice().iter().map(|z| z.norm_sqr()).sum::<f64>();
        }
        density * self.shape.cell_volume()
    }

    /// Compute the observable set of the current level.
    pub fn expectation_values(&self) -> Observables {
        let hbar = self.constants.hbar;
        let dv = self.shape.cell_volume();
        let cur = self.current().as_slice();

        // Momentum: per-axis phase-gradient first moments.
        let mut p_sq = 0.0;
        for axis in 0..self.shape.ndim() {
            let d = partial_complex(self.current(), axis);
            let p_axis: f64 = cur
                .iter()
                .zip(d.as_slice())
                .map(|(psi, dpsi)| (psi.conj() * dpsi).im)
                .sum::<f64>()
                * hbar
                * dv;
            p_sq += p_axis * p_axis;
        }

        // Angular momentum about the lattice center (first two axes).
        let angular_momentum = if self.shape.ndim() >= 2 {
            let spacing = self.shape.spacing();
            let cx = self.shape.extent(0) as f64 / 2.0;
            let cy = self.shape.extent(1) as f64 / 2.0;
            let dx = partial_complex(self.current(), 0);
            let dy = partial_complex(self.current(), 1);
            let mut l_z = 0.0;
            for i in 0..cur.len() {
                let x = (self.shape.axis_coord(i, 0) as f64 - cx) * spacing;
                let y = (self.shape.axis_coord(i, 1) as f64 - cy) * spacing;
                let orbital = dy.get(i) * x - dx.get(i) * y;
                l_z += (cur[i].conj() * orbital).im;
            }
            l_z * hbar * dv
        } else {
            0.0
        };

        Observables {
            total_probability: self.current().integrate_norm_sq(),
            energy: self.energy(),
            momentum: p_sq.sqrt(),
            angular_momentum,
        }
    }
}

impl QuantumFieldBuilder {
    /// Set the lattice the field lives on.
    pub fn shape(mut self, shape: GridShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Set the physical constants (default: natural units).
    pub fn constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Set the integrator time step (default: 1e-3). Must be > 0.
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the field mass (default: 1.0). Must be > 0.
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set the cubic self-interaction strength `v` (default: 0.0).
    pub fn nonlinearity(mut self, v: f64) -> Self {
        self.nonlinearity = v;
        self
    }

    /// Build the engine, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `shape` is not set, `dt` is not > 0, `mass` is not
    /// > 0, or `nonlinearity` is not finite.
    pub fn build(self) -> Result<QuantumField, String> {
        let shape = self.shape.ok_or_else(|| "shape is required".to_string())?;
        if !(self.dt > 0.0) {
            return Err(format!("dt must be finite and > 0, got {}", self.dt));
        }
        if !(self.mass > 0.0) {
            return Err(format!("mass must be finite and > 0, got {}", self.mass));
        }
        if !self.nonlinearity.is_finite() {
            return Err(format!(
                "nonlinearity must be finite, got {}",
                self.nonlinearity
            ));
        }

        let buffers = [
            ComplexGrid::zeros(shape.clone()),
            ComplexGrid::zeros(shape.clone()),
            ComplexGrid::zeros(shape.clone()),
        ];
        Ok(QuantumField {
            buffers,
            cursor: 1,
            shape,
            constants: self.constants,
            dt: self.dt,
            mass: self.mass,
            nonlinearity: self.nonlinearity,
            initialized: false,
        })
    }
}
