//! The simulation orchestrator.
//!
//! [`Simulation`] owns the run history and drives the engines: pure field
//! runs step the quantum integrator and record snapshots; combined runs
//! advance the compactification lattice, re-derive the effective
//! gravitational coupling from the live radii, and thread it into the
//! Poisson solver — every step, not once.

use kaluza_core::PhysicalConstants;
use kaluza_grid::ComplexGrid;
use kaluza_solvers::{
    effective_potential, CompactDimension, CompactLattice, EffectiveCoupling,
    HypergravitySolver, Observables, QuantumField, RadiusHistory,
};

use crate::config::{CombinedRunConfig, ConfigError, FieldRunConfig, Initialization};
use crate::history::{RunHistory, Snapshot};
use crate::sink::{DimensionCurves, FieldFrame, PotentialCurve, VectorFrame, VisualSink};

/// Observable spatial dimensions every combined run projects down to.
const OBSERVABLE_DIMS: usize = 3;

/// Steps between visualization pushes in a combined run.
const VISUAL_INTERVAL: usize = 10;

/// Sample count for the effective-potential curve.
const POTENTIAL_SAMPLES: usize = 64;

// ── Results ────────────────────────────────────────────────────────

/// Outcome of a pure quantum-field run.
#[derive(Clone, Debug)]
pub struct FieldRunResult {
    /// Energy after every step, in step order.
    pub energy_history: Vec<f64>,
    /// Observables of the final state.
    pub final_observables: Observables,
    /// The final field.
    pub final_field: ComplexGrid,
}

/// Outcome of a combined compactification + hypergravity run.
#[derive(Clone, Debug)]
pub struct CombinedRunResult {
    /// Full radius evolution, indexed by step then dimension.
    pub radius_history: RadiusHistory,
    /// Final compact-dimension states.
    pub dimensions: Vec<CompactDimension>,
    /// Effective coupling at the final step.
    pub coupling: EffectiveCoupling,
    /// Gravitational field energy after every step.
    pub energy_history: Vec<f64>,
}

// ── Simulation ─────────────────────────────────────────────────────

/// Composes the three engines and owns the append-only run history.
///
/// The history is cleared at the start of each run and grows monotonically
/// until the run ends; it is the only mutable state that survives a run.
#[derive(Default)]
pub struct Simulation {
    history: RunHistory,
}

impl Simulation {
    /// A fresh orchestrator with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots recorded by the most recent run.
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Run the quantum-field engine for `config.steps` steps.
    ///
    /// Initializes the field per `config.initialization`, evolves it step
    /// by step accumulating the energy history, and every
    /// `record_interval`-th step snapshots the field plus its observables
    /// into the history and forwards a frame to `sink`.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if validation rejects the configuration. The
    /// simulation loop itself cannot fail: the field is initialized before
    /// the first step.
    pub fn run_quantum_field(
        &mut self,
        config: &FieldRunConfig,
        sink: &dyn VisualSink,
    ) -> Result<FieldRunResult, ConfigError> {
        let initialization = config.validate()?;

        let mut field = QuantumField::builder()
            .shape(config.shape.clone())
            .constants(config.constants)
            .dt(config.dt)
            .mass(config.mass)
            .nonlinearity(config.nonlinearity)
            .build()
            .expect("parameters validated");

        match &initialization {
            Initialization::Gaussian {
                amplitude,
                width,
                center,
            } => field.initialize_gaussian(*amplitude, *width, center),
            Initialization::Soliton { amplitude, radius } => {
                field.initialize_soliton(*amplitude, *radius)
            }
        }

        self.history.clear();
        let mut energy_history = Vec::with_capacity(config.steps);

        for step in 1..=config.steps {
            let energy = field.evolve_step()?;
            energy_history.push(energy);

            if step % config.record_interval == 0 {
                let time = step as f64 * config.dt;
                let observables = field.expectation_values();
                self.history.push(Snapshot {
                    step,
                    time,
                    energy,
                    observables: Some(observables),
                    field: Some(field.current().clone()),
                    radii: Vec::new(),
                });
                sink.visualize_field(FieldFrame {
                    field: field.current().clone(),
                    time,
                    energy,
                    title: format!("quantum field, step {step}"),
                    colormap: "viridis".to_string(),
                    slice_plane: 0,
                });
            }
        }

        Ok(FieldRunResult {
            energy_history,
            final_observables: field.expectation_values(),
            final_field: field.current().clone(),
        })
    }

    /// Run the coupled compactification + hypergravity loop.
    ///
    /// Per step: advance the compactification lattice, recompute the
    /// effective coupling from the new radii, solve the Poisson equation
    /// with that coupling, and project the field to the observable axes.
    /// Every 10th step the dimension history, the projected field, and the
    /// effective-potential curve go to `sink`.
    ///
    /// The constants (and therefore the lifted coupling the feedback starts
    /// from) are derived fresh for this run's dimension count — nothing
    /// persists across runs.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if validation rejects the configuration.
    pub fn run_combined(
        &mut self,
        config: &CombinedRunConfig,
        sink: &dyn VisualSink,
    ) -> Result<CombinedRunResult, ConfigError> {
        let distribution = config.validate()?;
        let constants = config.constants.with_dimensions(config.dimensions);
        let extra = (config.dimensions - 4) as usize;

        let mut lattice = CompactLattice::new(extra, &[], config.seed, constants);
        let mut solver = HypergravitySolver::new(config.shape.clone());
        solver.initialize_density(&distribution, &constants);

        self.history.clear();
        let mut radius_history = RadiusHistory::default();
        let mut energy_history = Vec::with_capacity(config.steps);
        let mut coupling = lattice.effective_coupling();

        for step in 1..=config.steps {
            let step_history = lattice.evolve(1);
            radius_history.time.extend(step_history.time);
            radius_history.radii.extend(step_history.radii);

            coupling = lattice.effective_coupling();
            let energy = solver.solve_poisson(coupling.effective_gravity)?;
            let projected = solver.project(OBSERVABLE_DIMS)?;
            energy_history.push(energy);

            if step % config.record_interval == 0 {
                self.history.push(Snapshot {
                    step,
                    time: lattice.elapsed(),
                    energy,
                    observables: None,
                    field: None,
                    radii: lattice.radii(),
                });
            }

            if step % VISUAL_INTERVAL == 0 {
                sink.plot_dimension_evolution(DimensionCurves {
                    history: radius_history.clone(),
                    title: "compact dimension radii".to_string(),
                    y_log_scale: true,
                });
                sink.visualize_vectorfield(VectorFrame {
                    field: projected,
                    title: format!("projected gravitational field, step {step}"),
                    scale: 1.0,
                    stream_lines: false,
                });
                sink.plot_effective_potential(sample_potential_curve(&constants));
            }
        }

        Ok(CombinedRunResult {
            radius_history,
            dimensions: lattice.dimensions().to_vec(),
            coupling,
            energy_history,
        })
    }
}

/// Sample the closed-form effective potential on a log-spaced distance
/// grid spanning the regime switch.
fn sample_potential_curve(constants: &PhysicalConstants) -> PotentialCurve {
    let r_min = 0.1 * constants.planck_length;
    let r_max = 1000.0 * constants.planck_length;
    let log_step = (r_max / r_min).ln() / (POTENTIAL_SAMPLES - 1) as f64;
    let mut distances = Vec::with_capacity(POTENTIAL_SAMPLES);
    let mut values = Vec::with_capacity(POTENTIAL_SAMPLES);
    for i in 0..POTENTIAL_SAMPLES {
        let r = r_min * ((i as f64) * log_step).exp();
        distances.push(r);
        values.push(effective_potential(r, constants));
    }
    PotentialCurve {
        distances,
        values,
        title: "effective gravitational potential".to_string(),
        log_scale: true,
    }
}
