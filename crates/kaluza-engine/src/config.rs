//! Run configuration, validation, and error types.
//!
//! A run configuration is plain structured input accepted at the start of
//! each `run_*` call. `validate()` checks every structural invariant up
//! front and converts the string-keyed initialization and source
//! discriminators into their tagged forms; the orchestrator never sees an
//! unvalidated value.

use std::error::Error;
use std::fmt;

use kaluza_core::{PhysicalConstants, SolverError};
use kaluza_grid::GridShape;
use kaluza_solvers::{MassDistribution, SourceParams};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during run-configuration validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `steps` must be at least 1.
    ZeroSteps,
    /// `record_interval` must be at least 1.
    ZeroRecordInterval,
    /// Combined runs need at least the 4 ordinary spacetime dimensions.
    DimensionsTooSmall {
        /// The configured value.
        value: u32,
    },
    /// The field-initialization discriminator is not recognized.
    UnknownInitialization {
        /// The unrecognized kind string.
        kind: String,
    },
    /// A numeric parameter is non-finite or out of range.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A solver rejected part of the configuration (e.g. an unknown mass
    /// distribution kind).
    Solver(SolverError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSteps => write!(f, "steps must be at least 1"),
            Self::ZeroRecordInterval => write!(f, "record_interval must be at least 1"),
            Self::DimensionsTooSmall { value } => {
                write!(f, "dimensions must be at least 4, got {value}")
            }
            Self::UnknownInitialization { kind } => {
                write!(f, "unknown initialization kind '{kind}'")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::Solver(e) => write!(f, "solver: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Solver(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SolverError> for ConfigError {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

// ── Field-run configuration ────────────────────────────────────────

/// String-keyed field initialization as accepted from configuration input.
#[derive(Clone, Debug, PartialEq)]
pub struct InitializationConfig {
    /// `"gaussian"` or `"soliton"`.
    pub kind: String,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Gaussian width or soliton radius, in physical length.
    pub width: f64,
    /// Packet center in cell coordinates (gaussian only; missing axes
    /// default to 0).
    pub center: Vec<f64>,
}

/// A validated, tagged field initialization.
#[derive(Clone, Debug, PartialEq)]
pub enum Initialization {
    /// Gaussian wave packet.
    Gaussian {
        /// Peak amplitude.
        amplitude: f64,
        /// Gaussian width.
        width: f64,
        /// Center in cell coordinates.
        center: Vec<f64>,
    },
    /// Soliton profile about the lattice center.
    Soliton {
        /// Peak amplitude.
        amplitude: f64,
        /// Soliton radius.
        radius: f64,
    },
}

impl InitializationConfig {
    fn parse(&self) -> Result<Initialization, ConfigError> {
        match self.kind.as_str() {
            "gaussian" => Ok(Initialization::Gaussian {
                amplitude: self.amplitude,
                width: self.width,
                center: self.center.clone(),
            }),
            "soliton" => Ok(Initialization::Soliton {
                amplitude: self.amplitude,
                radius: self.width,
            }),
            other => Err(ConfigError::UnknownInitialization {
                kind: other.to_string(),
            }),
        }
    }
}

/// Configuration for a pure quantum-field run.
#[derive(Clone, Debug)]
pub struct FieldRunConfig {
    /// Number of integrator steps. Must be >= 1.
    pub steps: usize,
    /// Snapshot every `record_interval`-th step. Must be >= 1.
    pub record_interval: usize,
    /// Lattice for the field buffers.
    pub shape: GridShape,
    /// Integrator time step.
    pub dt: f64,
    /// Field mass.
    pub mass: f64,
    /// Cubic self-interaction strength.
    pub nonlinearity: f64,
    /// Constants threaded into the engine.
    pub constants: PhysicalConstants,
    /// Initial field profile.
    pub initialization: InitializationConfig,
}

impl FieldRunConfig {
    /// Validate all structural invariants and return the tagged
    /// initialization.
    pub fn validate(&self) -> Result<Initialization, ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.record_interval == 0 {
            return Err(ConfigError::ZeroRecordInterval);
        }
        if !(self.dt > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "dt",
                value: self.dt,
            });
        }
        if !(self.mass > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "mass",
                value: self.mass,
            });
        }
        if !self.nonlinearity.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "nonlinearity",
                value: self.nonlinearity,
            });
        }
        if !(self.initialization.width > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "initialization.width",
                value: self.initialization.width,
            });
        }
        self.initialization.parse()
    }
}

// ── Combined-run configuration ─────────────────────────────────────

/// String-keyed gravitational source as accepted from configuration input.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceConfig {
    /// `"point_mass"`, `"gaussian"`, or `"ring"`.
    pub kind: String,
    /// Raw profile parameters.
    pub params: SourceParams,
}

/// Configuration for a combined compactification + hypergravity run.
#[derive(Clone, Debug)]
pub struct CombinedRunConfig {
    /// Number of coupled steps. Must be >= 1.
    pub steps: usize,
    /// Snapshot every `record_interval`-th step. Must be >= 1.
    pub record_interval: usize,
    /// Total spacetime dimensions; extra dimensions are `dimensions − 4`.
    pub dimensions: u32,
    /// Mass distribution for the Poisson solve.
    pub source: SourceConfig,
    /// Lattice for the gravity solver (observable axes first, compact axes
    /// trailing).
    pub shape: GridShape,
    /// Seed for the equilibrium-radius draw.
    pub seed: u64,
    /// Constants for the run; the orchestrator re-derives them for
    /// `dimensions` at run start.
    pub constants: PhysicalConstants,
}

impl CombinedRunConfig {
    /// Validate all structural invariants and return the tagged mass
    /// distribution.
    pub fn validate(&self) -> Result<MassDistribution, ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.record_interval == 0 {
            return Err(ConfigError::ZeroRecordInterval);
        }
        if self.dimensions < 4 {
            return Err(ConfigError::DimensionsTooSmall {
                value: self.dimensions,
            });
        }
        let distribution = MassDistribution::parse(&self.source.kind, &self.source.params)?;
        Ok(distribution)
    }
}
