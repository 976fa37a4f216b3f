//! Kaluza: a toy multi-physics spacetime simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Kaluza sub-crates. For most users, adding `kaluza` as a single
//! dependency is sufficient.
//!
//! Three numerically coupled subsystems make up the simulator: a nonlinear
//! quantum scalar field on a periodic lattice, a higher-dimensional
//! spectral Poisson solver, and an ODE integrator stabilizing the radii of
//! compact extra dimensions. In a combined run the compact radii determine
//! an effective gravitational coupling that feeds the Poisson solver every
//! step.
//!
//! # Quick start
//!
//! ```rust
//! use kaluza::prelude::*;
//!
//! let mut sim = Simulation::new();
//! let config = FieldRunConfig {
//!     steps: 10,
//!     record_interval: 5,
//!     shape: GridShape::cubic(16, 3, 1.0).unwrap(),
//!     dt: 1e-3,
//!     mass: 1.0,
//!     nonlinearity: 0.0,
//!     constants: PhysicalConstants::natural(),
//!     initialization: InitializationConfig {
//!         kind: "gaussian".to_string(),
//!         amplitude: 1.0,
//!         width: 3.0,
//!         center: vec![8.0, 8.0, 8.0],
//!     },
//! };
//! let result = sim.run_quantum_field(&config, &NullSink).unwrap();
//! assert_eq!(result.energy_history.len(), 10);
//! assert!(result.final_observables.total_probability > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kaluza-core` | Physical constants, shared error types |
//! | [`grid`] | `kaluza-grid` | Lattices, operators, FFT |
//! | [`solvers`] | `kaluza-solvers` | The three numerical engines |
//! | [`engine`] | `kaluza-engine` | Run configuration and orchestration |
//! | [`obs`] | `kaluza-obs` | Spectral analysis, soliton detection, entropy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Physical constants and shared error types (`kaluza-core`).
pub use kaluza_core as types;

/// Lattices, finite-difference operators, and the FFT (`kaluza-grid`).
pub use kaluza_grid as grid;

/// The quantum-field, hypergravity, and compactification engines
/// (`kaluza-solvers`).
pub use kaluza_solvers as solvers;

/// Run configuration, orchestration, history, and the visualization
/// boundary (`kaluza-engine`).
pub use kaluza_engine as engine;

/// Analysis utilities over snapshots (`kaluza-obs`).
pub use kaluza_obs as obs;

/// Common imports for typical Kaluza usage.
///
/// ```rust
/// use kaluza::prelude::*;
/// ```
pub mod prelude {
    // Constants and errors
    pub use kaluza_core::{PhysicalConstants, SolverError};

    // Lattices and fields
    pub use kaluza_grid::{ComplexGrid, GridError, GridShape, ScalarGrid, VectorGrid};

    // Engines
    pub use kaluza_solvers::{
        CompactDimension, CompactLattice, EffectiveCoupling, HypergravitySolver,
        MassDistribution, Observables, QuantumField, RadiusHistory, SourceParams, Topology,
    };

    // Orchestration
    pub use kaluza_engine::{
        ChannelSink, CombinedRunConfig, ConfigError, FieldRunConfig, InitializationConfig,
        NullSink, RunHistory, Simulation, Snapshot, SourceConfig, VisualSink,
    };

    // Analysis
    pub use kaluza_obs::{detect_solitons, dimensional_entropy, spectral_analysis};
}
