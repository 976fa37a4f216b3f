//! The three numerical engines of the Kaluza simulator.
//!
//! Each module owns one subsystem's state and exposes its named operations
//! directly:
//!
//! 1. [`quantum`] — the nonlinear quantum scalar field and its explicit
//!    three-level time integrator.
//! 2. [`gravity`] — the higher-dimensional spectral Poisson solver,
//!    dimensional projection, and the closed-form effective potential.
//! 3. [`compact`] — the extra-dimension radius ODE integrator and the
//!    effective-coupling derivation.
//!
//! The engines share no state. Coupling happens one level up, in the
//! orchestrator, which threads the compactification output into the gravity
//! solver's coupling constant each step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compact;
pub mod gravity;
pub mod quantum;

pub use compact::{
    CompactDimension, CompactLattice, CompactParams, EffectiveCoupling, RadiusHistory, Topology,
};
pub use gravity::{effective_potential, HypergravitySolver, MassDistribution, SourceParams};
pub use kaluza_core::SolverError;
pub use quantum::{Observables, QuantumField};
