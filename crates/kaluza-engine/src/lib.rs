//! Simulation orchestration for Kaluza.
//!
//! [`Simulation`] composes the three numerical engines: pure quantum-field
//! runs ([`Simulation::run_quantum_field`]) and combined runs
//! ([`Simulation::run_combined`]) in which the compactification integrator's
//! effective gravity feeds the Poisson solver's coupling constant every
//! step.
//!
//! Configuration is plain structured input validated at the start of each
//! run; visualization happens through the fire-and-forget [`VisualSink`]
//! boundary, whose failures never reach the simulation loop.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod history;
pub mod orchestrator;
pub mod sink;

pub use config::{
    CombinedRunConfig, ConfigError, FieldRunConfig, Initialization, InitializationConfig,
    SourceConfig,
};
pub use history::{RunHistory, Snapshot};
pub use orchestrator::{CombinedRunResult, FieldRunResult, Simulation};
pub use sink::{
    ChannelSink, DimensionCurves, FieldFrame, NullSink, PotentialCurve, VectorFrame, VisualEvent,
    VisualSink,
};
