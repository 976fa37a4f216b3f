//! Core types for the Kaluza multi-physics simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! physical-constants value type threaded through every solver call and the
//! error kinds shared by the numerical engines.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;

pub use constants::PhysicalConstants;
pub use error::SolverError;
