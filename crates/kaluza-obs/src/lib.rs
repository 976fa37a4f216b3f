//! Analysis utilities over Kaluza simulation snapshots.
//!
//! Everything here operates on data produced by the engines — field
//! samples, compact-dimension records — with no back-reference into their
//! state: an analysis can never perturb a running simulation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod entropy;
pub mod solitons;
pub mod spectrum;

pub use entropy::dimensional_entropy;
pub use solitons::{detect_solitons, Soliton};
pub use spectrum::{spectral_analysis, Mode, SpectralReport};
