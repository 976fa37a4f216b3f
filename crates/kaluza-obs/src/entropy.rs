//! Entropy of a compact-dimension configuration.

use kaluza_solvers::{CompactDimension, Topology};

/// Weight of a topology in the entropy sum: one winding direction for a
/// circle, two for a torus cross-section.
fn topology_factor(topology: Topology) -> f64 {
    match topology {
        Topology::Circular => 1.0,
        Topology::Toroidal => 2.0,
    }
}

/// Configuration entropy of a set of compact dimensions:
/// `Σᵢ topology_factor(i)·ln(2π·rᵢ)`.
///
/// Pure function of the dimension records — safe to call on live or
/// historical state.
pub fn dimensional_entropy(dims: &[CompactDimension]) -> f64 {
    dims.iter()
        .map(|d| topology_factor(d.topology) * (2.0 * std::f64::consts::PI * d.radius).ln())
        .sum()
}
