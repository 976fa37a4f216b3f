//! Error types shared by the Kaluza numerical engines.
//!
//! All variants represent caller misuse of a solver's state machine and are
//! unrecoverable for the current call: the solver returns immediately and
//! performs no retries. Numerical instability is deliberately not an error —
//! the explicit integrators are conditionally stable and step-size choice is
//! a caller concern.

use std::error::Error;
use std::fmt;

/// Errors from the quantum-field, hypergravity, and compactification engines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverError {
    /// An operation was invoked before its prerequisite state exists
    /// (evolve before field initialization, solve before density
    /// initialization, projection before a solve).
    NotInitialized {
        /// The missing prerequisite, e.g. `"mass density"`.
        what: &'static str,
    },
    /// An initializer was handed an unsupported discriminator.
    UnknownDistribution {
        /// The unrecognized kind string.
        kind: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized { what } => {
                write!(f, "{what} has not been initialized")
            }
            Self::UnknownDistribution { kind } => {
                write!(f, "unknown distribution kind '{kind}'")
            }
        }
    }
}

impl Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_state() {
        let err = SolverError::NotInitialized {
            what: "mass density",
        };
        assert_eq!(format!("{err}"), "mass density has not been initialized");
    }

    #[test]
    fn display_names_the_bad_kind() {
        let err = SolverError::UnknownDistribution {
            kind: "vortex".to_string(),
        };
        assert!(format!("{err}").contains("vortex"));
    }
}
