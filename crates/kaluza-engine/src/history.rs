//! Append-only run history.

use kaluza_grid::ComplexGrid;
use kaluza_solvers::Observables;

/// One recorded point of a run.
///
/// Field runs carry the field sample and its observables; combined runs
/// carry the radius vector. The unused side stays empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Step index (1-based: the step that produced this state).
    pub step: usize,
    /// Simulation time at this step.
    pub time: f64,
    /// Energy returned by the step that produced this state.
    pub energy: f64,
    /// Field observables (field runs only).
    pub observables: Option<Observables>,
    /// Field sample (field runs only).
    pub field: Option<ComplexGrid>,
    /// Compact-dimension radii (combined runs only).
    pub radii: Vec<f64>,
}

/// Append-only ordered sequence of snapshots.
///
/// Produced by the orchestrator only: cleared at the start of each run and
/// grown monotonically until the run ends. Consumed by analysis and
/// visualization collaborators.
#[derive(Clone, Debug, Default)]
pub struct RunHistory {
    snapshots: Vec<Snapshot>,
}

impl RunHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all snapshots (called at run start).
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Append a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// All snapshots, in recording order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The most recent snapshot, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(step: usize) -> Snapshot {
        Snapshot {
            step,
            time: step as f64,
            energy: 1.0,
            observables: None,
            field: None,
            radii: Vec::new(),
        }
    }

    #[test]
    fn grows_monotonically_and_clears() {
        let mut history = RunHistory::new();
        assert!(history.is_empty());
        for step in 1..=5 {
            history.push(snapshot(step));
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.last().unwrap().step, 5);
        let steps: Vec<usize> = history.snapshots().iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);

        history.clear();
        assert!(history.is_empty());
    }
}
