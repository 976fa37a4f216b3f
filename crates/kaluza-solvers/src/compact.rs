//! Compact extra-dimension radius integrator.
//!
//! Each extra dimension carries a stabilization radius evolved by explicit
//! Euler under a restoring force toward its equilibrium radius, a discrete
//! Laplacian-like coupling to its index neighbours, and a quantum
//! fluctuation term decaying with radius. All dimensions update
//! simultaneously from the start-of-step radii; the radius is floored at
//! the Planck length after every sub-step.
//!
//! Equilibrium radii are drawn from a seeded ChaCha8 RNG
//! ([`CompactLattice::new`] takes the seed), so runs are reproducible for
//! identical seeds and tests can pin the draw.

use kaluza_core::PhysicalConstants;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Topology of a compact dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// A circle: one winding direction.
    Circular,
    /// A torus cross-section: two winding directions.
    Toroidal,
}

/// One compact extra dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct CompactDimension {
    /// Position in the dimension sequence; neighbours are index-adjacent.
    pub index: usize,
    /// Current stabilization radius (never below the Planck length after
    /// an evolution step).
    pub radius: f64,
    /// Winding topology, alternating by index parity.
    pub topology: Topology,
    /// The radius the restoring force pulls toward.
    pub equilibrium_radius: f64,
}

/// Integrator parameters. All rates are per unit time in the constants'
/// units; defaults come from [`CompactParams::for_constants`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompactParams {
    /// Euler step: `10·planck_time`.
    pub dt: f64,
    /// Restoring-force rate κ.
    pub stiffness: f64,
    /// Neighbour-coupling rate λ.
    pub coupling: f64,
    /// Fluctuation amplitude σ (radius per unit time).
    pub fluctuation: f64,
}

impl CompactParams {
    /// Default parameters scaled to the given constants.
    ///
    /// `κ·dt = 0.1`, keeping the explicit Euler update monotone toward
    /// equilibrium.
    pub fn for_constants(constants: &PhysicalConstants) -> Self {
        Self {
            dt: 10.0 * constants.planck_time,
            stiffness: 0.01 / constants.planck_time,
            coupling: 0.001 / constants.planck_time,
            fluctuation: 0.001 * constants.planck_length / constants.planck_time,
        }
    }
}

/// Radius evolution record: one entry per step, radii indexed by dimension.
///
/// Entries hold the pre-update radii, so the first row of a fresh lattice
/// equals its initial radii.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadiusHistory {
    /// Simulation time at the start of each step.
    pub time: Vec<f64>,
    /// Radii at the start of each step, indexed `[step][dimension]`.
    pub radii: Vec<Vec<f64>>,
}

/// Physical couplings rescaled by the compact volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectiveCoupling {
    /// `G / Π(2π·r_i)`.
    pub effective_gravity: f64,
    /// `(1/137)·sqrt(Π(2π·r_i) / ℓ_p^count)`.
    pub effective_fine_structure: f64,
}

/// The ordered sequence of compact dimensions and their integrator.
pub struct CompactLattice {
    dims: Vec<CompactDimension>,
    params: CompactParams,
    constants: PhysicalConstants,
    elapsed: f64,
}

impl CompactLattice {
    /// Build `count` compact dimensions.
    ///
    /// Radii default to `10·planck_length` where `initial_radii` supplies
    /// no value. Topology alternates Circular/Toroidal by index parity.
    /// Equilibrium radii are drawn as `planck_length·(1 + 0.1·U)` with
    /// `U ∈ [0, 1)` from a ChaCha8 RNG seeded by `seed`. The sequence
    /// length never changes after construction.
    pub fn new(
        count: usize,
        initial_radii: &[f64],
        seed: u64,
        constants: PhysicalConstants,
    ) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let default_radius = constants.compact_radius();
        let dims = (0..count)
            .map(|index| {
                let radius = initial_radii.get(index).copied().unwrap_or(default_radius);
                let topology = if index % 2 == 0 {
                    Topology::Circular
                } else {
                    Topology::Toroidal
                };
                let u: f64 = rng.random();
                CompactDimension {
                    index,
                    radius,
                    topology,
                    equilibrium_radius: constants.planck_length * (1.0 + 0.1 * u),
                }
            })
            .collect();
        Self {
            dims,
            params: CompactParams::for_constants(&constants),
            constants,
            elapsed: 0.0,
        }
    }

    /// Override the integrator parameters (e.g. to disable the fluctuation
    /// term).
    pub fn with_params(mut self, params: CompactParams) -> Self {
        self.params = params;
        self
    }

    /// The dimension records, in sequence order.
    pub fn dimensions(&self) -> &[CompactDimension] {
        &self.dims
    }

    /// Current radii, in sequence order.
    pub fn radii(&self) -> Vec<f64> {
        self.dims.iter().map(|d| d.radius).collect()
    }

    /// Simulation time accumulated by [`evolve()`](Self::evolve).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance the radii `steps` Euler steps and return the history of
    /// pre-update radii.
    ///
    /// Per step, for every dimension `i` simultaneously (neighbour terms
    /// read the start-of-step radii, never partially-updated values):
    ///
    /// ```text
    /// Δr_i = dt·(−κ(r_i − r_i⁰) − λ·(−((r_{i−1}−r_i) + (r_{i+1}−r_i)))
    ///        + σ·exp(−r_i/ℓ_p))
    /// ```
    ///
    /// One-sided terms are omitted at the sequence boundaries — dimensions
    /// do not wrap. After the update each radius is floored at the Planck
    /// length.
    pub fn evolve(&mut self, steps: usize) -> RadiusHistory {
        let mut history = RadiusHistory {
            time: Vec::with_capacity(steps),
            radii: Vec::with_capacity(steps),
        };
        let planck_length = self.constants.planck_length;
        let p = self.params;

        for _ in 0..steps {
            let start: Vec<f64> = self.dims.iter().map(|d| d.radius).collect();
            history.time.push(self.elapsed);
            history.radii.push(start.clone());

            for (i, dim) in self.dims.iter_mut().enumerate() {
                let r = start[i];
                let mut neighbour = 0.0;
                if i > 0 {
                    neighbour += start[i - 1] - r;
                }
                if i + 1 < start.len() {
                    neighbour += start[i + 1] - r;
                }
                let drift = -p.stiffness * (r - dim.equilibrium_radius)
                    - p.coupling * (-neighbour)
                    + p.fluctuation * (-r / planck_length).exp();
                dim.radius = (r + p.dt * drift).max(planck_length);
            }
            self.elapsed += p.dt;
        }
        history
    }

    /// Physical couplings rescaled by the current compact volume.
    ///
    /// Pure function of the current radii. With zero compact dimensions the
    /// volume factor is 1 and the couplings reduce to their 4-dimensional
    /// values.
    pub fn effective_coupling(&self) -> EffectiveCoupling {
        let volume: f64 = self
            .dims
            .iter()
            .map(|d| 2.0 * std::f64::consts::PI * d.radius)
            .product();
        let planck_volume = self.constants.planck_length.powi(self.dims.len() as i32);
        EffectiveCoupling {
            effective_gravity: self.constants.g / volume,
            effective_fine_structure: (1.0 / 137.0) * (volume / planck_volume).sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn natural() -> PhysicalConstants {
        PhysicalConstants::natural()
    }

    fn quiet_params(constants: &PhysicalConstants) -> CompactParams {
        CompactParams {
            fluctuation: 0.0,
            ..CompactParams::for_constants(constants)
        }
    }

    #[test]
    fn construction_defaults_and_alternating_topology() {
        let lattice = CompactLattice::new(4, &[], 7, natural());
        let dims = lattice.dimensions();
        assert_eq!(dims.len(), 4);
        for (i, dim) in dims.iter().enumerate() {
            assert_eq!(dim.index, i);
            assert_eq!(dim.radius, 10.0);
            let expected = if i % 2 == 0 {
                Topology::Circular
            } else {
                Topology::Toroidal
            };
            assert_eq!(dim.topology, expected);
            // Draw range: ℓ_p·[1, 1.1).
            assert!(dim.equilibrium_radius >= 1.0);
            assert!(dim.equilibrium_radius < 1.1);
        }
    }

    #[test]
    fn same_seed_same_equilibria() {
        let a = CompactLattice::new(5, &[], 42, natural());
        let b = CompactLattice::new(5, &[], 42, natural());
        for (da, db) in a.dimensions().iter().zip(b.dimensions()) {
            assert_eq!(da.equilibrium_radius, db.equilibrium_radius);
        }
    }

    #[test]
    fn history_records_pre_update_radii() {
        let constants = natural();
        let mut lattice = CompactLattice::new(2, &[3.0, 5.0], 1, constants);
        let history = lattice.evolve(3);
        assert_eq!(history.time.len(), 3);
        assert_eq!(history.radii.len(), 3);
        assert_eq!(history.radii[0], vec![3.0, 5.0]);
        assert_eq!(history.time[0], 0.0);
        // Steps are 10 Planck times apart.
        assert_eq!(history.time[1], 10.0);
        // The lattice itself has moved past the last recorded row.
        assert_ne!(lattice.radii(), history.radii[2]);
    }

    #[test]
    fn single_dimension_approaches_equilibrium_monotonically() {
        let constants = natural();
        let mut lattice =
            CompactLattice::new(1, &[10.0], 3, constants).with_params(quiet_params(&constants));
        let eq = lattice.dimensions()[0].equilibrium_radius;

        let mut last = lattice.radii()[0];
        for _ in 0..200 {
            lattice.evolve(1);
            let r = lattice.radii()[0];
            assert!(r <= last + 1e-15, "radius rose from {last} to {r}");
            assert!(r >= eq - 1e-12, "radius overshot equilibrium");
            last = r;
        }
        assert!((last - eq).abs() < 1e-6, "final {last} vs equilibrium {eq}");
    }

    #[test]
    fn coupling_pulls_neighbours_together() {
        let constants = natural();
        let mut lattice =
            CompactLattice::new(2, &[2.0, 8.0], 9, constants).with_params(CompactParams {
                stiffness: 0.0,
                fluctuation: 0.0,
                ..CompactParams::for_constants(&constants)
            });
        let before = lattice.radii();
        lattice.evolve(1);
        let after = lattice.radii();
        // With only the coupling term active, the smaller radius grows and
        // the larger one shrinks.
        assert!(after[0] > before[0]);
        assert!(after[1] < before[1]);
    }

    #[test]
    fn effective_coupling_matches_formula() {
        let constants = natural();
        let lattice = CompactLattice::new(2, &[1.0, 2.0], 11, constants);
        let c = lattice.effective_coupling();
        let volume = (2.0 * std::f64::consts::PI) * (2.0 * std::f64::consts::PI * 2.0);
        assert!((c.effective_gravity - 1.0 / volume).abs() < 1e-12);
        let expected_alpha = (1.0 / 137.0) * volume.sqrt();
        assert!((c.effective_fine_structure - expected_alpha).abs() < 1e-12);
    }

    #[test]
    fn empty_lattice_degenerates_to_four_dimensional_couplings() {
        let lattice = CompactLattice::new(0, &[], 0, natural());
        let c = lattice.effective_coupling();
        assert_eq!(c.effective_gravity, 1.0);
        assert!((c.effective_fine_structure - 1.0 / 137.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn radius_never_falls_below_planck_length(
            radii in prop::collection::vec(0.0f64..20.0, 1..6),
            steps in 1usize..50,
            seed in 0u64..1000,
        ) {
            let constants = natural();
            let mut lattice = CompactLattice::new(radii.len(), &radii, seed, constants);
            lattice.evolve(steps);
            for r in lattice.radii() {
                prop_assert!(r >= constants.planck_length);
            }
        }
    }
}
