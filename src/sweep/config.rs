//! Sweep run specifications and plans.

use crate::aco::AcoConfig;

/// Parameters for one benchmark run.
///
/// A spec is the flat, serializable form of a session configuration:
/// every field lands unchanged in the run's [`SweepRecord`] row so that
/// external tabulation can group and compare runs by parameters.
///
/// [`SweepRecord`]: super::SweepRecord
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSpec {
    /// Number of cities.
    pub n: usize,

    /// Number of ants per cycle.
    pub m: usize,

    /// Number of cycles to run.
    pub cycles: usize,

    /// Pheromone exponent.
    pub alpha: f64,

    /// Visibility exponent.
    pub beta: f64,

    /// Pheromone persistence, `1 - evaporation_rate`.
    pub persistence: f64,

    /// Deposit scale constant.
    pub q: f64,

    /// Random seed for the instance and the ants.
    pub seed: u64,
}

impl RunSpec {
    /// Creates a spec with the sweep defaults: alpha 1, beta 5,
    /// persistence 0.5, Q 100, seed 42.
    pub fn new(n: usize, m: usize, cycles: usize) -> Self {
        Self {
            n,
            m,
            cycles,
            alpha: 1.0,
            beta: 5.0,
            persistence: 0.5,
            q: 100.0,
            seed: 42,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    pub fn with_deposit(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The session configuration this spec describes.
    pub fn to_config(&self) -> AcoConfig {
        AcoConfig::new(self.n)
            .with_ants(self.m)
            .with_cycles(self.cycles)
            .with_alpha(self.alpha)
            .with_beta(self.beta)
            .with_persistence(self.persistence)
            .with_deposit(self.q)
            .with_seed(self.seed)
    }
}

/// An ordered list of runs to execute.
///
/// # Examples
///
/// ```
/// use u_antcolony::sweep::{RunSpec, SweepPlan};
///
/// let mut plan = SweepPlan::new();
/// plan.push(RunSpec::new(50, 50, 100));
/// plan.add_grid(RunSpec::new(100, 100, 100), &[0.5, 1.0, 1.5, 2.0], &[3.0, 5.0, 7.0]);
/// assert_eq!(plan.len(), 13);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPlan {
    specs: Vec<RunSpec>,
}

impl SweepPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for a quick smoke sweep: 20, 30, and 40 cities with one
    /// ant per city, 20 cycles each. Useful to verify a setup before
    /// committing to a long sweep.
    pub fn quick() -> Self {
        let mut plan = Self::new();
        for n in [20, 30, 40] {
            plan.push(RunSpec::new(n, n, 20));
        }
        plan
    }

    /// Appends one run to the plan.
    pub fn push(&mut self, spec: RunSpec) {
        self.specs.push(spec);
    }

    /// Appends the cartesian alpha × beta grid over a base spec, betas
    /// varying fastest. This is the usual exponent study on a fixed
    /// instance.
    pub fn add_grid(&mut self, base: RunSpec, alphas: &[f64], betas: &[f64]) {
        for &alpha in alphas {
            for &beta in betas {
                self.push(base.clone().with_alpha(alpha).with_beta(beta));
            }
        }
    }

    /// The planned runs, in execution order.
    pub fn specs(&self) -> &[RunSpec] {
        &self.specs
    }

    /// Number of planned runs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if the plan holds no runs.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
