//! ACO configuration and start-city policies.

use rand::Rng;
use thiserror::Error;

/// Start-city assignment for the ants of one cycle.
///
/// Ant System is insensitive to where ants start in the long run, but the
/// assignment changes the exact random draws, so it is part of the
/// reproducibility contract and is fixed by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartPolicy {
    /// Every ant starts at the same city. The canonical default is
    /// `Fixed(0)`.
    Fixed(usize),

    /// Ant `k` starts at city `k % n`, spreading starts over the instance.
    /// With one ant per city this is the classical placement from the
    /// original Ant System experiments.
    Cyclic,

    /// Each ant draws its start city uniformly at random, before any of
    /// its step decisions, from the session stream.
    Random,
}

impl Default for StartPolicy {
    fn default() -> Self {
        StartPolicy::Fixed(0)
    }
}

impl StartPolicy {
    /// Resolves the start city for ant `ant` on an instance of `n` cities.
    pub(crate) fn start_city<R: Rng>(&self, ant: usize, n: usize, rng: &mut R) -> usize {
        match self {
            StartPolicy::Fixed(city) => *city,
            StartPolicy::Cyclic => ant % n,
            StartPolicy::Random => rng.random_range(0..n),
        }
    }
}

/// A configuration parameter outside its valid domain.
///
/// Raised once, at session construction; a session that was built never
/// fails on configuration afterwards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("need at least 2 cities for a tour, got {0}")]
    TooFewCities(usize),

    #[error("need at least one ant per cycle")]
    NoAnts,

    #[error("alpha must be positive and finite, got {0}")]
    InvalidAlpha(f64),

    #[error("beta must be positive and finite, got {0}")]
    InvalidBeta(f64),

    #[error("persistence must be in (0, 1], got {0}")]
    InvalidPersistence(f64),

    #[error("deposit constant q must be non-negative and finite, got {0}")]
    InvalidDeposit(f64),

    #[error("need at least one cycle")]
    NoCycles,

    #[error("initial pheromone must be positive and finite, got {0}")]
    InvalidInitialPheromone(f64),

    #[error("fixed start city {start} is out of range for {n_cities} cities")]
    StartCityOutOfRange { start: usize, n_cities: usize },

    #[error("city {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),
}

/// Configuration for one Ant System run.
///
/// Defaults follow the classical parameterization (alpha 1, beta 5,
/// persistence 0.5, Q 100, one ant per city).
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::new(50)
///     .with_ants(25)
///     .with_beta(3.0)
///     .with_cycles(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of cities in the instance. Must be at least 2.
    pub n_cities: usize,

    /// Number of ants (tours built) per cycle.
    pub n_ants: usize,

    /// Pheromone exponent. Higher values weight the learned trail more.
    pub alpha: f64,

    /// Visibility exponent. Higher values weight nearness more.
    pub beta: f64,

    /// Fraction of pheromone retained per cycle, `1 - evaporation_rate`.
    /// Must lie in (0, 1]; 1.0 disables evaporation.
    pub persistence: f64,

    /// Deposit scale constant Q. Each ant adds `q / tour_length` to every
    /// edge of its tour. 0.0 disables deposit.
    pub q: f64,

    /// Number of optimization cycles to run.
    pub n_cycles: usize,

    /// Uniform initial pheromone level on every edge.
    pub initial_pheromone: f64,

    /// Random seed for reproducibility. `None` draws a seed at session
    /// construction.
    pub seed: Option<u64>,

    /// Start-city assignment per ant.
    pub start: StartPolicy,
}

impl AcoConfig {
    /// Creates a configuration for an instance of `n_cities` cities.
    pub fn new(n_cities: usize) -> Self {
        Self {
            n_cities,
            n_ants: n_cities,
            alpha: 1.0,
            beta: 5.0,
            persistence: 0.5,
            q: 100.0,
            n_cycles: 100,
            initial_pheromone: 1.0,
            seed: None,
            start: StartPolicy::default(),
        }
    }

    pub fn with_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
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

    pub fn with_cycles(mut self, n: usize) -> Self {
        self.n_cycles = n;
        self
    }

    pub fn with_initial_pheromone(mut self, tau: f64) -> Self {
        self.initial_pheromone = tau;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    /// Validates every parameter against its domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_cities < 2 {
            return Err(ConfigError::TooFewCities(self.n_cities));
        }
        if self.n_ants < 1 {
            return Err(ConfigError::NoAnts);
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(ConfigError::InvalidBeta(self.beta));
        }
        if !self.persistence.is_finite() || self.persistence <= 0.0 || self.persistence > 1.0 {
            return Err(ConfigError::InvalidPersistence(self.persistence));
        }
        if !self.q.is_finite() || self.q < 0.0 {
            return Err(ConfigError::InvalidDeposit(self.q));
        }
        if self.n_cycles < 1 {
            return Err(ConfigError::NoCycles);
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(ConfigError::InvalidInitialPheromone(self.initial_pheromone));
        }
        if let StartPolicy::Fixed(start) = self.start {
            if start >= self.n_cities {
                return Err(ConfigError::StartCityOutOfRange {
                    start,
                    n_cities: self.n_cities,
                });
            }
        }
        Ok(())
    }
}
