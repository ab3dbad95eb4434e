//! Session state machine driving the optimization cycles.

use crate::aco::{AcoConfig, ConfigError, CycleRecord, PheromoneMatrix, TourBuilder};
use crate::random::create_rng;
use crate::tsp::{generate_cities, City, DistanceMatrix, Tour, VisibilityMatrix};
use rand_pcg::Pcg64;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifecycle of an [`AcoSession`].
///
/// Transitions are `Idle → Running → {Completed, Cancelled}`. Both end
/// states are terminal: the history, best tour, and pheromone snapshot
/// stay readable, but no further cycle mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Configuration accepted and matrices built; no cycle has run yet.
    Idle,

    /// At least one cycle has run and more remain.
    Running,

    /// All configured cycles have run.
    Completed,

    /// Cancelled between cycles. The history up to the last completed
    /// cycle and the matching pheromone snapshot are retained.
    Cancelled,
}

impl SessionState {
    /// Returns `true` once no further cycle can run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Completed | SessionState::Cancelled)
    }
}

/// Result of a completed or cancelled run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The shortest tour found, `None` if no cycle completed.
    pub best_tour: Option<Tour>,

    /// Length of the best tour, `f64::INFINITY` if no cycle completed.
    pub best_len: f64,

    /// Number of cycles that completed.
    pub cycles_completed: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// One record per completed cycle, in cycle order.
    pub history: Vec<CycleRecord>,
}

/// One Ant System run over a fixed instance.
///
/// The session owns every piece of run state: the instance matrices, the
/// pheromone field, the random stream, the global best tour, and the
/// cycle history. Cycles are strictly sequential; the pheromone field is
/// written exactly once per cycle, after all of that cycle's tours are
/// built. Sessions share nothing, so independent sessions can run on
/// separate threads without coordination.
///
/// Given the same configuration with the same seed, a session replays
/// the identical cycle history and final tour: ants draw from one
/// [`Pcg64`] stream in index order, each ant its optional start draw
/// first and then one draw per visit decision.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AcoSession};
///
/// let config = AcoConfig::new(15).with_cycles(30).with_seed(42);
/// let mut session = AcoSession::new(config)?;
/// let result = session.run();
///
/// assert_eq!(result.cycles_completed, 30);
/// assert!(result.best_tour.expect("a cycle ran").is_permutation(15));
/// # Ok::<(), u_antcolony::aco::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AcoSession {
    config: AcoConfig,
    cities: Vec<City>,
    distances: DistanceMatrix,
    visibility: VisibilityMatrix,
    pheromone: PheromoneMatrix,
    rng: Pcg64,
    state: SessionState,
    cycle: usize,
    best_tour: Option<Tour>,
    best_len: f64,
    history: Vec<CycleRecord>,
}

impl AcoSession {
    /// Creates a session over a seeded random instance.
    ///
    /// Validates the configuration up front, generates `n_cities` cities
    /// from the resolved seed, and builds the distance, visibility, and
    /// pheromone matrices. The same resolved seed also drives the ants'
    /// random stream.
    pub fn new(config: AcoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let cities = generate_cities(config.n_cities, seed);
        Self::build(cities, config, seed)
    }

    /// Creates a session over explicit city coordinates.
    ///
    /// The instance size is taken from the slice; the configured
    /// `n_cities` is overridden. Coordinates must be finite.
    pub fn with_cities(cities: Vec<City>, mut config: AcoConfig) -> Result<Self, ConfigError> {
        for (idx, city) in cities.iter().enumerate() {
            if !city.x().is_finite() || !city.y().is_finite() {
                return Err(ConfigError::NonFiniteCoordinate(idx));
            }
        }
        config.n_cities = cities.len();
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::build(cities, config, seed)
    }

    fn build(cities: Vec<City>, config: AcoConfig, seed: u64) -> Result<Self, ConfigError> {
        let distances =
            DistanceMatrix::from_cities(&cities).ok_or(ConfigError::TooFewCities(cities.len()))?;
        let visibility = VisibilityMatrix::from_distances(&distances);
        let pheromone = PheromoneMatrix::new(cities.len(), config.initial_pheromone);
        Ok(Self {
            config,
            cities,
            distances,
            visibility,
            pheromone,
            rng: create_rng(seed),
            state: SessionState::Idle,
            cycle: 0,
            best_tour: None,
            best_len: f64::INFINITY,
            history: Vec::new(),
        })
    }

    /// Runs at most one cycle.
    ///
    /// Returns the new cycle's record, or `None` once the session is in
    /// a terminal state. This is the polling driver for incremental
    /// front ends; [`run`](Self::run) loops over it internally.
    pub fn step(&mut self) -> Option<CycleRecord> {
        if self.state.is_terminal() {
            return None;
        }
        self.state = SessionState::Running;
        let record = self.run_cycle();
        self.history.push(record.clone());
        if self.cycle >= self.config.n_cycles {
            self.state = SessionState::Completed;
        }
        Some(record)
    }

    /// Drives the session to a terminal state.
    pub fn run(&mut self) -> AcoResult {
        self.run_with_cancel(None)
    }

    /// Drives the session to a terminal state with an optional
    /// cancellation token.
    ///
    /// The flag is checked between cycles only. A set flag ends the run
    /// in the `Cancelled` state with the history up to the last
    /// completed cycle intact; cancellation is not a failure.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> AcoResult {
        self.run_with_observer(cancel, |_| {})
    }

    /// Drives the session to a terminal state, invoking `observer` with
    /// each cycle's record as soon as the cycle completes.
    pub fn run_with_observer<F>(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> AcoResult
    where
        F: FnMut(&CycleRecord),
    {
        while !self.state.is_terminal() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    self.state = SessionState::Cancelled;
                    break;
                }
            }
            if let Some(record) = self.step() {
                observer(&record);
            }
        }
        self.result()
    }

    /// Cancels a session that has not finished.
    ///
    /// Intended for poll-driven front ends that call [`step`](Self::step)
    /// themselves. A `Completed` session stays completed.
    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            self.state = SessionState::Cancelled;
        }
    }

    /// One full Ant System cycle: every ant builds a tour, all trails
    /// evaporate once, every tour deposits, and the global best updates.
    fn run_cycle(&mut self) -> CycleRecord {
        let n = self.distances.size();
        let m = self.config.n_ants;

        let builder = TourBuilder::new(
            &self.pheromone,
            &self.visibility,
            self.config.alpha,
            self.config.beta,
        );
        let mut tours = Vec::with_capacity(m);
        let mut lengths = Vec::with_capacity(m);
        for ant in 0..m {
            let start = self.config.start.start_city(ant, n, &mut self.rng);
            let sequence = builder.build(start, &mut self.rng);
            let tour = Tour::from_sequence(sequence, &self.distances);
            lengths.push(tour.length());
            tours.push(tour);
        }

        self.pheromone.evaporate(self.config.persistence);
        self.pheromone.deposit(&tours, self.config.q);

        let mut best_idx = 0;
        for (ant, &len) in lengths.iter().enumerate() {
            if len < lengths[best_idx] {
                best_idx = ant;
            }
        }
        if lengths[best_idx] < self.best_len {
            self.best_len = lengths[best_idx];
            self.best_tour = Some(tours[best_idx].clone());
        }

        self.cycle += 1;
        CycleRecord::from_lengths(self.cycle, &lengths, self.best_len)
    }

    fn result(&self) -> AcoResult {
        AcoResult {
            best_tour: self.best_tour.clone(),
            best_len: self.best_len,
            cycles_completed: self.cycle,
            cancelled: self.state == SessionState::Cancelled,
            history: self.history.clone(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of completed cycles.
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// The instance's cities.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The instance's distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// The current pheromone field. After a terminal state this is the
    /// final snapshot.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// The best tour found so far.
    pub fn best_tour(&self) -> Option<&Tour> {
        self.best_tour.as_ref()
    }

    /// Length of the best tour found so far, `f64::INFINITY` before the
    /// first cycle completes.
    pub fn best_len(&self) -> f64 {
        self.best_len
    }

    /// Records of every completed cycle, in cycle order.
    pub fn history(&self) -> &[CycleRecord] {
        &self.history
    }

    /// The configuration this session runs under.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::StartPolicy;

    fn pentagon() -> Vec<City> {
        vec![
            City::new(0, 10.0, 10.0),
            City::new(1, 60.0, 15.0),
            City::new(2, 90.0, 50.0),
            City::new(3, 50.0, 90.0),
            City::new(4, 15.0, 60.0),
        ]
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = AcoSession::new(AcoConfig::new(10).with_seed(1)).unwrap();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.cycle(), 0);
        assert!(session.best_tour().is_none());
        assert_eq!(session.best_len(), f64::INFINITY);
        assert!(session.history().is_empty());
        assert_eq!(session.cities().len(), 10);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert_eq!(
            AcoSession::new(AcoConfig::new(1)).err(),
            Some(ConfigError::TooFewCities(1))
        );
        assert!(AcoSession::new(AcoConfig::new(10).with_ants(0)).is_err());
    }

    #[test]
    fn test_with_cities_rejects_non_finite_coordinates() {
        let cities = vec![
            City::new(0, 0.0, 0.0),
            City::new(1, f64::NAN, 4.0),
            City::new(2, 8.0, 8.0),
        ];
        assert_eq!(
            AcoSession::with_cities(cities, AcoConfig::new(3)).err(),
            Some(ConfigError::NonFiniteCoordinate(1))
        );
    }

    #[test]
    fn test_with_cities_overrides_configured_size() {
        let session = AcoSession::with_cities(pentagon(), AcoConfig::new(99).with_seed(7)).unwrap();
        assert_eq!(session.cities().len(), 5);
        assert_eq!(session.config().n_cities, 5);
        assert_eq!(session.config().n_ants, 99);
    }

    #[test]
    fn test_step_runs_one_cycle_at_a_time() {
        let mut session = AcoSession::new(AcoConfig::new(8).with_cycles(3).with_seed(5)).unwrap();

        let first = session.step().unwrap();
        assert_eq!(first.cycle, 1);
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.cycle(), 1);

        let second = session.step().unwrap();
        assert_eq!(second.cycle, 2);

        let third = session.step().unwrap();
        assert_eq!(third.cycle, 3);
        assert_eq!(session.state(), SessionState::Completed);

        assert!(session.step().is_none());
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_completed_run_has_full_ordered_history() {
        let mut session = AcoSession::new(AcoConfig::new(12).with_cycles(15).with_seed(2)).unwrap();
        let result = session.run();

        assert_eq!(session.state(), SessionState::Completed);
        assert!(!result.cancelled);
        assert_eq!(result.cycles_completed, 15);
        assert_eq!(result.history.len(), 15);
        for (idx, record) in result.history.iter().enumerate() {
            assert_eq!(record.cycle, idx + 1);
            assert!(record.best_len <= record.mean_len + 1e-9);
            assert!(record.std_len >= 0.0);
        }
    }

    #[test]
    fn test_best_tour_is_valid_and_length_consistent() {
        let mut session = AcoSession::new(AcoConfig::new(20).with_cycles(10).with_seed(9)).unwrap();
        let result = session.run();

        let best = result.best_tour.unwrap();
        assert!(best.is_permutation(20));
        let recomputed: f64 = best.edges().map(|(a, b)| session.distances().get(a, b)).sum();
        assert!((best.length() - recomputed).abs() < 1e-9);
        assert_eq!(best.length(), result.best_len);
    }

    #[test]
    fn test_global_best_is_non_increasing() {
        let mut session = AcoSession::new(AcoConfig::new(25).with_cycles(30).with_seed(3)).unwrap();
        let result = session.run();

        for window in result.history.windows(2) {
            assert!(
                window[1].best_len_global <= window[0].best_len_global,
                "global best regressed: {} > {}",
                window[1].best_len_global,
                window[0].best_len_global
            );
        }
        for record in &result.history {
            assert!(record.best_len_global <= record.best_len);
        }
    }

    #[test]
    fn test_identical_seeds_replay_identical_runs() {
        let config = AcoConfig::new(15)
            .with_ants(10)
            .with_cycles(12)
            .with_seed(42)
            .with_start(StartPolicy::Random);

        let a = AcoSession::new(config.clone()).unwrap().run();
        let b = AcoSession::new(config).unwrap().run();

        assert_eq!(a.history, b.history);
        assert_eq!(a.best_tour, b.best_tour);
        assert_eq!(a.best_len, b.best_len);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = AcoSession::new(AcoConfig::new(15).with_cycles(5).with_seed(1)).unwrap().run();
        let b = AcoSession::new(AcoConfig::new(15).with_cycles(5).with_seed(2)).unwrap().run();
        assert_ne!(a.history, b.history);
    }

    #[test]
    fn test_two_city_round_trip() {
        let cities = vec![City::new(0, 0.0, 0.0), City::new(1, 3.0, 4.0)];
        let mut session =
            AcoSession::with_cities(cities, AcoConfig::new(2).with_cycles(5).with_seed(0)).unwrap();
        let result = session.run();

        // The only tour over two cities is the round trip, twice the
        // single inter-city distance.
        assert_eq!(result.best_len, 10.0);
        for record in &result.history {
            assert_eq!(record.best_len, 10.0);
            assert_eq!(record.mean_len, 10.0);
            assert_eq!(record.std_len, 0.0);
        }
    }

    #[test]
    fn test_fixed_five_city_scenario() {
        let config = AcoConfig::new(5)
            .with_ants(5)
            .with_alpha(1.0)
            .with_beta(5.0)
            .with_persistence(0.5)
            .with_deposit(100.0)
            .with_cycles(20)
            .with_seed(42);
        let mut session = AcoSession::with_cities(pentagon(), config).unwrap();
        let result = session.run();

        assert_eq!(result.history.len(), 20);
        for (idx, record) in result.history.iter().enumerate() {
            assert_eq!(record.cycle, idx + 1);
        }
        let first = &result.history[0];
        let last = &result.history[19];
        assert!(last.best_len_global <= first.best_len_global);
        assert_eq!(last.best_len_global, result.best_len);
    }

    #[test]
    fn test_unit_persistence_zero_deposit_is_a_pheromone_noop() {
        let config = AcoConfig::new(8)
            .with_persistence(1.0)
            .with_deposit(0.0)
            .with_initial_pheromone(1.0)
            .with_cycles(10)
            .with_seed(6);
        let mut session = AcoSession::new(config).unwrap();
        session.run();

        assert_eq!(*session.pheromone(), PheromoneMatrix::new(8, 1.0));
    }

    #[test]
    fn test_pheromone_stays_symmetric_and_positive_every_cycle() {
        let mut session = AcoSession::new(AcoConfig::new(15).with_cycles(40).with_seed(8)).unwrap();
        while session.step().is_some() {
            let field = session.pheromone();
            assert!(field.is_symmetric(1e-9));
            for i in 0..15 {
                for j in 0..15 {
                    if i != j {
                        assert!(field.get(i, j) > 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_cancellation_before_any_cycle() {
        let mut session = AcoSession::new(AcoConfig::new(10).with_cycles(50).with_seed(4)).unwrap();
        let cancel = Arc::new(AtomicBool::new(true));
        let result = session.run_with_cancel(Some(cancel));

        assert!(result.cancelled);
        assert_eq!(result.cycles_completed, 0);
        assert!(result.history.is_empty());
        assert!(result.best_tour.is_none());
        assert_eq!(session.state(), SessionState::Cancelled);
    }

    #[test]
    fn test_cancellation_from_observer_keeps_partial_history() {
        let mut session = AcoSession::new(AcoConfig::new(10).with_cycles(50).with_seed(4)).unwrap();
        let cancel = Arc::new(AtomicBool::new(false));

        let flag = cancel.clone();
        let result = session.run_with_observer(Some(cancel), |record| {
            if record.cycle == 3 {
                flag.store(true, Ordering::Relaxed);
            }
        });

        assert!(result.cancelled);
        assert_eq!(result.cycles_completed, 3);
        assert_eq!(result.history.len(), 3);
        assert!(result.best_tour.unwrap().is_permutation(10));
        assert_eq!(session.state(), SessionState::Cancelled);
    }

    #[test]
    fn test_cancel_method_stops_stepping() {
        let mut session = AcoSession::new(AcoConfig::new(10).with_cycles(50).with_seed(4)).unwrap();
        session.step();
        session.step();
        session.cancel();

        assert_eq!(session.state(), SessionState::Cancelled);
        assert!(session.step().is_none());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_cancel_after_completion_is_ignored() {
        let mut session = AcoSession::new(AcoConfig::new(5).with_cycles(2).with_seed(1)).unwrap();
        session.run();
        session.cancel();
        assert_eq!(session.state(), SessionState::Completed);
    }

    #[test]
    fn test_observer_sees_every_record_in_order() {
        let mut session = AcoSession::new(AcoConfig::new(8).with_cycles(7).with_seed(11)).unwrap();
        let mut seen = Vec::new();
        let result = session.run_with_observer(None, |record| seen.push(record.clone()));

        assert_eq!(seen.len(), 7);
        assert_eq!(seen, result.history);
    }

    #[test]
    fn test_start_policies_all_complete() {
        for start in [StartPolicy::Fixed(2), StartPolicy::Cyclic, StartPolicy::Random] {
            let config = AcoConfig::new(9)
                .with_ants(12)
                .with_cycles(5)
                .with_seed(14)
                .with_start(start);
            let result = AcoSession::new(config).unwrap().run();
            assert_eq!(result.cycles_completed, 5);
            assert!(result.best_tour.unwrap().is_permutation(9));
        }
    }

    #[test]
    fn test_fixed_start_pins_the_best_tour_start() {
        let config = AcoConfig::new(9)
            .with_cycles(5)
            .with_seed(14)
            .with_start(StartPolicy::Fixed(3));
        let result = AcoSession::new(config).unwrap().run();
        assert_eq!(result.best_tour.unwrap().cities()[0], 3);
    }

    #[test]
    fn test_unseeded_session_completes() {
        let mut session = AcoSession::new(AcoConfig::new(6).with_cycles(3)).unwrap();
        let result = session.run();
        assert_eq!(result.cycles_completed, 3);
        assert!(result.best_tour.unwrap().is_permutation(6));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification test: the best tour is a valid permutation for
        /// any seed and instance size.
        #[test]
        fn prop_best_tour_is_permutation(seed in 0u64..u64::MAX, n in 2usize..12) {
            let config = AcoConfig::new(n).with_cycles(3).with_seed(seed);
            let mut session = AcoSession::new(config).expect("valid config");
            let result = session.run();

            let best = result.best_tour.expect("a completed run has a best tour");
            prop_assert!(best.is_permutation(n));
            prop_assert!(best.length().is_finite());
        }

        /// Falsification test: reproducibility holds for any seed.
        #[test]
        fn prop_identical_seeds_reproduce(seed in 0u64..u64::MAX) {
            let config = AcoConfig::new(8).with_cycles(4).with_seed(seed);
            let a = AcoSession::new(config.clone()).expect("valid config").run();
            let b = AcoSession::new(config).expect("valid config").run();

            prop_assert_eq!(a.history, b.history);
            prop_assert_eq!(a.best_tour, b.best_tour);
        }

        /// Falsification test: the global best never regresses.
        #[test]
        fn prop_global_best_never_regresses(seed in 0u64..u64::MAX, n in 2usize..10) {
            let config = AcoConfig::new(n).with_cycles(6).with_seed(seed);
            let result = AcoSession::new(config).expect("valid config").run();

            for window in result.history.windows(2) {
                prop_assert!(window[1].best_len_global <= window[0].best_len_global);
            }
        }
    }
}
