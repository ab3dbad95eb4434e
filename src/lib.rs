//! Ant System engine for the Traveling Salesman Problem.
//!
//! Implements the classical Ant System variant of Ant Colony
//! Optimization: each cycle, a colony of ants builds complete tours
//! guided by pheromone trails and a nearness heuristic, trails
//! evaporate, and every ant deposits pheromone in proportion to its
//! tour quality. The engine is pure in-memory computation, reproducible
//! bit-for-bit under a fixed seed, and total: tour construction always
//! yields a valid permutation, recovering from numerical degeneracy
//! with a uniform fallback instead of failing.
//!
//! # Modules
//!
//! - [`tsp`]: Problem domain — cities, distance and visibility matrices,
//!   and tours
//! - [`aco`]: The engine — configuration, pheromone field, tour
//!   construction, and the cycle-driving session
//! - [`sweep`]: Benchmark sweeps over many independent sessions
//! - [`random`]: Seeded, portable random stream construction
//!
//! # Example
//!
//! ```
//! use u_antcolony::aco::{AcoConfig, AcoSession};
//!
//! let config = AcoConfig::new(20).with_cycles(50).with_seed(42);
//! let mut session = AcoSession::new(config)?;
//! let result = session.run();
//!
//! assert_eq!(result.history.len(), 50);
//! assert!(result.best_tour.expect("a cycle ran").is_permutation(20));
//! # Ok::<(), u_antcolony::aco::ConfigError>(())
//! ```
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

pub mod aco;
pub mod random;
pub mod sweep;
pub mod tsp;
