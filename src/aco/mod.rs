//! Ant System optimization engine.
//!
//! The classical Ant-Cycle variant: each cycle, every ant builds a
//! complete tour guided by `tau^alpha * eta^beta`, all trails evaporate
//! once, and every ant deposits `Q / L` on the edges it used. A session
//! drives the cycles sequentially, tracks the global best tour, and
//! records per-cycle convergence statistics.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Run parameters with the classical defaults, validated
//!   up front
//! - [`PheromoneMatrix`]: The mutable trail field, written once per cycle
//! - [`TourBuilder`]: Stochastic next-city selection over the remaining set
//! - [`CycleRecord`]: Per-cycle statistics, appended to the session history
//! - [`AcoSession`]: The cycle-driving state machine
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod builder;
mod config;
mod cycle;
mod pheromone;
mod session;

pub use builder::TourBuilder;
pub use config::{AcoConfig, ConfigError, StartPolicy};
pub use cycle::CycleRecord;
pub use pheromone::PheromoneMatrix;
pub use session::{AcoResult, AcoSession, SessionState};
