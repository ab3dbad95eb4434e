//! Sweep execution and per-run summaries.

use super::config::{RunSpec, SweepPlan};
use crate::aco::{AcoSession, ConfigError};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Instant;

/// Summary row for one executed run.
///
/// Carries the run's parameters verbatim plus the measured outcome, so a
/// sweep reduces to a flat table one record per spec.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRecord {
    /// Number of cities.
    pub n: usize,

    /// Number of ants per cycle.
    pub m: usize,

    /// Number of cycles run.
    pub cycles: usize,

    /// Pheromone exponent.
    pub alpha: f64,

    /// Visibility exponent.
    pub beta: f64,

    /// Pheromone persistence.
    pub persistence: f64,

    /// Deposit scale constant.
    pub q: f64,

    /// Random seed.
    pub seed: u64,

    /// Wall-clock time of the cycle loop in seconds, session
    /// construction excluded.
    pub runtime_secs: f64,

    /// Mean wall-clock time per cycle in seconds.
    pub secs_per_cycle: f64,

    /// Shortest tour length found over the whole run.
    pub best_len_global: f64,

    /// Mean tour length in the final cycle.
    pub mean_len_final: f64,

    /// Improvement from the first cycle's best to the global best, in
    /// percent of the former. 0 when the first cycle is degenerate.
    pub improvement_pct: f64,
}

/// Executes sweep plans, one independent session per spec.
pub struct SweepRunner;

impl SweepRunner {
    /// Runs every spec in plan order on the current thread.
    ///
    /// Fails fast on the first spec whose parameters do not validate;
    /// records for the specs before it are discarded.
    pub fn run(plan: &SweepPlan) -> Result<Vec<SweepRecord>, ConfigError> {
        plan.specs().iter().map(run_spec).collect()
    }

    /// Runs the specs on the rayon thread pool.
    ///
    /// Sessions share nothing, so runs parallelize freely and every
    /// result field except the timings matches the sequential sweep.
    /// Records come back in plan order.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(plan: &SweepPlan) -> Result<Vec<SweepRecord>, ConfigError> {
        plan.specs().par_iter().map(run_spec).collect()
    }
}

/// Runs one spec to completion and summarizes it.
fn run_spec(spec: &RunSpec) -> Result<SweepRecord, ConfigError> {
    let mut session = AcoSession::new(spec.to_config())?;

    let started = Instant::now();
    let result = session.run();
    let runtime_secs = started.elapsed().as_secs_f64();

    let (first_best, mean_len_final) = match (result.history.first(), result.history.last()) {
        (Some(first), Some(last)) => (first.best_len, last.mean_len),
        _ => (0.0, 0.0),
    };
    let improvement_pct = if first_best > 0.0 {
        (first_best - result.best_len) / first_best * 100.0
    } else {
        0.0
    };

    Ok(SweepRecord {
        n: spec.n,
        m: spec.m,
        cycles: spec.cycles,
        alpha: spec.alpha,
        beta: spec.beta,
        persistence: spec.persistence,
        q: spec.q,
        seed: spec.seed,
        runtime_secs,
        secs_per_cycle: runtime_secs / spec.cycles as f64,
        best_len_global: result.best_len,
        mean_len_final,
        improvement_pct,
    })
}
