//! Benchmark sweeps over independent sessions.
//!
//! A sweep executes an ordered list of run specifications, one fresh
//! [`AcoSession`] per spec, and reduces each run to a flat summary
//! record for external tabulation. Sessions share nothing, so the
//! `parallel` feature can spread a plan across the rayon pool without
//! changing any result field other than the timings.
//!
//! # Key Types
//!
//! - [`RunSpec`]: Parameters for one run, with the classical sweep defaults
//! - [`SweepPlan`]: An ordered list of specs, with preset and grid helpers
//! - [`SweepRunner`]: Sequential and (feature-gated) parallel execution
//! - [`SweepRecord`]: One summary row per executed run
//!
//! [`AcoSession`]: crate::aco::AcoSession

mod config;
mod runner;

pub use config::{RunSpec, SweepPlan};
pub use runner::{SweepRecord, SweepRunner};
