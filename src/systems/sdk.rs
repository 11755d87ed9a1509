// src/systems/sdk.rs

//! # Systems SDK
//!
//! Shared vocabulary for **systems**: small loops layered on the sweep
//! formulas that answer one tuning question each.
//!
//! - **k_tuning**: which base `k` gives a target gain/loss ratio at a stake?
//! - **career_sim**: how does one duelist's fame evolve under a row's constants?
//!
//! A system owns its parameters `θ` and observables `π`, reads formulas from
//! `crate::mechanics`, and reports through [`Outcome`]. Systems stay
//! deterministic; if one needs randomness it takes an explicit seed.
//!
//! Keep systems under `src/systems/*` and gate them with `feature = "system-*"`.

/// Generic result of a closed-loop system.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<TParams, Obs> {
    pub theta: TParams,
    pub obs: Obs,
    pub iters: usize,
    pub converged: bool,
}
