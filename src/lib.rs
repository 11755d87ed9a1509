/*!
`fame_balance` — fame exchange and round-score tables for duel balance tuning.

What it does
- Sweeps a grid of tunable constants (decay exponent `k`, stake count `z`,
  fame `X`) and evaluates, per cell, the fame exchanged between winner and
  loser plus the round score for each side.
- Hands the resulting records to an output sink (console table, CSV, JSON).
- Offers two small systems on top of the same formulas:
  * `k_tuning` closes the loop over `k` toward a target gain/loss ratio;
  * `career_sim` replays a seeded duelist career under one row's constants.

How to use (call surface only)
- `sweep(&grid, &exchange_rules, &score_rules) -> Vec<Record>`
  (or `default_table()` for the stock grid).
- `calculate_score(win, fame, staking_lives) -> f64`.
- `output::render(&records, OutputFormat::Csv)`.
- `refine_det(θ₀, simulate, measure, update, converged, max_iters) -> θ`
  for your own closed loops.

What it does NOT do
- No persistence, no interactivity, no smoothing of the fame steps.
*/

/// Deterministic refinement: θ_{t+1} = update(θ_t, measure(simulate(θ_t))).
/// Returns θ_{t+1} as soon as `converged(θ_t, θ_{t+1})` holds, otherwise the
/// last θ after `max_iters` steps.
pub fn refine_det<Theta, Data, Metrics, Sim, Meas, Upd, Conv>(
    mut theta: Theta,
    mut simulate: Sim,
    mut measure: Meas,
    mut update: Upd,
    converged: Conv,
    max_iters: usize,
) -> Theta
where
    Sim: FnMut(&Theta) -> Data,
    Meas: FnMut(&Data) -> Metrics,
    Upd: FnMut(&Theta, &Metrics) -> Theta,
    Conv: Fn(&Theta, &Theta) -> bool,
{
    for _ in 0..max_iters {
        let data = simulate(&theta);
        let pi = measure(&data);
        let theta_next = update(&theta, &pi);
        if converged(&theta, &theta_next) {
            return theta_next;
        }
        theta = theta_next;
    }
    theta
}

pub mod config;
pub mod error;
pub mod mechanics;
pub mod output;
pub mod sweep;
pub mod systems;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::BalanceConfig;
pub use error::{BalanceError, Result};
pub use mechanics::{BASE_FAME, ExchangeRules, ScoreRules, Z_MULTIPLIER, calculate_score};
pub use output::{OutputFormat, RowFilter, render};
pub use sweep::{COLUMNS, FloatRange, Grid, IntRange, Record, default_table, sweep};
