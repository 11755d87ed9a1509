//! Career simulation: one duelist's fame over a run of seeded duels.
//!
//! Win: fame += Ygained(fame), score += win score at the pre-duel fame.
//! Loss: fame -= Ylost (floored at 0), score += loss score.
//! The duelist is dead, and the run ends, once fame drops below one life
//! (`base_fame`).

use std::cell::RefCell;

use bevy_prng::WyRand;
use rand_core::SeedableRng;
use serde::Serialize;
use tracing::debug;

use crate::mechanics::{ExchangeRules, ScoreRules, stoch};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CareerSpec {
    pub k: f64,
    pub lives: i64,
    pub start_fame: i64,
    pub win_rate: f64,
    pub duels: usize,
    pub seed: u64,
}

impl Default for CareerSpec {
    fn default() -> Self {
        Self { k: 1.0, lives: 1, start_fame: 3000, win_rate: 0.5, duels: 100, seed: 0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Duel {
    pub index: usize,
    pub won: bool,
    pub fame_before: i64,
    pub fame_after: i64,
    pub score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CareerReport {
    pub duels_fought: usize,
    pub wins: usize,
    pub losses: usize,
    pub final_fame: i64,
    pub peak_fame: i64,
    pub total_score: f64,
    pub died: bool,
    pub trajectory: Vec<Duel>,
}

pub fn simulate_career(spec: &CareerSpec, ex: &ExchangeRules, sc: &ScoreRules) -> CareerReport {
    let rng = RefCell::new(WyRand::from_seed(spec.seed.to_le_bytes()));
    let mut rep = CareerReport {
        final_fame: spec.start_fame,
        peak_fame: spec.start_fame,
        ..CareerReport::default()
    };
    let mut fame = spec.start_fame;

    for index in 0..spec.duels {
        if fame < ex.base_fame {
            break;
        }
        let won = stoch::bernoulli(&rng, spec.win_rate);
        let exchange = ex.exchange(spec.k, spec.lives, fame);
        let score = sc.score(won, fame, spec.lives);
        let fame_after = if won {
            fame + exchange.gained
        } else {
            (fame - exchange.lost).max(0)
        };

        rep.trajectory.push(Duel { index, won, fame_before: fame, fame_after, score });
        rep.total_score += score;
        if won { rep.wins += 1 } else { rep.losses += 1 }
        rep.peak_fame = rep.peak_fame.max(fame_after);
        fame = fame_after;
    }

    rep.duels_fought = rep.trajectory.len();
    rep.final_fame = fame;
    rep.died = fame < ex.base_fame;
    debug!(
        seed = spec.seed,
        duels = rep.duels_fought,
        final_fame = rep.final_fame,
        died = rep.died,
        "career finished"
    );
    rep
}
