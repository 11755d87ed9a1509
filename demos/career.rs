// demos/career.rs
// Run with:
//   cargo run --example career --features "system-career_sim"

use fame_balance::systems::career_sim::*;
use fame_balance::{ExchangeRules, ScoreRules};

fn main() {
    let ex = ExchangeRules::default();
    let sc = ScoreRules::default();

    println!("== 200 duels at a 55% win rate, ten seeds per k ==");
    for k in [1.0, 1.5, 2.0] {
        let mut deaths = 0;
        let mut fame_sum = 0;
        for seed in 0..10 {
            let spec = CareerSpec { k, win_rate: 0.55, duels: 200, seed, ..CareerSpec::default() };
            let rep = simulate_career(&spec, &ex, &sc);
            deaths += rep.died as usize;
            fame_sum += rep.final_fame;
        }
        println!("k={k:.1}  deaths={deaths}/10  mean final fame={}", fame_sum / 10);
    }
}
