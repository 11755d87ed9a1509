// demos/tune_k.rs
// Run with:
//   cargo run --example tune_k --features "system-k_tuning"

use fame_balance::systems::k_tuning::*;
use fame_balance::{ExchangeRules, Grid};

fn main() {
    let fame = Grid::default().fame.values();

    println!("== k per stake for a 0.2 mean gain/loss ratio ==");
    for lives in 1..=4 {
        let env = Env { lives, fame: fame.clone(), rules: ExchangeRules::default() };
        let tgt = Targets { ratio: 0.2, tolerance: 0.01 };
        let out = balance_k(1.0, &env, tgt, Bounds::soft(), Gains::default(), 1_000);
        println!(
            "z={lives:>2}  k={:.3}  ratio={:.4}  iters={:>4}  converged={}",
            out.theta, out.obs.mean_ratio, out.iters, out.converged
        );
    }
}
