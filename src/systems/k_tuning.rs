//! k tuning: drive the base exponent toward a target mean gain/loss ratio.
//!
//! simulate evaluates the exchange at every fame value for the current `k`,
//! measure averages `Ygained / Ylost`, update takes a proportional step
//! against the ratio error. The ratio is a step function of `k`, so the
//! acceptance test is a band, never an equality.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::mechanics::{Exchange, ExchangeRules, control};
use crate::refine_det;
use crate::systems::sdk::Outcome;

#[derive(Clone, Debug)]
pub struct Env {
    pub lives: i64,
    pub fame: Vec<i64>,
    pub rules: ExchangeRules,
}

#[derive(Clone, Copy, Debug)]
pub struct Targets {
    pub ratio: f64,
    pub tolerance: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub k_min: f64,
    pub k_max: f64,
}
impl Bounds {
    pub fn soft() -> Self {
        Self { k_min: 0.1, k_max: 10.0 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Gains { pub k: f64 }
impl Default for Gains { fn default() -> Self { Self { k: 5.0 } } }

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Obs {
    pub mean_ratio: f64,
    pub zero_gain_rows: usize,
}

pub fn exchanges(k: f64, env: &Env) -> Vec<Exchange> {
    env.fame.iter().map(|&x| env.rules.exchange(k, env.lives, x)).collect()
}

pub fn observe(xs: &[Exchange]) -> Obs {
    if xs.is_empty() {
        return Obs::default();
    }
    let sum: f64 = xs.iter().map(Exchange::ratio).sum();
    Obs {
        mean_ratio: sum / xs.len() as f64,
        zero_gain_rows: xs.iter().filter(|e| e.gained == 0).count(),
    }
}

pub fn balance_k(
    k0: f64,
    env: &Env,
    tgt: Targets,
    bnd: Bounds,
    g: Gains,
    max_iters: usize,
) -> Outcome<f64, Obs> {
    let last = Rc::new(RefCell::new(Obs::default()));
    let iters = Rc::new(RefCell::new(0usize));
    let in_band = move |o: &Obs| (o.mean_ratio - tgt.ratio).abs() <= tgt.tolerance;

    let simulate = |k: &f64| exchanges(*k, env);

    let measure = {
        let last = Rc::clone(&last);
        move |xs: &Vec<Exchange>| -> Obs {
            let o = observe(xs);
            *last.borrow_mut() = o;
            o
        }
    };

    // A k already inside the band is kept, so the returned k matches its obs.
    let update = |k: &f64, o: &Obs| -> f64 {
        if in_band(o) {
            return *k;
        }
        let next = control::p_against_error(*k, o.mean_ratio - tgt.ratio, g.k, bnd.k_min, bnd.k_max);
        debug!(k = *k, ratio = o.mean_ratio, next, "k step");
        next
    };

    let converged = {
        let last = Rc::clone(&last);
        let iters = Rc::clone(&iters);
        move |_a: &f64, _b: &f64| -> bool {
            *iters.borrow_mut() += 1;
            let o = *last.borrow();
            in_band(&o)
        }
    };

    let k = refine_det(k0.clamp(bnd.k_min, bnd.k_max), simulate, measure, update, converged, max_iters);

    let obs = observe(&exchanges(k, env));
    let out = Outcome { theta: k, obs, iters: *iters.borrow(), converged: in_band(&obs) };
    info!(k = out.theta, ratio = out.obs.mean_ratio, iters = out.iters, converged = out.converged, "k tuning finished");
    out
}
