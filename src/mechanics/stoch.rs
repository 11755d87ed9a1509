/// Stochastic mechanics: duel outcome draws.
/// Note: takes `bevy_prng::WyRand` behind a `RefCell` so callers
/// can keep closures `Fn` while mutating RNG state.
use bevy_prng::WyRand;
use rand_core::RngCore;
use std::cell::RefCell;

/// Uniform in [0, 1) from the top 53 bits.
#[inline]
pub fn unit(rng: &RefCell<WyRand>) -> f64 {
    let mut r = rng.borrow_mut();
    ((r.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p) with WyRand.
#[inline]
pub fn bernoulli(rng: &RefCell<WyRand>, p: f64) -> bool {
    unit(rng) < p.clamp(0.0, 1.0)
}
