//! Fame exchange mechanics: stake-adjusted exponent and winner/loser amounts.
//!
//! ```text
//! k_total = k + z_multiplier * (z - 1)
//! denom   = floor((X / base_fame + 1) / k_total)
//! gained  = 0 if denom == 0 else trunc(base_fame / denom * z)
//! lost    = base_fame * z
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};

/// Exponent bump per stake above the first.
pub const Z_MULTIPLIER: f64 = 0.1;
/// Fame carried by a single life.
pub const BASE_FAME: i64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExchangeRules {
    pub z_multiplier: f64,
    pub base_fame: i64,
}

impl Default for ExchangeRules {
    fn default() -> Self {
        Self { z_multiplier: Z_MULTIPLIER, base_fame: BASE_FAME }
    }
}

impl ExchangeRules {
    pub fn validate(&self) -> Result<()> {
        if !self.z_multiplier.is_finite() || self.z_multiplier < 0.0 {
            return Err(BalanceError::rule("z_multiplier", "must be finite and >= 0"));
        }
        if self.base_fame <= 0 {
            return Err(BalanceError::rule("base_fame", "must be > 0"));
        }
        Ok(())
    }

    /// Full exchange for one `(k, z, X)` cell.
    pub fn exchange(&self, k: f64, lives: i64, fame: i64) -> Exchange {
        let k_total = k_total(k, lives, self.z_multiplier);
        let denom = denom(fame, self.base_fame, k_total);
        Exchange {
            k_total,
            denom,
            gained: gained(denom, self.base_fame, lives),
            lost: lost(self.base_fame, lives),
        }
    }
}

/// One evaluated exchange. `k_total` is kept unrounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exchange {
    pub k_total: f64,
    pub denom: i64,
    pub gained: i64,
    pub lost: i64,
}

impl Exchange {
    /// Winner gain relative to loser loss (0 when nothing is at stake).
    pub fn ratio(&self) -> f64 {
        if self.lost == 0 { 0.0 } else { self.gained as f64 / self.lost as f64 }
    }
}

#[inline]
pub fn k_total(k: f64, lives: i64, z_multiplier: f64) -> f64 {
    k + z_multiplier * (lives - 1) as f64
}

/// Explicit floor, not truncation.
#[inline]
pub fn denom(fame: i64, base_fame: i64, k_total: f64) -> i64 {
    ((fame as f64 / base_fame as f64 + 1.0) / k_total).floor() as i64
}

#[inline]
pub fn gained(denom: i64, base_fame: i64, lives: i64) -> i64 {
    if denom == 0 {
        return 0;
    }
    (base_fame as f64 / denom as f64 * lives as f64) as i64
}

#[inline]
pub fn lost(base_fame: i64, lives: i64) -> i64 {
    base_fame * lives
}

/// One fractional digit, for display and storage.
#[inline]
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
