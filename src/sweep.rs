//! Sweep-and-score engine.
//!
//! Walks the cross product `k × z × X` (k outer, z middle, X inner) and emits
//! one [`Record`] per cell. Pure: no validation and no I/O happen here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BalanceError, Result};
use crate::mechanics::{ExchangeRules, ScoreRules, round1};

/// Column names in output order.
pub const COLUMNS: [&str; 8] = [
    "k",
    "k_total",
    "z",
    "Xcurrent",
    "Ygained",
    "Ylost",
    "Score Won",
    "Score Loss",
];

/// Inclusive float range. Value `i` is `start + i * step`, never accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FloatRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl FloatRange {
    pub fn len(&self) -> usize {
        if self.step <= 0.0 || self.end < self.start {
            return 0;
        }
        ((self.end - self.start) / self.step + 1e-9).floor() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.start + i as f64 * self.step).collect()
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return Err(BalanceError::range(name, "bounds must be finite"));
        }
        if self.step <= 0.0 {
            return Err(BalanceError::range(name, format!("step {} must be > 0", self.step)));
        }
        if self.end < self.start {
            return Err(BalanceError::range(
                name,
                format!("end {} is below start {}", self.end, self.start),
            ));
        }
        Ok(())
    }
}

/// Inclusive integer range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntRange {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl IntRange {
    pub fn len(&self) -> usize {
        if self.step <= 0 || self.end < self.start {
            return 0;
        }
        ((self.end - self.start) / self.step) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> Vec<i64> {
        (0..self.len() as i64).map(|i| self.start + i * self.step).collect()
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        if self.step <= 0 {
            return Err(BalanceError::range(name, format!("step {} must be > 0", self.step)));
        }
        if self.end < self.start {
            return Err(BalanceError::range(
                name,
                format!("end {} is below start {}", self.end, self.start),
            ));
        }
        Ok(())
    }
}

/// The three swept axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Grid {
    pub k: FloatRange,
    pub z: IntRange,
    pub fame: IntRange,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            k: FloatRange { start: 1.0, end: 2.0, step: 0.1 },
            z: IntRange { start: 1, end: 12, step: 1 },
            fame: IntRange { start: 3000, end: 14000, step: 1000 },
        }
    }
}

impl Grid {
    /// Number of records a sweep over this grid produces.
    pub fn cells(&self) -> usize {
        self.k.len() * self.z.len() * self.fame.len()
    }

    /// Rejects ranges that would make `k_total <= 0` or the sweep empty.
    pub fn validate(&self) -> Result<()> {
        self.k.validate("k")?;
        self.z.validate("z")?;
        self.fame.validate("fame")?;
        if self.k.start <= 0.0 {
            return Err(BalanceError::range("k", "start must be > 0"));
        }
        if self.z.start < 1 {
            return Err(BalanceError::range("z", "start must be >= 1"));
        }
        Ok(())
    }
}

/// One table row. Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Record {
    pub k: f64,
    pub k_total: f64,
    pub z: i64,
    #[serde(rename = "Xcurrent")]
    pub x_current: i64,
    #[serde(rename = "Ygained")]
    pub y_gained: i64,
    #[serde(rename = "Ylost")]
    pub y_lost: i64,
    #[serde(rename = "Score Won")]
    pub score_won: f64,
    #[serde(rename = "Score Loss")]
    pub score_loss: f64,
}

/// Evaluate a single cell.
pub fn score_cell(k: f64, z: i64, fame: i64, ex: &ExchangeRules, sc: &ScoreRules) -> Record {
    let exchange = ex.exchange(k, z, fame);
    Record {
        k: round1(k),
        k_total: round1(exchange.k_total),
        z,
        x_current: fame,
        y_gained: exchange.gained,
        y_lost: exchange.lost,
        score_won: sc.score(true, fame, z),
        score_loss: sc.score(false, fame, z),
    }
}

/// Full sweep in nested order: k outer, z middle, fame inner.
pub fn sweep(grid: &Grid, ex: &ExchangeRules, sc: &ScoreRules) -> Vec<Record> {
    let ks = grid.k.values();
    let zs = grid.z.values();
    let fames = grid.fame.values();

    let mut out = Vec::with_capacity(ks.len() * zs.len() * fames.len());
    for &k in &ks {
        for &z in &zs {
            for &x in &fames {
                out.push(score_cell(k, z, x, ex, sc));
            }
        }
    }
    debug!(k = ks.len(), z = zs.len(), fame = fames.len(), rows = out.len(), "sweep complete");
    out
}

/// Sweep the default grid with the default rules.
pub fn default_table() -> Vec<Record> {
    sweep(&Grid::default(), &ExchangeRules::default(), &ScoreRules::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_axes_have_expected_lengths() {
        let g = Grid::default();
        assert_eq!(g.k.len(), 11);
        assert_eq!(g.z.len(), 12);
        assert_eq!(g.fame.len(), 12);
        assert_eq!(g.cells(), 1584);
    }

    #[test]
    fn float_values_are_not_accumulated() {
        let ks = Grid::default().k.values();
        assert_eq!(ks[0], 1.0);
        assert_eq!(ks[10], 2.0);
        assert_eq!(ks[3], 1.0 + 3.0 * 0.1);
    }

    #[test]
    fn k_carries_multiplied_step_error_into_denom() {
        // k = 1.0 + 7 * 0.1 sits just above 1.7, so (8 + 1) / k_total lands
        // below 5 and floors to 4 instead of 5.
        let ex = ExchangeRules::default();
        let sc = ScoreRules::default();
        let k = Grid::default().k.values()[7];
        let r = score_cell(k, 2, 8000, &ex, &sc);
        assert_eq!(r.k, 1.7);
        assert_eq!(r.k_total, 1.8);
        assert_eq!(r.y_gained, 500);

        let r = score_cell(k, 8, 11000, &ex, &sc);
        assert_eq!(r.y_gained, 2000);
    }

    #[test]
    fn uneven_int_range_stops_before_end() {
        let r = IntRange { start: 1, end: 10, step: 4 };
        assert_eq!(r.values(), vec![1, 5, 9]);
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let mut g = Grid::default();
        g.k.step = 0.0;
        assert!(g.validate().is_err());

        let mut g = Grid::default();
        g.z.start = 0;
        assert!(g.validate().is_err());

        let mut g = Grid::default();
        g.fame.end = 100;
        assert!(g.validate().is_err());

        let mut g = Grid::default();
        g.k.start = 0.0;
        assert!(g.validate().is_err());
    }
}
