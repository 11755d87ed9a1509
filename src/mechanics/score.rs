/// Round score mechanics: base points scaled by fame and stake multipliers.
use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreRules {
    pub base_win: f64,
    pub base_loss: f64,
    /// Fame at which the fame multiplier starts climbing.
    pub fame_floor: i64,
    /// Fame per multiplier step.
    pub fame_step: i64,
    /// Steps are divided by this (10 ⇒ +0.1 per step).
    pub fame_step_divisor: f64,
    /// Multiplier added per stake above the first.
    pub stake_bonus: f64,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            base_win: 100.0,
            base_loss: 10.0,
            fame_floor: 3000,
            fame_step: 1000,
            fame_step_divisor: 10.0,
            stake_bonus: 0.1,
        }
    }
}

impl ScoreRules {
    pub fn validate(&self) -> Result<()> {
        if self.fame_step <= 0 {
            return Err(BalanceError::rule("fame_step", "must be > 0"));
        }
        if self.fame_step_divisor == 0.0 || !self.fame_step_divisor.is_finite() {
            return Err(BalanceError::rule("fame_step_divisor", "must be finite and non-zero"));
        }
        Ok(())
    }

    /// `max(1, 1 + floor((fame - floor) / step) / divisor)`.
    #[inline]
    pub fn fame_multiplier(&self, fame: i64) -> f64 {
        let steps = (fame - self.fame_floor).div_euclid(self.fame_step);
        (1.0 + steps as f64 / self.fame_step_divisor).max(1.0)
    }

    #[inline]
    pub fn staking_multiplier(&self, lives: i64) -> f64 {
        1.0 + (lives - 1) as f64 * self.stake_bonus
    }

    pub fn score(&self, win: bool, fame: i64, lives: i64) -> f64 {
        let base = if win { self.base_win } else { self.base_loss };
        base * self.fame_multiplier(fame) * self.staking_multiplier(lives)
    }
}

/// Score under the default rules.
pub fn calculate_score(win: bool, fame: i64, staking_lives: i64) -> f64 {
    ScoreRules::default().score(win, fame, staking_lives)
}
