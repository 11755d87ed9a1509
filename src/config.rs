//! Configuration loading from TOML.
//!
//! Every table is optional; anything missing falls back to the stock
//! grid and rules.
//!
//! ```toml
//! [grid.k]
//! start = 1.0
//! end = 2.0
//! step = 0.1
//!
//! [grid.z]
//! start = 1
//! end = 12
//! step = 1
//!
//! [constants]
//! z_multiplier = 0.1
//! base_fame = 1000
//!
//! [score]
//! base_win = 100.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BalanceError, Result};
use crate::mechanics::{ExchangeRules, ScoreRules};
use crate::sweep::{Grid, Record, sweep};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BalanceConfig {
    pub grid: Grid,
    pub constants: ExchangeRules,
    pub score: ScoreRules,
}

impl BalanceConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| BalanceError::ConfigRead {
            origin: origin.clone(),
            source,
        })?;
        let cfg = Self::parse(&contents, &origin)?;
        debug!(path = %origin, cells = cfg.grid.cells(), "loaded config");
        Ok(cfg)
    }

    /// Parse and validate TOML text. `origin` only labels errors.
    pub fn parse(contents: &str, origin: &str) -> Result<Self> {
        let cfg: BalanceConfig = toml::from_str(contents).map_err(|source| {
            BalanceError::ConfigParse { origin: origin.to_string(), source }
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Stock config when `path` is `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.constants.validate()?;
        self.score.validate()
    }

    pub fn sweep(&self) -> Vec<Record> {
        sweep(&self.grid, &self.constants, &self.score)
    }
}
