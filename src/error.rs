//! Error type shared by config loading, grid validation and output rendering.
//! The sweep itself is infallible.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("invalid `{name}` range: {reason}")]
    InvalidRange { name: &'static str, reason: String },

    #[error("invalid rule `{name}`: {reason}")]
    InvalidRule { name: &'static str, reason: String },

    #[error("failed to read config file {origin}")]
    ConfigRead {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}")]
    ConfigParse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize records")]
    Serialize(#[from] serde_json::Error),
}

impl BalanceError {
    pub(crate) fn range(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRange { name, reason: reason.into() }
    }

    pub(crate) fn rule(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRule { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, BalanceError>;
