use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, vectorizer::keywords::DEFAULT_TOP_N};

/// Environment variable overriding `ScorerConfig::top_n`
pub const TOP_N_ENV: &str = "LEXICAL_FIT_TOP_N";

/// Scorer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// maximum number of matching keywords per report
    pub top_n: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }
}

impl ScorerConfig {
    /// Load from the environment (and `.env` if present); unset keys keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so callers and tests don't touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(TOP_N_ENV) {
            config.top_n = value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidNumber { key: TOP_N_ENV, value })?;
        }
        Ok(config)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
