use thiserror::Error;

/// Anomalies detected while scoring a pair.
///
/// These never reach callers of the public scoring functions; they are logged
/// and replaced by the zero/empty result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("non-finite {stage} value: {value}")]
    NonFinite { stage: &'static str, value: f64 },

    #[error("similarity {0} is outside [0, 1]")]
    OutOfRange(f64),
}

pub type ScoreResult<T> = Result<T, ScoreError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}
