use std::time::Duration;

use thiserror::Error;

/// Invalid component configuration, rejected at construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("typewriter needs at least one phrase")]
    EmptyPhrases,
    #[error("{field} must be a non-negative, finite duration (got {value})")]
    InvalidDuration { field: &'static str, value: f64 },
    #[error("visibility threshold must be within [0, 1] (got {0})")]
    ThresholdOutOfRange(f32),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ObserveError {
    #[error("viewport intersection is not supported by this host")]
    Unsupported,
}

/// Converts a seconds value from configuration into a `Duration`, rounded
/// to whole milliseconds.
pub fn duration_from_secs(field: &'static str, secs: f32) -> Result<Duration, ConfigError> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(ConfigError::InvalidDuration {
            field,
            value: secs as f64,
        });
    }
    Ok(Duration::from_millis((f64::from(secs) * 1000.0).round() as u64))
}

/// Converts a millisecond count from configuration into a `Duration`.
pub fn duration_from_millis(field: &'static str, ms: i64) -> Result<Duration, ConfigError> {
    u64::try_from(ms)
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDuration {
            field,
            value: ms as f64,
        })
}
