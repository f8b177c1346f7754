use thiserror::Error;

/// Rejected matcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("popularity_percent must be in 1..=100 (got {value})")]
    InvalidPopularityPercent { value: u32 },
    #[error("auto_junk_min_len must be greater than zero")]
    ZeroAutoJunkMinLen,
}

/// Rejected arguments to [`close_matches`](crate::close_matches).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CloseMatchError {
    #[error("n must be greater than zero")]
    ZeroCount,
    #[error("cutoff must be in [0.0, 1.0] and finite (got {value})")]
    CutoffOutOfRange { value: f64 },
}
