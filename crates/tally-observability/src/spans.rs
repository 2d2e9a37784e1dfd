//! Span definitions per pipeline stage.
//!
//! Each span carries the stage's input size via the `tracing` crate.

/// Create a house-effect estimation span.
#[macro_export]
macro_rules! estimate_span {
    ($estimator:expr, $observation_count:expr) => {
        tracing::info_span!(
            "tally.estimate",
            estimator = %$estimator,
            observation_count = $observation_count
        )
    };
}

/// Create a bias correction span.
#[macro_export]
macro_rules! correction_span {
    ($observation_count:expr, $source_count:expr) => {
        tracing::info_span!(
            "tally.correction",
            observation_count = $observation_count,
            source_count = $source_count
        )
    };
}

/// Create an aggregation span.
#[macro_export]
macro_rules! aggregation_span {
    ($weighting:expr, $lookback_days:expr) => {
        tracing::info_span!(
            "tally.aggregation",
            weighting = %$weighting,
            lookback_days = $lookback_days
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATE: &str = "tally.estimate";
    pub const CORRECTION: &str = "tally.correction";
    pub const AGGREGATION: &str = "tally.aggregation";
}
