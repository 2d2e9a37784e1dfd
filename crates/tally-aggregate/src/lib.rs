//! # tally-aggregate
//!
//! Turns house effects into a current estimate.
//!
//! - [`correction`]: removes each source's bias from its observations.
//! - [`aggregator`]: recency-weighted average over a lookback window.
//! - [`comparison`]: raw vs corrected estimate, per category.
//! - [`engine`]: the full pipeline behind one call.

pub mod aggregator;
pub mod comparison;
pub mod correction;
pub mod engine;
pub mod weighting;

pub use aggregator::{current_estimate, TemporalAggregator};
pub use comparison::{compare_estimates, CategoryShift};
pub use correction::{apply_corrections, correct};
pub use engine::{EstimatorKind, PipelineOutcome, TallyEngine};
pub use weighting::recency_weight;
