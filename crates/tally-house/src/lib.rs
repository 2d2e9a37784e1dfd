//! # tally-house
//!
//! House effect estimation.
//!
//! - [`benchmark`]: time-local consensus per category around one observation.
//! - [`HouseEffectEstimator`]: mean deviation of each source from its benchmarks.
//! - [`DecayedHouseEffectEstimator`]: the same deviations, recency weighted.
//! - [`report`]: largest bias per source for diagnostics.

pub mod benchmark;
pub mod decay;
pub mod decayed;
pub mod estimator;
pub mod report;

pub use benchmark::{benchmark, BenchmarkCalculator, BenchmarkPolicy};
pub use decay::{decay_weight, WeightedMean};
pub use decayed::{estimate_decayed_effects, DecayedHouseEffectEstimator};
pub use estimator::{estimate_effects, HouseEffectEstimator};
pub use report::{bias_report, largest_bias, BiasSummary};
