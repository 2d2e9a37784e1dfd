//! # tally-core
//!
//! Foundation crate for the Tally house-effect engine.
//! Defines the observation model, derived result types, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observation;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use category::{Category, CategoryMap};
pub use config::TallyConfig;
pub use errors::{TallyError, TallyResult};
pub use models::{
    AggregateEstimate, Benchmark, EnhancedHouseEffect, HouseEffect, HouseEffectMap, Weighting,
};
pub use observation::{AdjustedObservation, Observation, Observed};
