mod aggregate_estimate;
mod house_effect;
mod weighting;

pub use aggregate_estimate::AggregateEstimate;
pub use house_effect::{EnhancedHouseEffect, HouseEffect, HouseEffectMap};
pub use weighting::Weighting;

use crate::category::CategoryMap;

/// Time-local consensus value per category for one target observation.
/// Computed on demand and never cached.
pub type Benchmark = CategoryMap;
