use serde::{Deserialize, Serialize};

use super::{defaults, require_positive};
use crate::errors::TallyResult;
use crate::models::Weighting;

/// Weighted temporal aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Trailing window measured back from the latest observation, in days.
    pub lookback_days: f64,
    pub weighting: Weighting,
    /// Half-life for `Weighting::Exponential`, in days.
    pub half_life_days: f64,
}

impl AggregationConfig {
    pub fn validate(&self) -> TallyResult<()> {
        require_positive("aggregation.lookback_days", self.lookback_days)?;
        require_positive("aggregation.half_life_days", self.half_life_days)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
            weighting: Weighting::default(),
            half_life_days: defaults::DEFAULT_AGGREGATION_HALF_LIFE_DAYS,
        }
    }
}
