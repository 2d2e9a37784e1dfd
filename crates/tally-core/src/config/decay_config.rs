use serde::{Deserialize, Serialize};

use super::{defaults, require_positive};
use crate::errors::{TallyError, TallyResult};

/// Time-decayed house effect configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Use the time-decayed estimator instead of the rolling one.
    pub enabled: bool,
    /// Half-life of the recency weight, in days. `f64::INFINITY` disables decay.
    pub half_life_days: f64,
    /// Fixed benchmark window half-width, in days.
    pub window_days: f64,
}

impl DecayConfig {
    pub fn validate(&self) -> TallyResult<()> {
        if self.half_life_days.is_nan() || self.half_life_days <= 0.0 {
            return Err(TallyError::InvalidConfig {
                field: "decay.half_life_days".to_string(),
                reason: format!("must be > 0, got {}", self.half_life_days),
            });
        }
        require_positive("decay.window_days", self.window_days)
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_DECAY_ENABLED,
            half_life_days: defaults::DEFAULT_DECAY_HALF_LIFE_DAYS,
            window_days: defaults::DEFAULT_DECAY_WINDOW_DAYS,
        }
    }
}
