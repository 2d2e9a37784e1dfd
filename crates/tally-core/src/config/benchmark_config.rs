use serde::{Deserialize, Serialize};

use super::{defaults, require_positive};
use crate::errors::TallyResult;

/// Rolling benchmark configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Primary half-width of the symmetric window, in days.
    pub window_days: f64,
    /// Observations required before the window stops widening.
    pub min_observations: usize,
}

impl BenchmarkConfig {
    pub fn validate(&self) -> TallyResult<()> {
        require_positive("benchmark.window_days", self.window_days)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_BENCHMARK_WINDOW_DAYS,
            min_observations: defaults::DEFAULT_MIN_OBSERVATIONS,
        }
    }
}
