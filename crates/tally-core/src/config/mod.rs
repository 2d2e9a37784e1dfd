mod aggregation_config;
mod benchmark_config;
mod decay_config;
pub mod defaults;
mod observability_config;

pub use aggregation_config::AggregationConfig;
pub use benchmark_config::BenchmarkConfig;
pub use decay_config::DecayConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TallyError, TallyResult};

/// Top-level engine configuration. Every section falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub benchmark: BenchmarkConfig,
    pub decay: DecayConfig,
    pub aggregation: AggregationConfig,
    pub observability: ObservabilityConfig,
}

impl TallyConfig {
    /// Parse and validate a TOML document. An empty document yields defaults.
    pub fn from_toml(toml_str: &str) -> TallyResult<Self> {
        let config: TallyConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TallyResult<()> {
        self.benchmark.validate()?;
        self.decay.validate()?;
        self.aggregation.validate()
    }
}

/// Finite and strictly positive.
pub(crate) fn require_positive(field: &str, value: f64) -> TallyResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TallyError::InvalidConfig {
            field: field.to_string(),
            reason: format!("must be finite and > 0, got {value}"),
        })
    }
}
