//! TallyEngine: validate → estimate house effects → correct → aggregate.
//!
//! Empty input is a no-data outcome (`Ok` with no estimate); malformed input
//! is an error. Callers can tell the two apart without inspecting messages.

use serde::Serialize;
use tracing::info;

use tally_core::config::TallyConfig;
use tally_core::errors::TallyResult;
use tally_core::observation::{latest_timestamp, validate_all};
use tally_core::traits::{IBiasEstimator, ISeatProjector, SeatAllocation};
use tally_core::{AdjustedObservation, AggregateEstimate, HouseEffectMap, Observation};
use tally_house::{DecayedHouseEffectEstimator, HouseEffectEstimator};
use tally_observability::{aggregation_span, correction_span, estimate_span};

use crate::aggregator::TemporalAggregator;
use crate::comparison::{compare_estimates, CategoryShift};
use crate::correction::apply_corrections;

/// Which house effect estimator the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorKind {
    /// Plain mean over cascading rolling benchmarks.
    Rolling,
    /// Recency-weighted mean over a fixed benchmark window.
    Decayed,
}

impl EstimatorKind {
    pub fn from_config(config: &TallyConfig) -> Self {
        if config.decay.enabled {
            EstimatorKind::Decayed
        } else {
            EstimatorKind::Rolling
        }
    }

    fn build(self, config: &TallyConfig) -> Box<dyn IBiasEstimator> {
        match self {
            EstimatorKind::Rolling => Box::new(HouseEffectEstimator::with_config(&config.benchmark)),
            EstimatorKind::Decayed => {
                Box::new(DecayedHouseEffectEstimator::with_config(&config.decay))
            }
        }
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineOutcome {
    pub effects: HouseEffectMap,
    pub adjusted: Vec<AdjustedObservation>,
    /// Aggregate of the uncorrected observations.
    pub raw_estimate: Option<AggregateEstimate>,
    /// Aggregate of the corrected observations.
    pub estimate: Option<AggregateEstimate>,
    /// Corrected minus raw, per category.
    pub shifts: Vec<CategoryShift>,
}

impl PipelineOutcome {
    pub fn has_estimate(&self) -> bool {
        self.estimate.is_some()
    }
}

pub struct TallyEngine {
    config: TallyConfig,
    estimator: Box<dyn IBiasEstimator>,
}

impl TallyEngine {
    /// Build an engine, choosing the estimator from `config.decay.enabled`.
    pub fn new(config: TallyConfig) -> TallyResult<Self> {
        let kind = EstimatorKind::from_config(&config);
        Self::with_kind(config, kind)
    }

    pub fn with_kind(config: TallyConfig, kind: EstimatorKind) -> TallyResult<Self> {
        config.validate()?;
        let estimator = kind.build(&config);
        Ok(Self { config, estimator })
    }

    /// Use a caller-supplied estimator.
    pub fn with_estimator(
        config: TallyConfig,
        estimator: Box<dyn IBiasEstimator>,
    ) -> TallyResult<Self> {
        config.validate()?;
        Ok(Self { config, estimator })
    }

    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    pub fn estimator_name(&self) -> &'static str {
        self.estimator.name()
    }

    /// Run the full pipeline over one observation set.
    pub fn run(&self, observations: &[Observation]) -> TallyResult<PipelineOutcome> {
        validate_all(observations)?;
        let Some(reference) = latest_timestamp(observations) else {
            info!("no observations, nothing to estimate");
            return Ok(PipelineOutcome::default());
        };

        let effects = {
            let _span = estimate_span!(self.estimator.name(), observations.len()).entered();
            self.estimator.estimate(observations, reference)?
        };

        let adjusted = {
            let _span = correction_span!(observations.len(), effects.len()).entered();
            apply_corrections(observations, &effects)
        };

        let aggregator = TemporalAggregator::new(self.config.aggregation.clone());
        let (raw_estimate, estimate) = {
            let _span = aggregation_span!(
                self.config.aggregation.weighting,
                self.config.aggregation.lookback_days
            )
            .entered();
            (aggregator.estimate(observations), aggregator.estimate(&adjusted))
        };

        let shifts = match (&raw_estimate, &estimate) {
            (Some(raw), Some(corrected)) => compare_estimates(raw, corrected),
            _ => Vec::new(),
        };

        info!(
            estimator = self.estimator.name(),
            observations = observations.len(),
            sources = effects.len(),
            has_estimate = estimate.is_some(),
            "pipeline complete"
        );

        Ok(PipelineOutcome {
            effects,
            adjusted,
            raw_estimate,
            estimate,
            shifts,
        })
    }

    /// Forward the corrected estimate to a seat projector.
    ///
    /// `Ok(None)` when the outcome carries no estimate.
    pub fn project_seats(
        &self,
        outcome: &PipelineOutcome,
        projector: &dyn ISeatProjector,
    ) -> TallyResult<Option<SeatAllocation>> {
        outcome
            .estimate
            .as_ref()
            .map(|estimate| projector.project(&estimate.categories))
            .transpose()
    }
}
