use chrono::{DateTime, Utc};

use crate::errors::TallyResult;
use crate::models::HouseEffectMap;
use crate::observation::Observation;

/// Per-source systematic bias estimation.
pub trait IBiasEstimator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Estimate one house effect per source from the full observation set.
    ///
    /// `reference` is the shared "now" all ages are measured from, normally
    /// the latest timestamp in `observations`. Estimators that do not weight
    /// by age ignore it.
    fn estimate(
        &self,
        observations: &[Observation],
        reference: DateTime<Utc>,
    ) -> TallyResult<HouseEffectMap>;
}
