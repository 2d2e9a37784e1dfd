use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use tally_core::config::BenchmarkConfig;
use tally_core::errors::TallyResult;
use tally_core::observation::validate_all;
use tally_core::traits::IBiasEstimator;
use tally_core::{Category, HouseEffect, HouseEffectMap, Observation};

use crate::benchmark::{deviations, BenchmarkCalculator, BenchmarkPolicy};
use crate::decay::WeightedMean;

/// House effect estimator: the plain mean of each source's deviations from
/// its rolling benchmarks.
#[derive(Debug, Clone, Default)]
pub struct HouseEffectEstimator {
    policy: BenchmarkPolicy,
}

impl HouseEffectEstimator {
    /// Cascading 14/28/42-day benchmark, 5 observations minimum.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &BenchmarkConfig) -> Self {
        Self {
            policy: BenchmarkPolicy::cascade(config),
        }
    }

    pub fn with_policy(policy: BenchmarkPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &BenchmarkPolicy {
        &self.policy
    }

    /// Estimate effects for every source with at least one deviation.
    ///
    /// Assumes validated input; see [`IBiasEstimator::estimate`] for the
    /// checked entry point.
    pub fn estimate_effects(&self, observations: &[Observation]) -> HouseEffectMap {
        let tallies = tally_deviations(observations, &self.policy, |_| (1.0, 0.0));
        let effects: HouseEffectMap = tallies
            .into_iter()
            .filter_map(|(source, tally)| {
                tally
                    .into_effect(source.clone())
                    .map(|effect| (source, effect))
            })
            .collect();
        debug!(
            observations = observations.len(),
            sources = effects.len(),
            "house effects estimated"
        );
        effects
    }
}

impl IBiasEstimator for HouseEffectEstimator {
    fn name(&self) -> &'static str {
        "rolling"
    }

    fn estimate(
        &self,
        observations: &[Observation],
        _reference: DateTime<Utc>,
    ) -> TallyResult<HouseEffectMap> {
        validate_all(observations)?;
        Ok(self.estimate_effects(observations))
    }
}

/// House effects with the default cascading benchmark.
pub fn estimate_effects(observations: &[Observation]) -> HouseEffectMap {
    HouseEffectEstimator::new().estimate_effects(observations)
}

/// Deviations and weights gathered for one source.
#[derive(Debug, Default)]
pub(crate) struct SourceTally {
    pub observation_count: usize,
    pub per_category: BTreeMap<Category, WeightedMean>,
    pub age: WeightedMean,
}

impl SourceTally {
    /// `None` when no deviation was recorded for any category.
    pub fn into_effect(self, source: String) -> Option<HouseEffect> {
        let per_category: BTreeMap<Category, f64> = self
            .per_category
            .iter()
            .filter_map(|(category, mean)| mean.mean().map(|m| (*category, m)))
            .collect();
        if per_category.is_empty() {
            return None;
        }
        Some(HouseEffect {
            source,
            per_category,
            observation_count: self.observation_count,
        })
    }
}

/// Walk every observation in canonical order, compute its deviations from
/// its benchmark, and accumulate them per source.
///
/// `weigh` returns `(weight, age_days)` for an observation.
pub(crate) fn tally_deviations(
    observations: &[Observation],
    policy: &BenchmarkPolicy,
    weigh: impl Fn(&Observation) -> (f64, f64),
) -> BTreeMap<String, SourceTally> {
    let calculator = BenchmarkCalculator::new(observations);
    let mut tallies: BTreeMap<String, SourceTally> = BTreeMap::new();

    for &observation in calculator.observations() {
        let tally = tallies.entry(observation.source.clone()).or_default();
        tally.observation_count += 1;

        let (weight, age) = weigh(observation);
        tally.age.push(age, weight);

        let Some(benchmark) = calculator.benchmark(observation, policy) else {
            continue;
        };
        for (category, deviation) in deviations(observation, &benchmark) {
            tally
                .per_category
                .entry(category)
                .or_default()
                .push(deviation, weight);
        }
    }

    tallies
}
