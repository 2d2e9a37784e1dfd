//! Weighted temporal aggregation.
//!
//! Selects everything within `lookback_days` of the latest observation and
//! averages each category with recency weights. A category's denominator
//! only sums weights of observations that define it.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use tally_core::config::AggregationConfig;
use tally_core::observation::{age_days, latest_timestamp};
use tally_core::{AggregateEstimate, Category, CategoryMap, Observed, Weighting};
use tally_house::WeightedMean;

use crate::weighting::recency_weight;

#[derive(Debug, Clone, Default)]
pub struct TemporalAggregator {
    config: AggregationConfig,
}

impl TemporalAggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    pub fn with_weighting(lookback_days: f64, weighting: Weighting, half_life_days: f64) -> Self {
        Self::new(AggregationConfig {
            lookback_days,
            weighting,
            half_life_days,
        })
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Human-readable summary of the window, e.g.
    /// `"last 14 days, exponential weighting, half-life 7 days"`.
    pub fn window_description(&self) -> String {
        let AggregationConfig {
            lookback_days,
            weighting,
            half_life_days,
        } = self.config;
        match weighting {
            Weighting::Exponential => format!(
                "last {lookback_days} days, {weighting} weighting, half-life {half_life_days} days"
            ),
            _ => format!("last {lookback_days} days, {weighting} weighting"),
        }
    }

    /// Current estimate, or `None` when there is nothing to aggregate.
    pub fn estimate<O: Observed>(&self, observations: &[O]) -> Option<AggregateEstimate> {
        let as_of = latest_timestamp(observations)?;
        let AggregationConfig {
            lookback_days,
            weighting,
            half_life_days,
        } = self.config;

        let mut selected: Vec<(&O, f64)> = observations
            .iter()
            .filter_map(|o| {
                let age = age_days(as_of, o.timestamp());
                (age <= lookback_days).then_some((o, age))
            })
            .collect();
        if selected.is_empty() {
            return None;
        }
        selected.sort_by(|(a, _), (b, _)| {
            a.timestamp()
                .cmp(&b.timestamp())
                .then_with(|| a.source().cmp(b.source()))
        });

        let mut sums: BTreeMap<Category, WeightedMean> = BTreeMap::new();
        let mut contributing_sources = BTreeSet::new();
        for (observation, age) in &selected {
            let weight = recency_weight(weighting, *age, lookback_days, half_life_days);
            contributing_sources.insert(observation.source().to_string());
            for (category, value) in observation.categories() {
                sums.entry(*category).or_default().push(*value, weight);
            }
        }

        // Zero total weight (every contributor on the linear boundary) drops the category.
        let categories: CategoryMap = sums
            .into_iter()
            .filter_map(|(category, mean)| mean.mean().map(|m| (category, m)))
            .collect();

        debug!(
            %as_of,
            selected = selected.len(),
            categories = categories.len(),
            %weighting,
            "aggregate estimate computed"
        );

        Some(AggregateEstimate {
            as_of,
            window_description: self.window_description(),
            observation_count: selected.len(),
            categories,
            contributing_sources,
        })
    }
}

/// Current estimate with an explicit aggregation config.
pub fn current_estimate<O: Observed>(
    observations: &[O],
    config: &AggregationConfig,
) -> Option<AggregateEstimate> {
    TemporalAggregator::new(config.clone()).estimate(observations)
}
