//! Rolling benchmark: the per-category average of every observation, from any
//! source, inside a symmetric window around a target's timestamp.
//!
//! The target itself counts toward its own benchmark.

use chrono::{DateTime, Utc};

use tally_core::config::{BenchmarkConfig, DecayConfig};
use tally_core::constants::WIDENED_BENCHMARK_WINDOWS_DAYS;
use tally_core::observation::{distance_days, sorted_canonical};
use tally_core::{Benchmark, Category, CategoryMap, Observation};

/// How the benchmark window is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BenchmarkPolicy {
    /// Start at `window_days`; widen to 28 then 42 days while fewer than
    /// `min_observations` fall inside. The 42-day selection is final.
    Cascade {
        window_days: f64,
        min_observations: usize,
    },
    /// One window. If it is empty the target alone is the benchmark.
    Fixed { window_days: f64 },
}

impl BenchmarkPolicy {
    pub fn cascade(config: &BenchmarkConfig) -> Self {
        BenchmarkPolicy::Cascade {
            window_days: config.window_days,
            min_observations: config.min_observations,
        }
    }

    pub fn fixed(config: &DecayConfig) -> Self {
        BenchmarkPolicy::Fixed {
            window_days: config.window_days,
        }
    }
}

impl Default for BenchmarkPolicy {
    fn default() -> Self {
        Self::cascade(&BenchmarkConfig::default())
    }
}

/// Benchmark lookups over one observation set, sorted once up front.
pub struct BenchmarkCalculator<'a> {
    sorted: Vec<&'a Observation>,
}

impl<'a> BenchmarkCalculator<'a> {
    pub fn new(observations: &'a [Observation]) -> Self {
        Self {
            sorted: sorted_canonical(observations),
        }
    }

    /// Observations in canonical order.
    pub fn observations(&self) -> &[&'a Observation] {
        &self.sorted
    }

    /// Observations with `|t - center| <= days`, inclusive.
    pub fn window(&self, center: DateTime<Utc>, days: f64) -> &[&'a Observation] {
        let start = self
            .sorted
            .partition_point(|o| o.timestamp < center && distance_days(center, o.timestamp) > days);
        let end = self
            .sorted
            .partition_point(|o| o.timestamp <= center || distance_days(o.timestamp, center) <= days);
        &self.sorted[start..end]
    }

    /// Benchmark for `target` under `policy`.
    ///
    /// `None` only when the final window of a cascade is empty.
    pub fn benchmark(&self, target: &Observation, policy: &BenchmarkPolicy) -> Option<Benchmark> {
        match *policy {
            BenchmarkPolicy::Cascade {
                window_days,
                min_observations,
            } => {
                // Only windows wider than the primary one count as widening.
                let mut windows = std::iter::once(window_days)
                    .chain(
                        WIDENED_BENCHMARK_WINDOWS_DAYS
                            .into_iter()
                            .filter(move |days| *days > window_days),
                    )
                    .peekable();
                while let Some(days) = windows.next() {
                    let selected = self.window(target.timestamp, days);
                    if selected.len() >= min_observations || windows.peek().is_none() {
                        if selected.is_empty() {
                            return None;
                        }
                        return Some(average(selected.iter().copied()));
                    }
                }
                None
            }
            BenchmarkPolicy::Fixed { window_days } => {
                let selected = self.window(target.timestamp, window_days);
                if selected.is_empty() {
                    Some(average(std::iter::once(target)))
                } else {
                    Some(average(selected.iter().copied()))
                }
            }
        }
    }
}

/// Cascading benchmark for one target over an unsorted collection.
///
/// Callers computing many benchmarks over the same set should build a
/// [`BenchmarkCalculator`] once instead.
pub fn benchmark(
    target: &Observation,
    observations: &[Observation],
    window_days: f64,
    min_observations: usize,
) -> Option<Benchmark> {
    BenchmarkCalculator::new(observations).benchmark(
        target,
        &BenchmarkPolicy::Cascade {
            window_days,
            min_observations,
        },
    )
}

/// Per-category mean over the observations that define the category.
fn average<'o>(observations: impl Iterator<Item = &'o Observation> + Clone) -> Benchmark {
    let mut result = Benchmark::new();
    for category in Category::ALL {
        let (sum, count) = observations
            .clone()
            .filter_map(|o| o.categories.get(&category))
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        if count > 0 {
            result.insert(category, sum / count as f64);
        }
    }
    result
}

/// `observed - benchmark` for every category defined on both sides.
pub fn deviations(observation: &Observation, benchmark: &Benchmark) -> CategoryMap {
    observation
        .categories
        .iter()
        .filter_map(|(category, value)| {
            benchmark
                .get(category)
                .map(|reference| (*category, value - reference))
        })
        .collect()
}
