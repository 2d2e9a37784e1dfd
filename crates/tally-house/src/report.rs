use std::fmt;

use tally_core::{Category, HouseEffect, HouseEffectMap};

/// The single largest bias of one source.
#[derive(Debug, Clone, PartialEq)]
pub struct BiasSummary {
    pub source: String,
    pub category: Category,
    pub effect: f64,
    pub observation_count: usize,
}

impl fmt::Display for BiasSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {:+.2} ({} polls)",
            self.source, self.category, self.effect, self.observation_count
        )
    }
}

/// Category with the largest absolute effect. Ties go to the earlier category.
pub fn largest_bias(effect: &HouseEffect) -> Option<(Category, f64)> {
    effect
        .per_category
        .iter()
        .fold(None, |best: Option<(Category, f64)>, (category, value)| match best {
            Some((_, current)) if current.abs() >= value.abs() => best,
            _ => Some((*category, *value)),
        })
}

/// One summary per source, largest magnitude first.
pub fn bias_report(effects: &HouseEffectMap) -> Vec<BiasSummary> {
    let mut report: Vec<BiasSummary> = effects
        .values()
        .filter_map(|effect| {
            largest_bias(effect).map(|(category, value)| BiasSummary {
                source: effect.source.clone(),
                category,
                effect: value,
                observation_count: effect.observation_count,
            })
        })
        .collect();
    report.sort_by(|a, b| {
        b.effect
            .abs()
            .total_cmp(&a.effect.abs())
            .then_with(|| a.source.cmp(&b.source))
    });
    report
}
