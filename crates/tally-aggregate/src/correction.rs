use tally_core::{AdjustedObservation, CategoryMap, HouseEffect, HouseEffectMap, Observation};

/// Correct every observation by its source's house effect.
///
/// Pure and order-preserving; inputs are left untouched.
pub fn apply_corrections(
    observations: &[Observation],
    effects: &HouseEffectMap,
) -> Vec<AdjustedObservation> {
    observations
        .iter()
        .map(|observation| correct(observation, effects.get(&observation.source)))
        .collect()
}

/// Subtract `effect` from each category it covers. Categories without an
/// effect pass through with no adjustment entry.
pub fn correct(observation: &Observation, effect: Option<&HouseEffect>) -> AdjustedObservation {
    let mut categories = observation.categories.clone();
    let mut adjustments = CategoryMap::new();

    if let Some(effect) = effect {
        for (category, value) in categories.iter_mut() {
            if let Some(bias) = effect.effect(*category) {
                *value -= bias;
                adjustments.insert(*category, -bias);
            }
        }
    }

    AdjustedObservation {
        source: observation.source.clone(),
        timestamp: observation.timestamp,
        categories,
        original_categories: observation.categories.clone(),
        adjustments,
    }
}
