use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryMap};

/// House effects keyed by source identifier.
pub type HouseEffectMap = BTreeMap<String, HouseEffect>;

/// Estimated systematic bias of one source.
///
/// A category is absent from `per_category` when no deviation was ever
/// recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseEffect {
    pub source: String,
    pub per_category: CategoryMap,
    /// Observations attributed to the source, regardless of category.
    pub observation_count: usize,
}

impl HouseEffect {
    pub fn effect(&self, category: Category) -> Option<f64> {
        self.per_category.get(&category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.per_category.is_empty()
    }
}

/// House effect from the time-decayed estimator, with diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedHouseEffect {
    #[serde(flatten)]
    pub effect: HouseEffect,
    /// Weight-averaged age of the contributing observations, in days.
    pub effective_age_days: f64,
    /// Sum of decay weights.
    pub total_weight: f64,
}

impl From<EnhancedHouseEffect> for HouseEffect {
    fn from(enhanced: EnhancedHouseEffect) -> Self {
        enhanced.effect
    }
}
