use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryMap};

/// A single current estimate per category over a lookback window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEstimate {
    pub as_of: DateTime<Utc>,
    pub window_description: String,
    pub observation_count: usize,
    pub categories: CategoryMap,
    pub contributing_sources: BTreeSet<String>,
}

impl AggregateEstimate {
    pub fn value(&self, category: Category) -> Option<f64> {
        self.categories.get(&category).copied()
    }

    /// Categories ordered by descending estimate.
    pub fn ranked(&self) -> Vec<(Category, f64)> {
        let mut ranked: Vec<(Category, f64)> =
            self.categories.iter().map(|(c, v)| (*c, *v)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}
