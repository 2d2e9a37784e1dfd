use serde::{Deserialize, Serialize};

use tally_core::{AggregateEstimate, Category};

/// How much correction moved one category's estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShift {
    pub category: Category,
    pub raw: f64,
    pub corrected: f64,
    /// `corrected - raw`.
    pub shift: f64,
}

/// Per-category shift for categories present in both estimates, in category order.
pub fn compare_estimates(raw: &AggregateEstimate, corrected: &AggregateEstimate) -> Vec<CategoryShift> {
    raw.categories
        .iter()
        .filter_map(|(category, raw_value)| {
            corrected.value(*category).map(|corrected_value| CategoryShift {
                category: *category,
                raw: *raw_value,
                corrected: corrected_value,
                shift: corrected_value - raw_value,
            })
        })
        .collect()
}
