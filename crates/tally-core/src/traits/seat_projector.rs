use std::collections::BTreeMap;

use crate::category::{Category, CategoryMap};
use crate::errors::TallyResult;

/// Seats won per category.
pub type SeatAllocation = BTreeMap<Category, u32>;

/// External conversion from vote-share estimates to seat counts.
pub trait ISeatProjector: Send + Sync {
    fn project(&self, percentages: &CategoryMap) -> TallyResult<SeatAllocation>;
}
