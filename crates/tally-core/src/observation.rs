use std::cmp::Ordering;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryMap};
use crate::constants::SECONDS_PER_DAY;
use crate::errors::{TallyError, TallyResult};

/// Read access shared by raw and corrected observations.
pub trait Observed {
    fn source(&self) -> &str;
    fn timestamp(&self) -> DateTime<Utc>;
    fn categories(&self) -> &CategoryMap;

    /// Value for one category, `None` when the observation did not measure it.
    fn value(&self, category: Category) -> Option<f64> {
        self.categories().get(&category).copied()
    }
}

/// One timestamped, source-attributed poll result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub source: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub categories: CategoryMap,
}

impl Observation {
    pub fn new(
        source: impl Into<String>,
        timestamp: DateTime<Utc>,
        categories: impl IntoIterator<Item = (Category, f64)>,
    ) -> Self {
        Self {
            source: source.into(),
            timestamp,
            categories: categories.into_iter().collect(),
        }
    }

    /// Reject values that cannot be averaged (NaN, infinities).
    pub fn validate(&self) -> TallyResult<()> {
        if let Some((category, value)) = self.categories.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TallyError::MalformedObservation {
                source_id: self.source.clone(),
                timestamp: self.timestamp,
                reason: format!("{category} value {value} is not finite"),
            });
        }
        Ok(())
    }

    /// Parse a JSON array of observations.
    pub fn parse_json(json: &str) -> TallyResult<Vec<Observation>> {
        let observations: Vec<Observation> = serde_json::from_str(json)?;
        validate_all(&observations)?;
        Ok(observations)
    }
}

impl Observed for Observation {
    fn source(&self) -> &str {
        &self.source
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn categories(&self) -> &CategoryMap {
        &self.categories
    }
}

/// An observation after its source's house effect has been removed.
///
/// `categories[c] == original_categories[c] + adjustments[c]` for every
/// category present in `adjustments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedObservation {
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub categories: CategoryMap,
    pub original_categories: CategoryMap,
    pub adjustments: CategoryMap,
}

impl AdjustedObservation {
    /// Whether any correction was applied.
    pub fn is_adjusted(&self) -> bool {
        !self.adjustments.is_empty()
    }
}

impl Observed for AdjustedObservation {
    fn source(&self) -> &str {
        &self.source
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn categories(&self) -> &CategoryMap {
        &self.categories
    }
}

/// Validate every observation, failing on the first malformed one.
pub fn validate_all(observations: &[Observation]) -> TallyResult<()> {
    observations.iter().try_for_each(Observation::validate)
}

/// Most recent timestamp in the collection.
pub fn latest_timestamp<O: Observed>(observations: &[O]) -> Option<DateTime<Utc>> {
    observations.iter().map(Observed::timestamp).max()
}

/// Age of `timestamp` relative to `reference`, in fractional days, never negative.
pub fn age_days(reference: DateTime<Utc>, timestamp: DateTime<Utc>) -> f64 {
    (seconds(reference - timestamp) / SECONDS_PER_DAY).max(0.0)
}

/// Absolute distance between two instants in fractional days.
pub fn distance_days(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    seconds(a - b).abs() / SECONDS_PER_DAY
}

/// Signed length of `delta` in seconds, keeping the sub-second part.
fn seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

/// Total order over observations: timestamp, then source, then values.
///
/// Sorting by this key before summing makes every derived average
/// independent of the order the caller supplied.
pub fn canonical_order(a: &Observation, b: &Observation) -> Ordering {
    a.timestamp
        .cmp(&b.timestamp)
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| {
            let left = a.categories.iter();
            let right = b.categories.iter();
            for ((ca, va), (cb, vb)) in left.zip(right) {
                let ord = ca.cmp(cb).then_with(|| va.total_cmp(vb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            a.categories.len().cmp(&b.categories.len())
        })
}

/// Borrowed copy of `observations` in canonical order.
pub fn sorted_canonical(observations: &[Observation]) -> Vec<&Observation> {
    let mut sorted: Vec<&Observation> = observations.iter().collect();
    sorted.sort_by(|a, b| canonical_order(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(day)
    }

    #[test]
    fn age_is_never_negative() {
        assert_eq!(age_days(at(0), at(3)), 0.0);
        assert_eq!(age_days(at(3), at(0)), 3.0);
    }

    #[test]
    fn sub_second_offsets_are_kept() {
        let later = at(14) + Duration::milliseconds(900);
        assert!(distance_days(at(0), later) > 14.0);
        assert!(age_days(later, at(0)) > 14.0);
        assert_eq!(distance_days(at(0), later), distance_days(later, at(0)));
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance_days(at(0), at(5)), distance_days(at(5), at(0)));
        assert_eq!(distance_days(at(0), at(5)), 5.0);
    }

    #[test]
    fn canonical_order_breaks_timestamp_ties_by_source() {
        let a = Observation::new("A", at(1), [(Category::Ap, 20.0)]);
        let b = Observation::new("B", at(1), [(Category::Ap, 10.0)]);
        assert_eq!(canonical_order(&a, &b), Ordering::Less);
        assert_eq!(canonical_order(&b, &a), Ordering::Greater);
    }
}
