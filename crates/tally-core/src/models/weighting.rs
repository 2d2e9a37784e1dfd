use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TallyError;

/// Recency weighting scheme for temporal aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Every observation counts equally.
    #[default]
    None,
    /// `max(0, (lookback - age) / lookback)`.
    Linear,
    /// `0.5 ^ (age / half_life)`.
    Exponential,
    /// Linear weight squared.
    Quadratic,
}

impl Weighting {
    pub const ALL: [Weighting; 4] = [
        Weighting::None,
        Weighting::Linear,
        Weighting::Exponential,
        Weighting::Quadratic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weighting::None => "none",
            Weighting::Linear => "linear",
            Weighting::Exponential => "exponential",
            Weighting::Quadratic => "quadratic",
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weighting {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Weighting::ALL
            .into_iter()
            .find(|w| w.name() == wanted)
            .ok_or_else(|| TallyError::UnknownWeighting {
                name: s.to_string(),
            })
    }
}
