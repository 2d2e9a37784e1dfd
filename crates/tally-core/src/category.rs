use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TallyError;

/// Per-category values. Absence means "not measured", never zero.
pub type CategoryMap = BTreeMap<Category, f64>;

/// The closed set of parties a poll reports support for.
///
/// Declaration order is the canonical iteration order everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Ap,
    H,
    Frp,
    #[serde(rename = "SV")]
    Sv,
    Sp,
    #[serde(rename = "KrF")]
    Krf,
    V,
    #[serde(rename = "MDG")]
    Mdg,
    R,
    Andre,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 10] = [
        Category::Ap,
        Category::H,
        Category::Frp,
        Category::Sv,
        Category::Sp,
        Category::Krf,
        Category::V,
        Category::Mdg,
        Category::R,
        Category::Andre,
    ];

    /// The party abbreviation used in poll tables.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Category::Ap => "Ap",
            Category::H => "H",
            Category::Frp => "Frp",
            Category::Sv => "SV",
            Category::Sp => "Sp",
            Category::Krf => "KrF",
            Category::V => "V",
            Category::Mdg => "MDG",
            Category::R => "R",
            Category::Andre => "Andre",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Category {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.abbreviation() == s.trim())
            .ok_or_else(|| TallyError::UnknownCategory {
                name: s.to_string(),
            })
    }
}
